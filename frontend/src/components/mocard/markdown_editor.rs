use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarkdownEditorProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(MarkdownEditor)]
pub fn markdown_editor(props: &MarkdownEditorProps) -> Html {
    let oninput = props
        .on_change
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    html! {
        <div class="editor-section">
            <h2>{"Markdown 编辑器"}</h2>
            <textarea
                data-testid="markdown-input"
                class="markdown-input"
                placeholder="输入 Markdown 内容..."
                value={props.value.clone()}
                oninput={oninput}
            />
        </div>
    }
}
