use backend::domain::CardDraft;
use shared::MoCardConfig;
use yew::prelude::*;

use super::{ExportPanel, MarkdownEditor, PreviewCard, ThemeSwitcher};
use crate::hooks::use_card_export::use_card_export;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct MoCardPageProps {
    pub config: MoCardConfig,
}

#[function_component(MoCardPage)]
pub fn mocard_page(props: &MoCardPageProps) -> Html {
    let draft = {
        let config = props.config.clone();
        use_state(move || CardDraft::with_config(&config))
    };
    let preview_ref = use_node_ref();
    let export = use_card_export(preview_ref.clone(), draft.theme().id, props.config.clone());

    let on_markdown_change = {
        let draft = draft.clone();
        Callback::from(move |markdown: String| {
            let mut next = (*draft).clone();
            next.set_markdown(markdown);
            draft.set(next);
        })
    };

    let on_theme_select = {
        let draft = draft.clone();
        Callback::from(move |theme_id: &'static str| {
            let mut next = (*draft).clone();
            if next.select_theme(theme_id) {
                draft.set(next);
            }
        })
    };

    html! {
        <div class="page mocard-page">
            <header class="page-header mocard-header">
                <div class="brand">
                    <div class="brand-mark"></div>
                    <span class="brand-name">{"墨卡"}</span>
                    <span class="brand-sub">{"MoCard"}</span>
                </div>
                <span class="tagline">{"让文字，变成艺术"}</span>
            </header>

            <main class="mocard-layout">
                <div class="panel editor-panel">
                    <MarkdownEditor value={draft.markdown().to_string()} on_change={on_markdown_change} />
                    <ThemeSwitcher current={draft.theme()} on_select={on_theme_select} />
                </div>

                <div class="panel preview-panel">
                    <PreviewCard
                        markdown={draft.markdown().to_string()}
                        theme={draft.theme()}
                        today={today()}
                        config={props.config.clone()}
                        node_ref={preview_ref}
                    />
                    <ExportPanel
                        state={export.state}
                        error={export.error}
                        on_export={export.export}
                        on_dismiss={export.dismiss_error}
                    />
                </div>
            </main>
        </div>
    }
}
