use backend::domain::themes::{all_themes, swatch_border};
use shared::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeSwitcherProps {
    pub current: &'static Theme,
    pub on_select: Callback<&'static str>,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    html! {
        <div class="theme-switcher">
            <h2>{"选择主题风格"}</h2>
            <div class="theme-swatches">
                {for all_themes().iter().map(|theme| {
                    let selected = theme.id == props.current.id;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let id = theme.id;
                        Callback::from(move |_: MouseEvent| on_select.emit(id))
                    };
                    let style = format!(
                        "background-color: {}; color: {}; border: {};",
                        theme.bg_color,
                        theme.text_primary,
                        swatch_border(theme)
                    );

                    html! {
                        <button
                            key={theme.id}
                            data-testid={format!("theme-btn-{}", theme.id)}
                            class={classes!("theme-swatch", selected.then_some("selected"))}
                            aria-pressed={selected.to_string()}
                            title={theme.name}
                            style={style}
                            onclick={onclick}
                        >
                            <span class="swatch-emoji">{theme.emoji}</span>
                            <span class="swatch-name">{theme.name}</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
