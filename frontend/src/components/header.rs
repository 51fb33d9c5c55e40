use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppTab {
    Transactions,
    MoCard,
}

impl AppTab {
    pub const ALL: [AppTab; 2] = [AppTab::Transactions, AppTab::MoCard];

    pub fn label(self) -> &'static str {
        match self {
            AppTab::Transactions => "SpendSense",
            AppTab::MoCard => "墨卡 MoCard",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: AppTab,
    pub on_select: Callback<AppTab>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <nav class="app-tabs" role="tablist">
                {for AppTab::ALL.iter().map(|&tab| {
                    let selected = tab == props.active;
                    let onclick = props.on_select.reform(move |_: MouseEvent| tab);
                    html! {
                        <button
                            role="tab"
                            class={classes!("app-tab", selected.then_some("active"))}
                            aria-selected={selected.to_string()}
                            onclick={onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                })}
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(AppTab::ALL[0], AppTab::Transactions);
        assert_eq!(AppTab::Transactions.label(), "SpendSense");
        assert_eq!(AppTab::MoCard.label(), "墨卡 MoCard");
    }
}
