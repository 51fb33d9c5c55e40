use log::LevelFilter;
use shared::AppConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::header::{AppTab, Header};
use components::mocard::MoCardPage;
use components::transactions::TransactionsPage;
use services::logging::ConsoleLogger;

#[derive(Properties, PartialEq, Default)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let active_tab = use_state(|| AppTab::Transactions);

    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: AppTab| active_tab.set(tab))
    };

    html! {
        <>
            <Header active={*active_tab} on_select={on_select} />
            <main class="app-main">
                {match *active_tab {
                    AppTab::Transactions => html! {
                        <TransactionsPage config={props.config.spendsense.clone()} />
                    },
                    AppTab::MoCard => html! {
                        <MoCardPage config={props.config.mocard.clone()} />
                    },
                }}
            </main>
        </>
    }
}

fn main() {
    ConsoleLogger::init(LevelFilter::Info);
    yew::Renderer::<App>::with_props(AppProps::default()).render();
}
