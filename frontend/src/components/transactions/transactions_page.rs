use shared::SpendSenseConfig;
use yew::prelude::*;

use crate::components::forms::TransactionForm;
use crate::components::transactions::TransactionTable;
use crate::hooks::use_transactions::use_transactions;
use crate::services::local_storage::open_store;

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    pub config: SpendSenseConfig,
}

#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    let store = use_memo(props.config.clone(), open_store);
    let transactions = use_transactions((*store).clone());
    let state = &transactions.state;
    let actions = &transactions.actions;

    let on_dismiss = actions.dismiss_storage_error.reform(|_: MouseEvent| ());

    html! {
        <div class="page transactions-page">
            <header class="page-header">
                <nav class="breadcrumb">
                    <span>{"Home"}</span>
                    <span class="separator">{"/"}</span>
                    <span>{"Transactions"}</span>
                </nav>
                <h1>{"Transactions"}</h1>
            </header>

            {if let Some(message) = state.storage_error.as_ref() {
                html! {
                    <div class="form-message error" role="alert">
                        <span>{message}</span>
                        <button class="btn btn-dismiss" aria-label="Dismiss" onclick={on_dismiss}>{"×"}</button>
                    </div>
                }
            } else { html! {} }}

            <section class="card">
                <TransactionForm
                    config={props.config.clone()}
                    on_submit={actions.add_transaction.clone()}
                />
            </section>

            <TransactionTable
                transactions={state.transactions.clone()}
                config={props.config.clone()}
                on_delete={actions.delete_transaction.clone()}
            />
        </div>
    }
}
