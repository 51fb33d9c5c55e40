use backend::domain::TransactionTableService;
use shared::{SpendSenseConfig, Transaction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Already sorted, newest first
    pub transactions: Vec<Transaction>,
    pub config: SpendSenseConfig,
    pub on_delete: Callback<String>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let service = TransactionTableService::with_config(&props.config);
    let table = service.build_table(&props.transactions);

    if table.is_empty() {
        return html! {
            <section class="transactions-section empty-state">
                <div class="empty-icon">{"🧾"}</div>
                <h3>{"No transactions yet"}</h3>
                <p>{"Start tracking your spending by adding your first transaction."}</p>
            </section>
        };
    }

    let total = service.format_amount(TransactionTableService::total_cents(&props.transactions));

    html! {
        <section class="transactions-section">
            <div class="table-header">
                <h2>{"Transactions"}</h2>
                <span class="count-caption">{&table.count_caption}</span>
            </div>

            <div class="table-container">
                <table class="transactions-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Description"}</th>
                            <th>{"Category"}</th>
                            <th class="amount">{"Amount"}</th>
                            <th class="actions"><span class="sr-only">{"Actions"}</span></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for table.rows.iter().map(|row| {
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                let id = row.id.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                            };

                            html! {
                                <tr key={row.id.clone()}>
                                    <td class="date">{&row.formatted_date}</td>
                                    <td class="description">{&row.description}</td>
                                    <td><span class="category-badge">{&row.category_label}</span></td>
                                    <td class="amount">{&row.formatted_amount}</td>
                                    <td class="actions">
                                        <button
                                            class="btn btn-delete"
                                            aria-label={row.delete_label.clone()}
                                            onclick={on_delete}
                                        >
                                            {"🗑"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="3">{"Total"}</td>
                            <td class="amount">{total}</td>
                            <td></td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </section>
    }
}
