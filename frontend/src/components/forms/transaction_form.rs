use std::collections::BTreeMap;

use backend::domain::TransactionFormService;
use shared::{Category, FormField, SpendSenseConfig, TransactionFormState, TransactionInput};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub config: SpendSenseConfig,
    pub on_submit: Callback<TransactionInput>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let form = use_state(|| TransactionFormService::new_form_state(today()));
    let errors = use_state(BTreeMap::<FormField, String>::new);

    let update = |apply: fn(&mut TransactionFormState, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_amount = update(|f, v| f.amount = v);
    let on_description = update(|f, v| f.description = v);
    let on_category = update(|f, v| f.category = v);
    let on_date = update(|f, v| f.date = v);

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let config = props.config.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let service = TransactionFormService::with_config(config.clone());
            let validation = service.validate(&form);

            match validation.cleaned_input.clone() {
                Some(input) if validation.is_valid => {
                    on_submit.emit(input);
                    form.set(TransactionFormService::new_form_state(today()));
                    errors.set(BTreeMap::new());
                }
                _ => errors.set(service.field_errors(&validation)),
            }
        })
    };

    let field_error = |field: FormField| -> Html {
        match errors.get(&field) {
            Some(message) => html! {
                <p id={format!("{}-error", field.input_id())} class="field-error">{message}</p>
            },
            None => html! {},
        }
    };
    let invalid = |field: FormField| errors.contains_key(&field).to_string();
    let described_by = |field: FormField| {
        errors
            .contains_key(&field)
            .then(|| AttrValue::from(format!("{}-error", field.input_id())))
    };

    html! {
        <form class="transaction-form" onsubmit={onsubmit}>
            <h2>{"Add Transaction"}</h2>

            <div class="form-grid">
                <div class="form-group">
                    <label for="amount">{"Amount *"}</label>
                    <div class="amount-input">
                        <span class="currency-prefix">{&props.config.currency_symbol}</span>
                        <input
                            id="amount"
                            type="number"
                            step="0.01"
                            placeholder="0.00"
                            value={form.amount.clone()}
                            oninput={on_amount.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                            aria-invalid={invalid(FormField::Amount)}
                            aria-describedby={described_by(FormField::Amount)}
                        />
                    </div>
                    {field_error(FormField::Amount)}
                </div>

                <div class="form-group">
                    <label for="description">{"Description *"}</label>
                    <input
                        id="description"
                        type="text"
                        placeholder="Enter description"
                        maxlength={props.config.max_description_length.to_string()}
                        value={form.description.clone()}
                        oninput={on_description.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                        aria-invalid={invalid(FormField::Description)}
                        aria-describedby={described_by(FormField::Description)}
                    />
                    {field_error(FormField::Description)}
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        onchange={on_category.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())}
                    >
                        {for Category::ALL.iter().map(|category| html! {
                            <option
                                value={category.as_str()}
                                selected={form.category == category.as_str()}
                            >
                                {category.label()}
                            </option>
                        })}
                    </select>
                    {field_error(FormField::Category)}
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        id="date"
                        type="date"
                        value={form.date.clone()}
                        oninput={on_date.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                        aria-invalid={invalid(FormField::Date)}
                        aria-describedby={described_by(FormField::Date)}
                    />
                    {field_error(FormField::Date)}
                </div>
            </div>

            <button type="submit" class="btn btn-primary">{"+ Add Transaction"}</button>
        </form>
    }
}
