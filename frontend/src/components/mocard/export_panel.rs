use backend::domain::export_service::{ExportState, DISMISS_LABEL};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExportPanelProps {
    pub state: ExportState,
    pub error: Option<&'static str>,
    pub on_export: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ExportPanel)]
pub fn export_panel(props: &ExportPanelProps) -> Html {
    let busy = props.state.is_busy();

    html! {
        <div class="export-panel">
            {if let Some(message) = props.error {
                html! {
                    <div data-testid="export-error" class="form-message error" role="alert">
                        <span>{message}</span>
                        <button
                            class="btn btn-dismiss"
                            aria-label={DISMISS_LABEL}
                            onclick={props.on_dismiss.reform(|_: MouseEvent| ())}
                        >
                            {"×"}
                        </button>
                    </div>
                }
            } else { html! {} }}

            <button
                data-testid="download-btn"
                class="btn btn-primary download-btn"
                disabled={busy}
                onclick={props.on_export.reform(|_: MouseEvent| ())}
            >
                <span class="download-icon">{"⬇"}</span>
                {props.state.button_label()}
            </button>
        </div>
    }
}
