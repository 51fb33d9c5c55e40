use backend::domain::export_service::{ExportController, ExportState};
use shared::MoCardConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::date_utils::now_millis;
use crate::services::html_to_image::{AnchorDownloadSink, HtmlToImageRasterizer};
use crate::services::logging::Logger;

pub struct UseCardExportResult {
    pub state: ExportState,
    /// Message for the dismissible error alert
    pub error: Option<&'static str>,
    pub export: Callback<()>,
    pub dismiss_error: Callback<()>,
}

/// Export the element behind `preview` as a PNG named after `theme_id`
#[hook]
pub fn use_card_export(
    preview: NodeRef,
    theme_id: &'static str,
    config: MoCardConfig,
) -> UseCardExportResult {
    let controller = use_memo(config, ExportController::with_config);
    let export_state = use_state(|| ExportState::Ready);
    let error = use_state(|| Option::<&'static str>::None);

    let export = {
        let controller = controller.clone();
        let export_state = export_state.clone();
        let error = error.clone();

        use_callback(theme_id, move |_: (), theme_id| {
            if controller.state().is_busy() {
                Logger::debug_with_component("export", "Export already running");
                return;
            }
            let theme_id: &'static str = *theme_id;
            let controller = controller.clone();
            let export_state = export_state.clone();
            let error = error.clone();
            let rasterizer = HtmlToImageRasterizer::new(preview.clone());

            error.set(None);
            export_state.set(ExportState::Exporting);

            spawn_local(async move {
                let result = controller
                    .export(theme_id, &rasterizer, &AnchorDownloadSink, now_millis())
                    .await;
                if let Err(e) = result {
                    error.set(e.user_message());
                }
                export_state.set(controller.state());
            });
        })
    };

    let dismiss_error = {
        let error = error.clone();
        use_callback((), move |_, _| error.set(None))
    };

    UseCardExportResult {
        state: *export_state,
        error: *error,
        export,
        dismiss_error,
    }
}
