//! # Domain Module
//!
//! Business logic for both applications. Everything here is platform
//! independent: browser capabilities are passed in through traits.
//!
//! ## SpendSense
//! - [`transaction_form`]: validation of raw form input
//! - [`transaction_table`]: formatting of records for the list view
//!
//! ## MoCard
//! - [`themes`]: the static theme registry
//! - [`card_renderer`]: Markdown to a themed element tree
//! - [`card_draft`]: editor state
//! - [`export_service`]: PNG export orchestration

pub mod card_draft;
pub mod card_renderer;
pub mod export_service;
pub mod themes;
pub mod transaction_form;
pub mod transaction_table;

pub use card_draft::{CardDraft, DEFAULT_MARKDOWN};
pub use card_renderer::{render_card, CardElement, CardNode, CardRenderer};
pub use export_service::{
    DownloadSink, ExportController, ExportError, ExportState, FileDownloadSink, RasterError,
    RasterOptions, Rasterizer,
};
pub use transaction_form::TransactionFormService;
pub use transaction_table::TransactionTableService;
