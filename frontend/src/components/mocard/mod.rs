pub mod export_panel;
pub mod markdown_editor;
pub mod mocard_page;
pub mod preview_card;
pub mod theme_switcher;

pub use export_panel::ExportPanel;
pub use markdown_editor::MarkdownEditor;
pub use mocard_page::MoCardPage;
pub use preview_card::PreviewCard;
pub use theme_switcher::ThemeSwitcher;
