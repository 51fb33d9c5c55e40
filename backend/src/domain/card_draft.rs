//! Session-only editor state for a card: the Markdown text and the selected
//! theme. Nothing here is persisted.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{MoCardConfig, Theme};

use super::card_renderer::{CardElement, CardRenderer};
use super::themes::{find_theme, theme_or_default};

/// Text shown when the editor first opens
pub const DEFAULT_MARKDOWN: &str = "# 🎨 欢迎使用墨卡

> 让文字，变成艺术

### 功能特性
- **实时预览** - 所见即所得
- **国风主题** - 水墨、故宫、赛博修仙...
- **一键导出** - 下载高清 PNG 图片

*墨卡 · 由 AI 驱动*";

#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    markdown: String,
    theme: &'static Theme,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self::with_config(&MoCardConfig::default())
    }
}

impl CardDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &MoCardConfig) -> Self {
        Self {
            markdown: DEFAULT_MARKDOWN.to_string(),
            theme: theme_or_default(&config.default_theme_id),
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn set_markdown(&mut self, markdown: impl Into<String>) {
        self.markdown = markdown.into();
    }

    /// Switch to the theme with `theme_id`. Unknown ids leave the current
    /// theme selected and return false.
    pub fn select_theme(&mut self, theme_id: &str) -> bool {
        match find_theme(theme_id) {
            Some(theme) => {
                if theme.id != self.theme.id {
                    info!("Card theme changed: {} -> {}", self.theme.id, theme.id);
                }
                self.theme = theme;
                true
            }
            None => {
                warn!("Ignoring unknown theme id '{}'", theme_id);
                false
            }
        }
    }

    pub fn render(&self, renderer: &CardRenderer, today: NaiveDate) -> CardElement {
        renderer.render(&self.markdown, self.theme, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::themes::all_themes;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()
    }

    #[test]
    fn test_new_draft_uses_welcome_text_and_default_theme() {
        let draft = CardDraft::new();
        assert!(draft.markdown().starts_with("# 🎨 欢迎使用墨卡"));
        assert_eq!(draft.theme().id, "ink-smoke");
    }

    #[test]
    fn test_welcome_text_renders_expected_structure() {
        let card = CardDraft::new().render(&CardRenderer::new(), today());
        assert_eq!(card.descendants("h1")[0].text_content(), "🎨 欢迎使用墨卡");
        assert_eq!(card.descendants("h3")[0].text_content(), "功能特性");
        assert_eq!(card.descendants("li").len(), 3);
        assert_eq!(card.descendants("blockquote").len(), 1);
    }

    #[test]
    fn test_config_selects_initial_theme() {
        let config = MoCardConfig {
            default_theme_id: "bamboo-green".to_string(),
            ..MoCardConfig::default()
        };
        assert_eq!(CardDraft::with_config(&config).theme().id, "bamboo-green");

        let unknown = MoCardConfig {
            default_theme_id: "nope".to_string(),
            ..MoCardConfig::default()
        };
        assert_eq!(CardDraft::with_config(&unknown).theme().id, "ink-smoke");
    }

    #[test]
    fn test_select_theme() {
        let mut draft = CardDraft::new();
        assert!(draft.select_theme("lucky-red"));
        assert_eq!(draft.theme().id, "lucky-red");

        assert!(!draft.select_theme("missing"));
        assert_eq!(draft.theme().id, "lucky-red");
    }

    #[test]
    fn test_switching_themes_preserves_content() {
        let mut draft = CardDraft::new();
        draft.set_markdown("# Title\n\nSome **bold** text");
        let renderer = CardRenderer::new();
        let first = draft.render(&renderer, today());

        for theme in all_themes() {
            assert!(draft.select_theme(theme.id));
            let card = draft.render(&renderer, today());
            assert_eq!(draft.markdown(), "# Title\n\nSome **bold** text");
            assert_eq!(card.text_content(), first.text_content());
            assert_eq!(card.style_value("background-color"), Some(theme.bg_color));
            assert_eq!(
                card.descendants("h1")[0].style_value("color"),
                Some(theme.text_primary)
            );
            assert_eq!(
                card.descendants("strong")[0].style_value("color"),
                Some(theme.text_primary)
            );
        }
    }
}
