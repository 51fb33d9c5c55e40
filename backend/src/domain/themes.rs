//! Theme registry for rendered cards.
//!
//! The registry is a static table; themes are never created or changed at
//! runtime.

use log::warn;
use shared::Theme;

const DEFAULT_CODE_BACKGROUND: &str = "rgba(0,0,0,0.05)";

/// All themes, in switcher order. The first one is the default.
pub static THEMES: [Theme; 5] = [
    Theme {
        id: "ink-smoke",
        name: "水墨云烟",
        emoji: "🍵",
        bg_color: "#F7F7F2",
        bg_gradient: Some("linear-gradient(to bottom, #F7F7F2, #E5E5E0)"),
        text_primary: "#2C2C2C",
        text_secondary: "#4A4A4A",
        accent_color: "#B22222",
        border_color: "#D4D4D4",
        font_family: r#""Noto Serif SC", "Songti SC", "SimSun", serif"#,
        glow_effect: None,
        code_background: DEFAULT_CODE_BACKGROUND,
    },
    Theme {
        id: "lucky-red",
        name: "红运当头",
        emoji: "🧧",
        bg_color: "#C41E3A",
        bg_gradient: Some("linear-gradient(135deg, #C41E3A, #8B0000)"),
        text_primary: "#FFD700",
        text_secondary: "#FFFFFF",
        accent_color: "#FFD700",
        border_color: "#FFD700",
        font_family: r#""Noto Sans SC", "Microsoft YaHei", "PingFang SC", sans-serif"#,
        glow_effect: None,
        code_background: DEFAULT_CODE_BACKGROUND,
    },
    Theme {
        id: "cyber-taoist",
        name: "赛博修仙",
        emoji: "⚡",
        bg_color: "#0F172A",
        bg_gradient: None,
        text_primary: "#00FFFF",
        text_secondary: "#94A3B8",
        accent_color: "#FF00FF",
        border_color: "#00FFFF",
        font_family: r#""Noto Sans SC", "Microsoft YaHei", sans-serif"#,
        glow_effect: Some("0 0 10px currentColor"),
        code_background: "#1E293B",
    },
    Theme {
        id: "retro-shanghai",
        name: "复古画报",
        emoji: "🔔",
        bg_color: "#F0E6D2",
        bg_gradient: None,
        text_primary: "#1E3A8A",
        text_secondary: "#4A4A4A",
        accent_color: "#8B4513",
        border_color: "#C4A574",
        font_family: r#""Noto Sans SC", "Microsoft YaHei", Impact, sans-serif"#,
        glow_effect: None,
        code_background: DEFAULT_CODE_BACKGROUND,
    },
    Theme {
        id: "bamboo-green",
        name: "竹林清风",
        emoji: "🌱",
        bg_color: "#F0FFF4",
        bg_gradient: Some("linear-gradient(to bottom, #FFFFFF, #F0FFF4)"),
        text_primary: "#14532D",
        text_secondary: "#166534",
        accent_color: "#22C55E",
        border_color: "#86EFAC",
        font_family: r#""Noto Sans SC", "Microsoft YaHei", "PingFang SC", sans-serif"#,
        glow_effect: None,
        code_background: DEFAULT_CODE_BACKGROUND,
    },
];

pub fn all_themes() -> &'static [Theme] {
    &THEMES
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

/// Look up `id`, falling back to the default theme for unknown ids
pub fn theme_or_default(id: &str) -> &'static Theme {
    find_theme(id).unwrap_or_else(|| {
        let fallback = default_theme();
        warn!("Theme with id \"{}\" not found. Falling back to \"{}\".", id, fallback.id);
        fallback
    })
}

/// Border of a theme's swatch button in the switcher
pub fn swatch_border(theme: &Theme) -> String {
    match theme.id {
        "lucky-red" => format!("2px solid {}", theme.border_color),
        "cyber-taoist" => format!("1px solid {}", theme.border_color),
        _ => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_five_unique_themes() {
        let ids: HashSet<&str> = all_themes().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);
        for id in ["ink-smoke", "lucky-red", "cyber-taoist", "retro-shanghai", "bamboo-green"] {
            assert!(ids.contains(id), "missing theme {}", id);
        }
    }

    #[test]
    fn test_default_theme_is_ink_smoke() {
        assert_eq!(default_theme().id, "ink-smoke");
    }

    #[test]
    fn test_theme_colors() {
        let ink = find_theme("ink-smoke").unwrap();
        assert_eq!((ink.bg_color, ink.text_primary, ink.accent_color), ("#F7F7F2", "#2C2C2C", "#B22222"));

        let red = find_theme("lucky-red").unwrap();
        assert_eq!((red.bg_color, red.text_primary), ("#C41E3A", "#FFD700"));

        let cyber = find_theme("cyber-taoist").unwrap();
        assert_eq!((cyber.bg_color, cyber.text_primary), ("#0F172A", "#00FFFF"));
        assert!(cyber.glow_effect.is_some());
        assert_eq!(cyber.code_background, "#1E293B");

        let retro = find_theme("retro-shanghai").unwrap();
        assert_eq!((retro.bg_color, retro.text_primary), ("#F0E6D2", "#1E3A8A"));

        let bamboo = find_theme("bamboo-green").unwrap();
        assert_eq!((bamboo.bg_color, bamboo.text_primary), ("#F0FFF4", "#14532D"));
    }

    #[test]
    fn test_themes_have_chinese_names_and_emojis() {
        let names: Vec<&str> = all_themes().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["水墨云烟", "红运当头", "赛博修仙", "复古画报", "竹林清风"]);
        let emojis: Vec<&str> = all_themes().iter().map(|t| t.emoji).collect();
        assert_eq!(emojis, vec!["🍵", "🧧", "⚡", "🔔", "🌱"]);
    }

    #[test]
    fn test_background_prefers_gradient() {
        assert_eq!(find_theme("lucky-red").unwrap().background(), "linear-gradient(135deg, #C41E3A, #8B0000)");
        assert_eq!(find_theme("retro-shanghai").unwrap().background(), "#F0E6D2");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert!(find_theme("vaporwave").is_none());
        assert_eq!(theme_or_default("vaporwave").id, "ink-smoke");
        assert_eq!(theme_or_default("bamboo-green").id, "bamboo-green");
    }

    #[test]
    fn test_swatch_border() {
        assert_eq!(swatch_border(find_theme("lucky-red").unwrap()), "2px solid #FFD700");
        assert_eq!(swatch_border(find_theme("cyber-taoist").unwrap()), "1px solid #00FFFF");
        assert_eq!(swatch_border(default_theme()), "none");
    }
}
