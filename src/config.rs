use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ui::theme::{self, Theme};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Title shown on the entry bar block
    pub title: String,
    /// Prompt prefix inside the entry bar
    pub prompt: String,
    /// Hint shown while the draft is empty
    pub entry_hint: String,
    /// Checkbox mark for completed items
    pub checked_mark: String,
    /// Checkbox mark for open items
    pub unchecked_mark: String,
    /// Placeholder headline when the list is empty
    pub empty_title: String,
    /// Placeholder detail line when the list is empty
    pub empty_hint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Start with the entry bar focused instead of the list
    pub start_in_entry: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preset name, see [`Theme::from_preset`]
    pub preset: String,
    /// Optional hex accent override, e.g. "#b45309"
    #[serde(deserialize_with = "theme::serde_color::deserialize_option")]
    pub accent: Option<Color>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            title: " ticklist ".to_string(),
            prompt: "❯ ".to_string(),
            entry_hint: "Add a new task...".to_string(),
            checked_mark: "[x] ".to_string(),
            unchecked_mark: "[ ] ".to_string(),
            empty_title: "No tasks yet".to_string(),
            empty_hint: "Add a task to get started".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            start_in_entry: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
            accent: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the configured theme, falling back to the default preset
    /// when the name is unknown.
    pub fn resolve_theme(&self) -> Theme {
        let mut resolved = Theme::from_preset(&self.theme.preset).unwrap_or_else(|| {
            tracing::warn!("Unknown theme preset {:?}, using default", self.theme.preset);
            Theme::default()
        });

        if let Some(accent) = self.theme.accent {
            resolved.accent = accent;
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.appearance.prompt, "❯ ");
        assert_eq!(config.theme.preset, "default");
        assert!(config.behavior.start_in_entry);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: Config = toml::from_str(
            r#"
            [appearance]
            title = " tasks "

            [behavior]
            start_in_entry = false
            "#,
        )
        .unwrap();

        assert_eq!(config.appearance.title, " tasks ");
        assert!(!config.behavior.start_in_entry);
        // Untouched sections keep their defaults
        assert_eq!(config.appearance.checked_mark, "[x] ");
    }

    #[test]
    fn test_accent_override_applies() {
        let config: Config = toml::from_str(
            r##"
            [theme]
            preset = "default"
            accent = "#ff0000"
            "##,
        )
        .unwrap();

        let theme = config.resolve_theme();
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_unknown_preset_falls_back() {
        let config: Config = toml::from_str(
            r#"
            [theme]
            preset = "no-such-theme"
            "#,
        )
        .unwrap();

        let theme = config.resolve_theme();
        assert_eq!(theme.background, Theme::default().background);
    }
}
