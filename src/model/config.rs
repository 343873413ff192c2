use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml. Every field has a default, so an
/// absent or empty file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding storage.json (default: platform data dir + "tally")
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex colour overrides per theme
    #[serde(default)]
    pub colors: ThemeColors,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: ThemeColors::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default)]
    pub dark: HashMap<String, String>,
    #[serde(default)]
    pub light: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.storage.dir.is_none());
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.dark.is_empty());
    }

    #[test]
    fn full_document() {
        let config: Config = toml::from_str(
            r##"
[storage]
dir = "/tmp/tally-data"

[ui]
show_key_hints = false

[ui.colors.dark]
background = "#000000"

[ui.colors.light]
text = "#1A1A1A"
"##,
        )
        .unwrap();
        assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/tally-data")));
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.dark["background"], "#000000");
        assert_eq!(config.ui.colors.light["text"], "#1A1A1A");
    }
}
