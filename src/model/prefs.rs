use std::fmt;

use serde::{Deserialize, Serialize};

/// Colour theme, persisted under the `theme` storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Read a stored value. Anything other than `"light"` falls back to dark.
    pub fn from_stored(value: Option<&str>) -> ThemeMode {
        match value.map(str::trim) {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Icon for the toggle control: shows the theme the user would switch *to*
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "\u{2600}",
            ThemeMode::Light => "\u{263E}",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which top-level section is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
        }
    }

    pub fn other(self) -> Section {
        match self {
            Section::Home => Section::About,
            Section::About => Section::Home,
        }
    }
}
