use serde::{Deserialize, Serialize};

/// The three colors a layout is painted with, as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColorScheme {
    /// Header, footer and table header background.
    pub primary_color: String,
    /// Titles, bullets and section underlines.
    pub accent_color: String,
    /// Background of alternating sections.
    pub background_color: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary_color: "#1a1a1a".to_string(),
            accent_color: "#f5c518".to_string(),
            background_color: "#f8f9fa".to_string(),
        }
    }
}
