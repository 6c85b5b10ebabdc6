use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::BlockType;
use crate::ids::short_id;

/// Horizontal placement of an image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

// Documents store alignment as free text; anything unrecognized centers.
impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_css(&raw).unwrap_or_else(|| {
            log::warn!("unknown image alignment `{raw}`; centering");
            Alignment::Center
        }))
    }
}

impl Alignment {
    /// Case-insensitive `left`, `center` or `right`.
    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Type-specific configuration of a block.
///
/// Not every field applies to every [`BlockType`]; renderers read only the
/// ones they care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BlockOptions {
    pub bullet_char: String,
    pub alternating_background: bool,
    pub column1_header: String,
    pub column2_header: String,
    pub show_column_headers: bool,
    /// Grid width for key/value grids; clamped to 1..=3 when rendering.
    pub columns: i32,
    pub alignment: Alignment,
    /// Image width in pixels.
    #[serde(deserialize_with = "image_width")]
    pub max_width: u32,
}

const DEFAULT_IMAGE_WIDTH: u32 = 600;

/// Accepts any JSON integer; widths outside `u32` fall back to the default.
fn image_width<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(u32::try_from(raw).unwrap_or_else(|_| {
        log::warn!("image width {raw} is out of range; using {DEFAULT_IMAGE_WIDTH}px");
        DEFAULT_IMAGE_WIDTH
    }))
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            bullet_char: "✓".to_string(),
            alternating_background: true,
            column1_header: "Property".to_string(),
            column2_header: "Value".to_string(),
            show_column_headers: true,
            columns: 2,
            alignment: Alignment::Center,
            max_width: DEFAULT_IMAGE_WIDTH,
        }
    }
}

impl BlockOptions {
    /// Options a freshly created block of `block_type` starts with.
    pub fn for_type(block_type: BlockType) -> Self {
        let base = Self::default();
        match block_type {
            BlockType::Image => Self {
                alignment: Alignment::Center,
                max_width: DEFAULT_IMAGE_WIDTH,
                ..base
            },
            BlockType::KeyValueGrid => Self {
                bullet_char: "▸".to_string(),
                columns: 2,
                ..base
            },
            BlockType::DataTable => Self {
                column1_header: "Specification".to_string(),
                column2_header: "Value".to_string(),
                show_column_headers: true,
                alternating_background: true,
                ..base
            },
            BlockType::CheckList => Self {
                bullet_char: "✓".to_string(),
                ..base
            },
            BlockType::RichText | BlockType::FeatureCards => base,
        }
    }

    /// Column count clamped to the supported grid widths.
    pub fn grid_columns(&self) -> usize {
        self.columns.clamp(1, 3) as usize
    }
}

/// A typed, positioned block within a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockDefinition {
    #[serde(default = "short_id")]
    pub id: String,
    #[serde(rename = "Type")]
    pub block_type: BlockType,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub options: BlockOptions,
}

fn default_icon() -> String {
    "📄".to_string()
}

fn default_title() -> String {
    "New block".to_string()
}

impl BlockDefinition {
    /// Creates a block with the catalog defaults for `block_type`.
    pub fn new_default(block_type: BlockType, order: i32) -> Self {
        Self {
            id: short_id(),
            block_type,
            icon: block_type.default_icon().to_string(),
            title: block_type.default_title().to_string(),
            order,
            options: BlockOptions::for_type(block_type),
        }
    }

    /// Copy with a fresh id. Everything else is preserved.
    pub fn duplicate(&self) -> Self {
        Self {
            id: short_id(),
            ..self.clone()
        }
    }
}
