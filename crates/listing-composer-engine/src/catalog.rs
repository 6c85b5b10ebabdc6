//! Static metadata for every block type.
//!
//! Each variant owns its default icon, default title, input hints and demo
//! content. All lookups are pure and exhaustive over [`BlockType`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on footer segments rendered side by side.
pub const MAX_FOOTER_LINES: usize = 4;

/// Recommended maximum length of the mobile summary, in characters.
pub const MAX_MOBILE_SUMMARY_LEN: usize = 800;

/// Icons offered when picking a block icon.
pub const AVAILABLE_ICONS: &[&str] = &[
    "🖼️", "📝", "✦", "⚙", "🔧", "📦", "💡", "⭐", "🎯", "📊", "🔍", "⚡", "🛠️", "📐", "🎨", "📋",
];

/// Bullet glyphs offered for grids and check lists.
pub const AVAILABLE_BULLETS: &[&str] = &["✓", "•", "▸", "★", "►", "◆", "→", "▪"];

/// The closed set of renderable block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockType {
    /// A single image, aligned per options.
    Image,
    /// Markdown prose.
    RichText,
    /// `Title | Description` cards in a grid.
    KeyValueGrid,
    /// `Key | Value` rows with optional column headers.
    DataTable,
    /// `Category | Options` cards in a single colored row.
    FeatureCards,
    /// One item per line, each with a bullet.
    CheckList,
}

impl BlockType {
    pub const ALL: [BlockType; 6] = [
        BlockType::Image,
        BlockType::RichText,
        BlockType::KeyValueGrid,
        BlockType::DataTable,
        BlockType::FeatureCards,
        BlockType::CheckList,
    ];

    /// Numeric code used in exported documents.
    pub fn code(self) -> u8 {
        match self {
            BlockType::Image => 0,
            BlockType::RichText => 1,
            BlockType::KeyValueGrid => 2,
            BlockType::DataTable => 3,
            BlockType::FeatureCards => 4,
            BlockType::CheckList => 5,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| u64::from(t.code()) == code)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Variant name as written in source and accepted on import.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Image => "Image",
            BlockType::RichText => "RichText",
            BlockType::KeyValueGrid => "KeyValueGrid",
            BlockType::DataTable => "DataTable",
            BlockType::FeatureCards => "FeatureCards",
            BlockType::CheckList => "CheckList",
        }
    }

    pub fn default_icon(self) -> &'static str {
        match self {
            BlockType::Image => "🖼️",
            BlockType::RichText => "📝",
            BlockType::KeyValueGrid => "✦",
            BlockType::DataTable => "⚙",
            BlockType::FeatureCards => "🔧",
            BlockType::CheckList => "📦",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            BlockType::Image => "Product image",
            BlockType::RichText => "Description",
            BlockType::KeyValueGrid => "Highlights",
            BlockType::DataTable => "Technical data",
            BlockType::FeatureCards => "Compatibility",
            BlockType::CheckList => "In the box",
        }
    }

    /// Human label for block pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            BlockType::Image => "Image",
            BlockType::RichText => "Rich text",
            BlockType::KeyValueGrid => "Keyword cards",
            BlockType::DataTable => "Data table",
            BlockType::FeatureCards => "Feature cards",
            BlockType::CheckList => "Check list",
        }
    }

    /// Short description of the expected input format.
    pub fn input_label(self) -> &'static str {
        match self {
            BlockType::Image => "Image URL or data URI",
            BlockType::RichText => "Text (Markdown supported)",
            BlockType::KeyValueGrid => "Per line: Title | Description",
            BlockType::DataTable => "Per line: Property | Value",
            BlockType::FeatureCards => "Per line: Category | Options",
            BlockType::CheckList => "Per line: one item",
        }
    }

    pub fn input_placeholder(self) -> &'static str {
        match self {
            BlockType::Image => "https://example.com/image.jpg",
            BlockType::RichText => "**Bold** and *italic* are supported...",
            BlockType::KeyValueGrid => "Title | Description\nTitle 2 | Description 2",
            BlockType::DataTable => "Property | Value\nProperty 2 | Value 2",
            BlockType::FeatureCards => "Category | Option 1, Option 2\nCategory 2 | Option 3",
            BlockType::CheckList => "Item 1\nItem 2\nItem 3",
        }
    }

    pub fn demo_content(self) -> &'static str {
        match self {
            BlockType::Image => "https://placehold.co/600x400/1a1a1a/f5c518?text=Product",
            BlockType::RichText => {
                "**This product** offers outstanding quality and well thought-out features.\n\n\
                 Solid build quality keeps it reliable in everyday use."
            }
            BlockType::KeyValueGrid => {
                "Premium quality | First-class materials and finish\n\
                 Innovative design | Modern looks meet function\n\
                 Easy to use | Intuitive handling for everyone\n\
                 Durability | Robust and dependable"
            }
            BlockType::DataTable => {
                "Material | Aluminium / plastic\n\
                 Dimensions | 250 × 150 × 80 mm\n\
                 Weight | 450 g\n\
                 Color | Black\n\
                 Ports | USB-C, HDMI"
            }
            BlockType::FeatureCards => "Type A | Standard, Premium, Pro\nType B | Basic, Advanced",
            BlockType::CheckList => {
                "1× Main unit\n1× USB-C cable\n1× Quick start guide\n1× Warranty card"
            }
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Exported documents carry the numeric code; imports also accept the name.
impl Serialize for BlockType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Self::from_code(code)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown block type code {code}"))),
            Raw::Name(name) => Self::from_name(&name)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown block type `{name}`"))),
        }
    }
}
