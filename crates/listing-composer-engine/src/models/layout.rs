use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::block::{Alignment, BlockDefinition, BlockOptions};
use super::color_scheme::ColorScheme;
use crate::catalog::BlockType;
use crate::ids::short_id;

/// A named, reusable arrangement of blocks plus a color scheme.
///
/// Block ids are expected to be unique within one layout; that is the
/// caller's responsibility and is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LayoutTemplate {
    #[serde(default = "short_id")]
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub colors: ColorScheme,
    #[serde(default, deserialize_with = "known_blocks")]
    pub blocks: Vec<BlockDefinition>,
}

fn default_name() -> String {
    "New layout".to_string()
}

/// Reads the block list, skipping entries whose `Type` is not in the catalog.
///
/// Any other malformed block is still an error.
fn known_blocks<'de, D>(deserializer: D) -> Result<Vec<BlockDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let mut blocks = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(block_type) = entry.get("Type")
            && BlockType::deserialize(block_type).is_err()
        {
            log::warn!(
                "skipping block {} with unknown type {block_type}",
                entry.get("Id").unwrap_or(&serde_json::Value::Null)
            );
            continue;
        }
        blocks.push(serde_json::from_value(entry).map_err(serde::de::Error::custom)?);
    }
    Ok(blocks)
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        Self::new(default_name())
    }
}

impl LayoutTemplate {
    /// An empty layout with the default color scheme.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: short_id(),
            name: name.into(),
            is_default: false,
            created_at: now,
            modified_at: now,
            colors: ColorScheme::default(),
            blocks: Vec::new(),
        }
    }

    /// The built-in layout: one block of every type, in catalog order.
    pub fn standard() -> Self {
        let block = |id: &str, block_type: BlockType, order: i32, options: BlockOptions| {
            BlockDefinition {
                id: id.to_string(),
                block_type,
                icon: block_type.default_icon().to_string(),
                title: block_type.default_title().to_string(),
                order,
                options,
            }
        };

        Self {
            id: "standard".to_string(),
            name: "Standard".to_string(),
            is_default: true,
            blocks: vec![
                block(
                    "img",
                    BlockType::Image,
                    0,
                    BlockOptions {
                        alignment: Alignment::Center,
                        max_width: 600,
                        ..BlockOptions::default()
                    },
                ),
                block("desc", BlockType::RichText, 1, BlockOptions::default()),
                block(
                    "highlights",
                    BlockType::KeyValueGrid,
                    2,
                    BlockOptions {
                        bullet_char: "▸".to_string(),
                        columns: 2,
                        ..BlockOptions::default()
                    },
                ),
                block(
                    "specs",
                    BlockType::DataTable,
                    3,
                    BlockOptions::for_type(BlockType::DataTable),
                ),
                block("compat", BlockType::FeatureCards, 4, BlockOptions::default()),
                block(
                    "scope",
                    BlockType::CheckList,
                    5,
                    BlockOptions::for_type(BlockType::CheckList),
                ),
            ],
            ..Self::new("Standard")
        }
    }

    /// Deep copy of colors and blocks.
    ///
    /// With `new_id` the layout and every block get fresh ids and the name is
    /// marked as a copy; without it all ids are preserved. A duplicate is
    /// never the default layout.
    pub fn duplicate(&self, new_id: bool) -> Self {
        let now = Utc::now();
        let (id, name, blocks) = if new_id {
            (
                short_id(),
                format!("{} (Copy)", self.name),
                self.blocks.iter().map(BlockDefinition::duplicate).collect(),
            )
        } else {
            (self.id.clone(), self.name.clone(), self.blocks.clone())
        };

        Self {
            id,
            name,
            is_default: false,
            created_at: now,
            modified_at: now,
            colors: self.colors.clone(),
            blocks,
        }
    }

    /// Whether content written against `other` can be reused verbatim here.
    ///
    /// True iff both layouts hold the same set of block ids, regardless of
    /// block order.
    pub fn is_compatible_with(&self, other: &LayoutTemplate) -> bool {
        if self.blocks.len() != other.blocks.len() {
            return false;
        }
        self.sorted_ids() == other.sorted_ids()
    }

    fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.blocks.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Sorts blocks by `order` and renumbers them densely from zero.
    ///
    /// Ties keep their current relative position.
    pub fn reorder_blocks(&mut self) {
        self.blocks.sort_by_key(|b| b.order);
        for (i, block) in self.blocks.iter_mut().enumerate() {
            block.order = i as i32;
        }
    }

    /// Blocks in render order, without touching the stored sequence.
    pub fn ordered_blocks(&self) -> Vec<&BlockDefinition> {
        let mut blocks: Vec<&BlockDefinition> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.order);
        blocks
    }

    pub fn block(&self, id: &str) -> Option<&BlockDefinition> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut BlockDefinition> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Appends a default block of `block_type` after the current last block.
    ///
    /// The new order saturates at `i32::MAX`; ties keep insertion order.
    pub fn add_block(&mut self, block_type: BlockType) -> &BlockDefinition {
        let order = self
            .blocks
            .iter()
            .map(|b| b.order.saturating_add(1))
            .max()
            .unwrap_or(0);
        self.blocks.push(BlockDefinition::new_default(block_type, order));
        self.modified_at = Utc::now();
        &self.blocks[self.blocks.len() - 1]
    }

    /// Removes the block with `id`, returning it if it existed.
    pub fn remove_block(&mut self, id: &str) -> Option<BlockDefinition> {
        let index = self.blocks.iter().position(|b| b.id == id)?;
        self.modified_at = Utc::now();
        Some(self.blocks.remove(index))
    }
}
