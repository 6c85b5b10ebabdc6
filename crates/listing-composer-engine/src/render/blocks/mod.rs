//! One renderer per block type.
//!
//! Each takes the block definition, its non-blank content and the layout
//! colors, and returns a complete section or an empty string.

pub mod check_list;
pub mod data_table;
pub mod feature_cards;
pub mod image;
pub mod key_value_grid;
pub mod rich_text;
