//! Layout model and rendering engine for marketplace product listings.
//!
//! An [`ArticleData`] carries the listing text, per-block content and the
//! [`LayoutTemplate`] it is rendered with. [`render`] turns it into a single
//! HTML fragment with inline styles only, ready to paste into a marketplace
//! description editor.

pub mod catalog;
pub mod color;
pub mod ids;
pub mod io;
pub mod markdown;
pub mod models;
pub mod render;

// Re-export key types for easier usage
pub use catalog::BlockType;
pub use color::lighten;
pub use io::ArticleIoError;
pub use markdown::{MarkdownConverter, PulldownMarkdown};
pub use models::*;
pub use render::{Renderer, render};
