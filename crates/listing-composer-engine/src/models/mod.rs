pub mod article;
pub mod block;
pub mod color_scheme;
pub mod layout;

pub use article::ArticleData;
pub use block::{Alignment, BlockDefinition, BlockOptions};
pub use color_scheme::ColorScheme;
pub use layout::LayoutTemplate;
