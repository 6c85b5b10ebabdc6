//! Turns an [`ArticleData`] into a self-contained HTML fragment.
//!
//! Rendering is a pure function of the article: no I/O, no clock, no shared
//! state. Malformed content degrades to a simpler rendering and never fails.
//!
//! ```text
//! banner comments
//! <meta viewport>
//! <div max-width container>
//!   [schema.org summary]    only when the summary is non-blank
//!   header                  title + subtitle on a primary gradient
//!   block sections          ascending `order`, blank content skipped
//!   footer                  up to four `label: value` segments
//! </div>
//! ```

pub mod blocks;
pub mod content;
pub mod frame;
pub(crate) mod section;

use std::borrow::Cow;

use crate::catalog::BlockType;
use crate::markdown::{MarkdownConverter, PulldownMarkdown};
use crate::models::{ArticleData, BlockDefinition, ColorScheme};

/// Background of every other row in striped tables.
pub const ALT_ROW_BACKGROUND: &str = "#fafafa";

const CONTAINER_STYLE: &str = "max-width: 700px; margin: 0 auto; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; color: #1a1a1a; line-height: 1.6; font-size: 16px;";

/// HTML entity encoding of user text: `&`, `<`, `>`, `"` and `'`.
pub fn encode(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Renders articles using a pluggable Markdown converter.
#[derive(Debug, Default, Clone)]
pub struct Renderer<M = PulldownMarkdown> {
    markdown: M,
}

impl Renderer<PulldownMarkdown> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MarkdownConverter> Renderer<M> {
    pub fn with_converter(markdown: M) -> Self {
        Self { markdown }
    }

    /// The complete fragment for `article`.
    pub fn render(&self, article: &ArticleData) -> String {
        let layout = &article.layout;
        let colors = &layout.colors;

        let mut out = String::new();
        out.push_str("<!-- Marketplace listing HTML generated by listing-composer -->\n");
        out.push_str(&format!("<!-- Layout: {} -->\n\n", encode(&layout.name)));
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\n",
        );
        out.push_str(&format!("<div style=\"{CONTAINER_STYLE}\">\n\n"));

        if !article.mobile_summary.trim().is_empty() {
            out.push_str(&frame::mobile_summary(&article.mobile_summary));
            out.push('\n');
        }

        out.push_str(&frame::header(&article.title, &article.subtitle, colors));
        out.push('\n');

        for block in layout.ordered_blocks() {
            let content = article.block_content(&block.id);
            if content.trim().is_empty() {
                log::debug!("skipping block `{}`: no content", block.id);
                continue;
            }

            let html = self.render_block(block, content, colors);
            if !html.is_empty() {
                out.push_str(&html);
                out.push('\n');
            }
        }

        for id in article.unused_block_ids() {
            log::trace!("content for `{id}` has no block in layout `{}`", layout.name);
        }

        out.push_str(&frame::footer(&article.footer, colors));
        out.push('\n');
        out.push_str("</div>\n");
        out
    }

    /// A single block section, or `""` when the content yields nothing.
    pub fn render_block(
        &self,
        block: &BlockDefinition,
        content: &str,
        colors: &ColorScheme,
    ) -> String {
        match block.block_type {
            BlockType::Image => blocks::image::render(block, content, colors),
            BlockType::RichText => {
                blocks::rich_text::render(block, content, colors, &self.markdown)
            }
            BlockType::KeyValueGrid => blocks::key_value_grid::render(block, content, colors),
            BlockType::DataTable => blocks::data_table::render(block, content, colors),
            BlockType::FeatureCards => blocks::feature_cards::render(block, content, colors),
            BlockType::CheckList => blocks::check_list::render(block, content, colors),
        }
    }
}

/// Renders `article` with the default Markdown converter.
pub fn render(article: &ArticleData) -> String {
    Renderer::new().render(article)
}
