use crate::markdown::MarkdownConverter;
use crate::models::{BlockDefinition, ColorScheme};
use crate::render::section;

const PARAGRAPH_STYLE: &str = r#"<p style="margin: 0 0 15px 0; font-size: 15px; color: #333;">"#;

/// Markdown prose. The converter's HTML is trusted and not re-escaped; only
/// paragraphs and bold text are restyled.
pub fn render(
    block: &BlockDefinition,
    content: &str,
    colors: &ColorScheme,
    markdown: &dyn MarkdownConverter,
) -> String {
    let html = markdown.to_html(content);
    if html.trim().is_empty() {
        return String::new();
    }
    let html = html.replace("<p>", PARAGRAPH_STYLE).replace(
        "<strong>",
        &format!(r#"<strong style="color: {};">"#, colors.primary_color),
    );

    let mut out = String::new();
    section::open(
        &mut out,
        &block.title,
        &colors.background_color,
        section::BODY_PADDING,
    );
    out.push_str("        ");
    out.push_str(html.trim_end());
    out.push('\n');
    section::close(&mut out);
    out
}
