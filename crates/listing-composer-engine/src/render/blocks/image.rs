use crate::models::{BlockDefinition, ColorScheme};
use crate::render::{encode, section};

/// A single image; the whole content is its URL.
pub fn render(block: &BlockDefinition, content: &str, _colors: &ColorScheme) -> String {
    let url = content.trim();
    if url.is_empty() {
        return String::new();
    }

    let options = &block.options;
    let mut out = String::new();
    section::open(
        &mut out,
        &block.title,
        "#ffffff",
        &format!("padding: 20px; text-align: {};", options.alignment.as_css()),
    );
    out.push_str(&format!(
        r#"        <img src="{src}" alt="{alt}" style="max-width: 100%; width: {width}px; height: auto; border-radius: 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.1);">
"#,
        src = encode(url),
        alt = encode(&block.title),
        width = options.max_width,
    ));
    section::close(&mut out);
    out
}
