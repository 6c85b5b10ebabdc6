use crate::models::{BlockDefinition, ColorScheme};
use crate::render::content::content_lines;
use crate::render::section::{self, TABLE_ATTRS};
use crate::render::encode;

/// One bulleted row per non-blank line.
pub fn render(block: &BlockDefinition, content: &str, colors: &ColorScheme) -> String {
    let items = content_lines(content);
    if items.is_empty() {
        return String::new();
    }

    let bullet = encode(&block.options.bullet_char);
    let mut out = String::new();
    section::open_titled(&mut out, block, colors, &colors.background_color);
    out.push_str(&format!("        <table {TABLE_ATTRS}>\n"));

    for item in items {
        out.push_str(&format!(
            r#"          <tr>
            <td style="padding: 6px 0; color: #333;">
              <span style="color: {accent}; margin-right: 8px;">{bullet}</span>{item}
            </td>
          </tr>
"#,
            accent = colors.accent_color,
            item = encode(item),
        ));
    }

    out.push_str("        </table>\n");
    section::close(&mut out);
    out
}
