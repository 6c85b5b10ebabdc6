use crate::models::{BlockDefinition, ColorScheme};
use crate::render::content::field_pairs;
use crate::render::section::{self, TABLE_ATTRS};
use crate::render::{ALT_ROW_BACKGROUND, encode};

const ROW_BORDER: &str = "border-bottom: 1px solid #eee;";

/// `Key | Value` rows in a two column table.
///
/// Optional header row and zebra striping come from the block options. The
/// last row has no bottom border.
pub fn render(block: &BlockDefinition, content: &str, colors: &ColorScheme) -> String {
    let rows = field_pairs(content);
    if rows.is_empty() {
        return String::new();
    }

    let options = &block.options;
    let mut out = String::new();
    section::open_titled(&mut out, block, colors, &colors.background_color);
    out.push_str(&format!(
        "        <table {TABLE_ATTRS} style=\"background: #fff; border-radius: 6px; overflow: hidden; border: 1px solid #e0e0e0;\">\n"
    ));

    if options.show_column_headers {
        out.push_str(&format!(
            r#"          <tr style="background: {primary};">
            <td style="padding: 12px 15px; font-weight: 600; width: 45%; color: #ffffff;">{first}</td>
            <td style="padding: 12px 15px; font-weight: 600; color: #ffffff;">{second}</td>
          </tr>
"#,
            primary = colors.primary_color,
            first = encode(&options.column1_header),
            second = encode(&options.column2_header),
        ));
    }

    let last = rows.len() - 1;
    for (i, (key, value)) in rows.iter().enumerate() {
        let row_open = if options.alternating_background && i % 2 == 1 {
            format!("<tr style=\"background: {ALT_ROW_BACKGROUND};\">")
        } else {
            "<tr>".to_string()
        };
        let border = if i < last { ROW_BORDER } else { "" };
        out.push_str(&format!(
            r#"          {row_open}
            <td style="padding: 10px 15px; {border} color: #555;">{key}</td>
            <td style="padding: 10px 15px; {border}">{value}</td>
          </tr>
"#,
            key = encode(key),
            value = encode(value),
        ));
    }

    out.push_str("        </table>\n");
    section::close(&mut out);
    out
}
