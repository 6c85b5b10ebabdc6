use crate::models::{BlockDefinition, ColorScheme};
use crate::render::content::field_pairs;
use crate::render::section::{self, TABLE_ATTRS};
use crate::render::{ALT_ROW_BACKGROUND, encode};

/// `Title | Description` cells laid out in a grid of one to three columns.
///
/// The last row is padded with empty cells so the table stays rectangular.
pub fn render(block: &BlockDefinition, content: &str, colors: &ColorScheme) -> String {
    let entries = field_pairs(content);
    if entries.is_empty() {
        return String::new();
    }

    let options = &block.options;
    let columns = options.grid_columns();
    let width = 100 / columns;

    let mut out = String::new();
    section::open_titled(&mut out, block, colors, "#ffffff");
    out.push_str(&format!("        <table {TABLE_ATTRS}>\n"));

    for (row_index, row) in entries.chunks(columns).enumerate() {
        if options.alternating_background && row_index % 2 == 1 {
            out.push_str(&format!(
                "          <tr style=\"background: {ALT_ROW_BACKGROUND};\">\n"
            ));
        } else {
            out.push_str("          <tr>\n");
        }

        for (title, description) in row {
            let description = if description.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<br><span style="font-size: 13px; color: #666;">{}</span>"#,
                    encode(description)
                )
            };
            out.push_str(&format!(
                r#"            <td width="{width}%" style="padding: 12px 10px; vertical-align: top; border-bottom: 1px solid #eee;">
              <span style="color: {accent}; font-weight: bold;">{bullet}</span>
              <strong>{title}</strong>
              {description}
            </td>
"#,
                accent = colors.accent_color,
                bullet = encode(&options.bullet_char),
                title = encode(title),
            ));
        }

        for _ in row.len()..columns {
            out.push_str(&format!("            <td width=\"{width}%\"></td>\n"));
        }
        out.push_str("          </tr>\n");
    }

    out.push_str("        </table>\n");
    section::close(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BlockType;
    use crate::render::blocks::test_support::{block, colors};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const FILLER_50: &str = r#"<td width="50%"></td>"#;

    fn inner_table(html: &str) -> &str {
        html.split_once(&format!("<table {TABLE_ATTRS}>"))
            .map(|(_, inner)| inner)
            .unwrap()
    }

    fn grid(columns: i32, alternating: bool) -> BlockDefinition {
        let mut b = block(BlockType::KeyValueGrid);
        b.options.columns = columns;
        b.options.alternating_background = alternating;
        b
    }

    #[test]
    fn three_items_in_two_columns_pad_last_row() {
        let html = render(&grid(2, false), "A | one\nB | two\nC | three", &colors());
        let html = inner_table(&html);

        assert_eq!(html.matches("<tr>").count(), 2);
        assert_eq!(html.matches(r#"<td width="50%" style="#).count(), 3);
        assert_eq!(html.matches(FILLER_50).count(), 1);
        let last_row = html.rsplit("<tr>").next().unwrap();
        assert!(last_row.contains("<strong>C</strong>"));
        assert!(last_row.contains(FILLER_50));
    }

    #[rstest]
    #[case(0, 100, 4)]
    #[case(1, 100, 4)]
    #[case(3, 33, 2)]
    #[case(9, 33, 2)]
    fn column_count_is_clamped(#[case] columns: i32, #[case] width: usize, #[case] rows: usize) {
        let html = render(&grid(columns, false), "a\nb\nc\nd", &colors());
        let html = inner_table(&html);

        assert!(html.contains(&format!(r#"<td width="{width}%" style="#)));
        assert_eq!(html.matches("<tr>").count(), rows);
    }

    #[test]
    fn line_without_separator_is_title_only() {
        let html = render(&grid(2, false), "Just a title", &colors());

        assert!(html.contains("<strong>Just a title</strong>"));
        assert!(!html.contains("<br>"));
    }

    #[test]
    fn description_is_rendered_small_and_escaped() {
        let html = render(&grid(2, false), "Fast | <10 ms", &colors());

        assert!(html.contains(
            r#"<br><span style="font-size: 13px; color: #666;">&lt;10 ms</span>"#
        ));
    }

    #[test]
    fn striping_starts_at_second_row() {
        let html = render(&grid(1, true), "a\nb\nc", &colors());
        let rows: Vec<&str> = inner_table(&html).split("<tr").skip(1).collect();

        assert_eq!(rows.len(), 3);
        assert!(!rows[0].starts_with(" style"));
        assert!(rows[1].starts_with(&format!(r#" style="background: {ALT_ROW_BACKGROUND};""#)));
        assert!(!rows[2].starts_with(" style"));
    }

    #[test]
    fn uses_configured_bullet() {
        let mut b = grid(2, false);
        b.options.bullet_char = "★".to_string();

        let html = render(&b, "x", &colors());

        assert!(html.contains(">★</span>"));
    }
}
