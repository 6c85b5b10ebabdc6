use crate::models::{BlockDefinition, ColorScheme};
use crate::render::content::field_pairs;
use crate::render::section::{self, TABLE_ATTRS};
use crate::render::encode;

/// Card backgrounds, assigned by position and reused cyclically.
pub const CARD_GRADIENTS: [&str; 5] = [
    "linear-gradient(135deg, #0071c5 0%, #00aeef 100%)",
    "linear-gradient(135deg, #ed1c24 0%, #ff6b6b 100%)",
    "linear-gradient(135deg, #76b900 0%, #a4d233 100%)",
    "linear-gradient(135deg, #ff6600 0%, #ffaa00 100%)",
    "linear-gradient(135deg, #9b59b6 0%, #8e44ad 100%)",
];

const CARD_TEXT: &str = "#ffffff";

/// `Category | Options` cards side by side in a single row.
pub fn render(block: &BlockDefinition, content: &str, colors: &ColorScheme) -> String {
    let cards = field_pairs(content);
    if cards.is_empty() {
        return String::new();
    }

    let width = 100 / cards.len();
    let last = cards.len() - 1;

    let mut out = String::new();
    section::open_titled(&mut out, block, colors, "#ffffff");
    out.push_str(&format!("        <table {TABLE_ATTRS}>\n          <tr>\n"));

    for (i, (category, options)) in cards.iter().enumerate() {
        out.push_str(&format!(
            r#"            <td width="{width}%" style="{padding} vertical-align: top;">
              <div style="background: {background}; color: {CARD_TEXT}; padding: 18px; border-radius: 6px; text-align: center;">
                <div style="font-size: 13px; opacity: 0.9; margin-bottom: 4px;">{category}</div>
                <div style="font-size: 15px; font-weight: 600;">{options}</div>
              </div>
            </td>
"#,
            padding = card_padding(i, last),
            background = CARD_GRADIENTS[i % CARD_GRADIENTS.len()],
            category = encode(category),
            options = encode(options),
        ));
    }

    out.push_str("          </tr>\n        </table>\n");
    section::close(&mut out);
    out
}

/// Outer cards hug the section edge so the row has even outer margins.
fn card_padding(index: usize, last: usize) -> &'static str {
    if index == 0 {
        "padding: 10px 10px 10px 0;"
    } else if index == last {
        "padding: 10px 0 10px 10px;"
    } else {
        "padding: 10px 5px;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BlockType;
    use crate::render::blocks::test_support::{block, colors};
    use pretty_assertions::assert_eq;

    fn cards(html: &str) -> Vec<&str> {
        html.split("<td width=").skip(1).collect()
    }

    #[test]
    fn width_is_truncated_share_of_row() {
        let html = render(&block(BlockType::FeatureCards), "a|1\nb|2\nc|3", &colors());

        assert_eq!(cards(&html).len(), 3);
        assert!(cards(&html).iter().all(|c| c.starts_with("\"33%\"")));
    }

    #[test]
    fn palette_wraps_after_five_cards() {
        let content = (0..7).map(|i| format!("c{i} | o{i}")).collect::<Vec<_>>().join("\n");
        let html = render(&block(BlockType::FeatureCards), &content, &colors());
        let rendered = cards(&html);

        assert_eq!(rendered.len(), 7);
        assert!(rendered[5].contains(CARD_GRADIENTS[0]));
        assert!(rendered[6].contains(CARD_GRADIENTS[1]));
        assert!(rendered[4].contains(CARD_GRADIENTS[4]));
    }

    #[test]
    fn outer_cards_get_asymmetric_padding() {
        let html = render(&block(BlockType::FeatureCards), "a|1\nb|2\nc|3", &colors());
        let rendered = cards(&html);

        assert!(rendered[0].contains("padding: 10px 10px 10px 0;"));
        assert!(rendered[1].contains("padding: 10px 5px;"));
        assert!(rendered[2].contains("padding: 10px 0 10px 10px;"));
    }

    #[test]
    fn single_card_spans_full_width() {
        let html = render(&block(BlockType::FeatureCards), "Intel | LGA 1700", &colors());
        let rendered = cards(&html);

        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].starts_with("\"100%\""));
        assert!(rendered[0].contains(">Intel</div>"));
        assert!(rendered[0].contains(">LGA 1700</div>"));
    }

    #[test]
    fn category_without_options_renders_empty_options() {
        let html = render(&block(BlockType::FeatureCards), "AMD", &colors());
        assert!(html.contains(r#"<div style="font-size: 15px; font-weight: 600;"></div>"#));
    }

    #[test]
    fn padding_for_positions() {
        assert_eq!(card_padding(0, 0), "padding: 10px 10px 10px 0;");
        assert_eq!(card_padding(3, 3), "padding: 10px 0 10px 10px;");
        assert_eq!(card_padding(1, 3), "padding: 10px 5px;");
    }
}
