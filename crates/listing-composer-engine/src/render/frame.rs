//! Header, footer and schema.org summary around the block sections.

use super::encode;
use super::section::TABLE_ATTRS;
use crate::catalog::MAX_FOOTER_LINES;
use crate::color::lighten;
use crate::models::ColorScheme;

/// How far the second gradient stop is lifted toward white.
const GRADIENT_LIFT: f64 = 0.1;

const FOOTER_CELL_STYLE: &str = "padding: 18px 20px; color: #999; font-size: 13px;";

/// One `label: value` cell of the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSegment<'a> {
    pub label: Option<&'a str>,
    pub value: &'a str,
}

/// Non-blank footer lines, at most four, each split on its first colon.
pub fn footer_segments(footer: &str) -> Vec<FooterSegment<'_>> {
    footer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_FOOTER_LINES)
        .map(|line| match line.split_once(':') {
            Some((label, value)) => FooterSegment {
                label: Some(label.trim()),
                value: value.trim(),
            },
            None => FooterSegment {
                label: None,
                value: line,
            },
        })
        .collect()
}

/// Text alignment of segment `index` out of `count`.
pub fn segment_alignment(index: usize, count: usize) -> &'static str {
    if count == 1 {
        "center"
    } else if index == 0 {
        "left"
    } else if index == count - 1 {
        "right"
    } else {
        "center"
    }
}

fn gradient(colors: &ColorScheme) -> String {
    format!(
        "linear-gradient(135deg, {primary} 0%, {lifted} 100%)",
        primary = colors.primary_color,
        lifted = lighten(&colors.primary_color, GRADIENT_LIFT),
    )
}

pub(crate) fn mobile_summary(summary: &str) -> String {
    format!(
        r#"  <!-- Mobile summary (schema.org) -->
  <div vocab="https://schema.org/" typeof="Product" style="margin-bottom: 20px;">
    <span property="description">{}</span>
  </div>
"#,
        encode(summary.trim())
    )
}

pub(crate) fn header(title: &str, subtitle: &str, colors: &ColorScheme) -> String {
    format!(
        r#"  <!-- Header -->
  <table {TABLE_ATTRS} style="background: {gradient}; border-radius: 8px 8px 0 0;">
    <tr>
      <td style="padding: 25px 30px; text-align: center;">
        <div style="margin: 0; color: {accent}; font-size: 22px; font-weight: 600; letter-spacing: 0.5px;">
          {title}
        </div>
        <div style="margin: 8px 0 0 0; color: #cccccc; font-size: 14px;">
          {subtitle}
        </div>
      </td>
    </tr>
  </table>
"#,
        gradient = gradient(colors),
        accent = colors.accent_color,
        title = encode(title),
        subtitle = encode(subtitle),
    )
}

pub(crate) fn footer(footer: &str, colors: &ColorScheme) -> String {
    let segments = footer_segments(footer);
    let mut out = format!(
        r#"  <!-- Footer -->
  <table {TABLE_ATTRS} style="background: {gradient}; border-radius: 0 0 8px 8px;">
    <tr>
"#,
        gradient = gradient(colors),
    );

    if segments.is_empty() {
        out.push_str(&format!(
            "      <td style=\"{FOOTER_CELL_STYLE} text-align: center;\">&nbsp;</td>\n"
        ));
    } else {
        let count = segments.len();
        let width = 100 / count;
        for (i, segment) in segments.iter().enumerate() {
            let label = segment
                .label
                .map(|label| format!("{}:", encode(label)))
                .unwrap_or_default();
            out.push_str(&format!(
                r#"      <td width="{width}%" style="{FOOTER_CELL_STYLE} text-align: {align};">
        <strong style="color: {accent};">{label}</strong> {value}
      </td>
"#,
                align = segment_alignment(i, count),
                accent = colors.accent_color,
                value = encode(segment.value),
            ));
        }
    }

    out.push_str("    </tr>\n  </table>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn footer_keeps_first_four_segments() {
        let segments = footer_segments("SKU: ABC\nColor: Black\nWarranty: 2y\nExtra\nDropped");

        assert_eq!(
            segments,
            vec![
                FooterSegment { label: Some("SKU"), value: "ABC" },
                FooterSegment { label: Some("Color"), value: "Black" },
                FooterSegment { label: Some("Warranty"), value: "2y" },
                FooterSegment { label: None, value: "Extra" },
            ]
        );
    }

    #[test]
    fn footer_splits_on_first_colon_only() {
        let segments = footer_segments("Time: 10:30\n\n  \n");
        assert_eq!(
            segments,
            vec![FooterSegment { label: Some("Time"), value: "10:30" }]
        );
    }

    #[rstest]
    #[case(1, vec!["center"])]
    #[case(2, vec!["left", "right"])]
    #[case(4, vec!["left", "center", "center", "right"])]
    fn alignment_by_position(#[case] count: usize, #[case] expected: Vec<&str>) {
        let actual: Vec<&str> = (0..count).map(|i| segment_alignment(i, count)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn empty_footer_renders_placeholder_band() {
        let html = footer(" \n\n", &ColorScheme::default());

        assert!(html.contains("&nbsp;"));
        assert!(html.contains("text-align: center;"));
        assert!(!html.contains("<strong"));
    }

    #[test]
    fn footer_cells_split_width_evenly() {
        let html = footer("a: 1\nb: 2\nc: 3", &ColorScheme::default());

        assert_eq!(html.matches(r#"<td width="33%""#).count(), 3);
        assert!(html.contains(r##"<strong style="color: #f5c518;">a:</strong> 1"##));
    }

    #[test]
    fn header_uses_gradient_and_escapes_text() {
        let html = header("Fish & Chips", "<b>", &ColorScheme::default());

        assert!(html.contains("linear-gradient(135deg, #1a1a1a 0%, #313131 100%)"));
        assert!(html.contains("Fish &amp; Chips"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn summary_is_escaped() {
        let html = mobile_summary("5\" screen");
        assert!(html.contains(r#"<span property="description">5&quot; screen</span>"#));
    }
}
