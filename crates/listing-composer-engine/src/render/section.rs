//! The table scaffolding every block section is wrapped in.

use super::encode;
use crate::models::{BlockDefinition, ColorScheme};

pub(crate) const BODY_PADDING: &str = "padding: 25px 30px;";

/// Attributes shared by every layout table.
pub(crate) const TABLE_ATTRS: &str = r#"width="100%" cellpadding="0" cellspacing="0" border="0""#;

/// Opens a full-width section with side borders and a single body cell.
pub(crate) fn open(out: &mut String, comment: &str, background: &str, cell_style: &str) {
    out.push_str(&format!(
        r#"  <!-- {comment} -->
  <table {TABLE_ATTRS} style="background: {background}; border-left: 1px solid #e0e0e0; border-right: 1px solid #e0e0e0;">
    <tr>
      <td style="{cell_style}">
"#,
        comment = encode(comment),
    ));
}

pub(crate) fn close(out: &mut String) {
    out.push_str(
        r#"      </td>
    </tr>
  </table>
"#,
    );
}

/// Underlined block heading: icon and title.
pub(crate) fn heading(out: &mut String, block: &BlockDefinition, colors: &ColorScheme) {
    out.push_str(&format!(
        r#"        <div style="margin: 0 0 20px 0; font-size: 18px; color: #1a1a1a; border-bottom: 3px solid {accent}; padding-bottom: 10px; display: inline-block; font-weight: 600;">
          {icon} {title}
        </div>
"#,
        accent = colors.accent_color,
        icon = encode(&block.icon),
        title = encode(&block.title),
    ));
}

/// Opens a section with the block's heading, ready for an inner table.
pub(crate) fn open_titled(
    out: &mut String,
    block: &BlockDefinition,
    colors: &ColorScheme,
    background: &str,
) {
    open(out, &block.title, background, BODY_PADDING);
    heading(out, block, colors);
}
