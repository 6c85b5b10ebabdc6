//! Hex color helpers used to derive gradients from a single configured color.

/// Moves each channel of a `#RRGGBB` color toward white by `factor` of its
/// remaining distance, returning uppercase hex.
///
/// Each channel is rounded to the nearest integer, not truncated, so
/// `#000000` at `0.5` becomes `#808080`.
///
/// `factor` is clamped to `0.0..=1.0`. Input that is not a six digit hex
/// color (an optional leading `#` is accepted) is returned unchanged.
pub fn lighten(hex: &str, factor: f64) -> String {
    let Some([r, g, b]) = parse_hex(hex) else {
        return hex.to_string();
    };
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };

    let lift = |channel: u8| -> u8 {
        let lifted = f64::from(channel) + (255.0 - f64::from(channel)) * factor;
        lifted.round().min(255.0) as u8
    };

    format!("#{:02X}{:02X}{:02X}", lift(r), lift(g), lift(b))
}

/// Parses `#RRGGBB` (or `RRGGBB`) into its three channels.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
