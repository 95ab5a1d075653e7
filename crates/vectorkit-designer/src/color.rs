//! Color string helpers.
//!
//! Shape colors are kept as the strings the document carries (`#rrggbb`,
//! `rgba(..)`, or a named color from an imported file); these helpers cover the
//! few places the editor needs the numeric channels.

/// Parses `#rrggbb` (the leading `#` is optional) into its channels.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

/// Formats `#rrggbb` as `rgba(r, g, b, alpha)`.
///
/// Unparseable input falls back to black so a fresh shape always gets a
/// usable fill.
pub fn rgba_from_hex(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_color(hex).unwrap_or_else(|| {
        tracing::debug!("Color {:?} is not #rrggbb, using black", hex);
        (0, 0, 0)
    });
    format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
}
