use crossterm::style::Color;

/// Fallback used when a stored color cannot be parsed
pub const DEFAULT_HEX: &str = "#3498db";

/// Whether `value` is a `#rrggbb` color
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    parse_hex(value).is_some()
}

/// Parse `#rrggbb` into its components
#[must_use]
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Convert a stored hex color to a terminal color
#[must_use]
pub fn to_terminal_color(value: &str) -> Color {
    let (r, g, b) = parse_hex(value).or_else(|| parse_hex(DEFAULT_HEX)).unwrap_or((52, 152, 219));
    Color::Rgb { r, g, b }
}
