use colorgrad::Color;

/// Linear green → red ramp. Red scales with `minutes / max_minutes`,
/// green with its complement, blue stays at zero.
pub fn color_for_time(minutes: f64, max_minutes: f64) -> Color {
    let ratio = if max_minutes > 0.0 {
        (minutes / max_minutes).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let r = (255.0 * ratio).min(255.0) as u8;
    let g = (255.0 * (1.0 - ratio)).min(255.0) as u8;
    Color::from_rgba8(r, g, 0, 255)
}

/// `#rrggbb`, the form Leaflet style functions take.
pub fn to_hex(color: &Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

pub fn hex_for_time(minutes: f64, max_minutes: f64) -> String {
    to_hex(&color_for_time(minutes, max_minutes))
}
