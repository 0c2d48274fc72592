//! Colour constants and conversion from engine colours to egui's `Color32`.

use eframe::egui::Color32;

use crate::engine::color::Rgba;

/// Window clear colour behind the panel.
pub const CLEAR_COLOR: Color32 = Color32::from_rgb(13, 13, 13);

pub const TITLE_TEXT: Color32 = Color32::WHITE;

pub const CONTENT_TEXT: Color32 = Color32::from_rgb(230, 230, 230);

/// Engine colours are straight-alpha sRGB in `[0, 1]`; map each channel to a
/// byte without any linear/gamma conversion.
pub fn to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(
        unit_to_byte(c.r),
        unit_to_byte(c.g),
        unit_to_byte(c.b),
        unit_to_byte(c.a),
    )
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
