//! Common utility functions for HUD rendering

use debug_hud_core::{HorizontalAlign, LabelRect, TextAnchor, VerticalAlign};
use tiny_skia::Color;

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Pen position (x, baseline y) for text of the given measured size
/// anchored inside `rect`.
///
/// The ascent is approximated by the font size, matching how the renderer
/// places glyphs relative to the baseline.
pub fn text_origin(
    rect: LabelRect,
    text_width: f32,
    text_height: f32,
    font_size: f32,
    anchor: TextAnchor,
) -> (f32, f32) {
    let x = match anchor.horizontal() {
        HorizontalAlign::Left => rect.x,
        HorizontalAlign::Center => rect.x + (rect.width - text_width) / 2.0,
        HorizontalAlign::Right => rect.x + rect.width - text_width,
    };
    let top = match anchor.vertical() {
        VerticalAlign::Upper => rect.y,
        VerticalAlign::Middle => rect.y + (rect.height - text_height) / 2.0,
        VerticalAlign::Lower => rect.y + rect.height - text_height,
    };
    (x, top + font_size)
}
