//! Common utility functions for HUD rendering

use skill_overlay_core::Color as SettingsColor;
use tiny_skia::Color;

/// Convert a settings RGBA array to a tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: SettingsColor) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Undo tiny-skia's alpha premultiplication in place
pub fn demultiply_rgba(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
