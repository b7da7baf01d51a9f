//! Fixed colors not covered by the overlay settings
use tiny_skia::Color;

#[inline]
pub fn transparent() -> Color {
    Color::from_rgba8(0, 0, 0, 0)
}

/// Drop shadow behind row labels so they stay readable over bright scenes
#[inline]
pub fn text_shadow() -> Color {
    Color::from_rgba8(0, 0, 0, 160)
}

/// Slot drawn where a row has no icon yet
#[inline]
pub fn icon_placeholder() -> Color {
    Color::from_rgba8(255, 255, 255, 40)
}
