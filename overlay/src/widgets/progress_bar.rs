//! Level bar widget
use tiny_skia::Color;

use crate::frame::HudFrame;

/// A flat horizontal bar: background track plus a left-aligned fill
#[derive(Debug, Clone)]
pub struct ProgressBar {
    /// Filled width in pixels, already clamped to the track width
    pub fill_width: f32,
    pub fill_color: Color,
    pub bg_color: Color,
}

impl ProgressBar {
    pub fn new(fill_width: f32, fill_color: Color, bg_color: Color) -> Self {
        Self {
            fill_width: fill_width.max(0.0),
            fill_color,
            bg_color,
        }
    }

    pub fn render(&self, frame: &mut HudFrame<'_>, x: f32, y: f32, width: f32, height: f32) {
        frame.fill_rect(x, y, width, height, self.bg_color);

        let fill_width = self.fill_width.min(width);
        if fill_width > 0.0 {
            frame.fill_rect(x, y, fill_width, height, self.fill_color);
        }
    }
}
