//! HUD frame abstraction
//!
//! `HudFrame` pairs the renderer with the pixel buffer of the frame being
//! drawn, so widgets can draw without threading buffer dimensions through
//! every call.

#![allow(clippy::too_many_arguments)]
use tiny_skia::Color;

use crate::icons::IconData;
use crate::renderer::Renderer;
use crate::widgets::colors;

/// One frame being drawn into a caller-owned RGBA buffer
pub struct HudFrame<'a> {
    renderer: &'a mut Renderer,
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> HudFrame<'a> {
    pub fn new(renderer: &'a mut Renderer, buffer: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            renderer,
            buffer,
            width,
            height,
        }
    }

    /// Begin a new frame: clear to fully transparent
    pub fn begin_frame(&mut self) {
        self.renderer
            .clear(self.buffer, self.width, self.height, colors::transparent());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Drawing helpers (delegate to renderer)
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw text with its baseline at `y`
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.renderer.draw_text(
            self.buffer,
            self.width,
            self.height,
            text,
            x,
            y,
            font_size,
            color,
        );
    }

    pub fn measure_text(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        self.renderer.measure_text(text, font_size)
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.renderer
            .fill_rect(self.buffer, self.width, self.height, x, y, w, h, color);
    }

    pub fn draw_icon(&mut self, icon: &IconData, x: f32, y: f32, size: f32) {
        self.renderer
            .draw_icon(self.buffer, self.width, self.height, icon, x, y, size);
    }
}
