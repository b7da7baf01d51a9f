//! Shared configuration types for the skill overlay
//!
//! This crate contains serializable settings shared between the host-independent
//! core (skill-overlay-core) and the software surface (skill-overlay).

use serde::{Deserialize, Serialize};

/// RGBA color as stored in settings
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Colors
// ─────────────────────────────────────────────────────────────────────────────

pub mod overlay_colors {
    use super::Color;

    pub const LABEL: Color = [255, 230, 0, 255]; // Warm yellow
    pub const BONUS: Color = [0, 180, 255, 255]; // Accent blue
    pub const BAR_FILL: Color = [255, 217, 0, 255]; // Yellow
    pub const BAR_BG: Color = [0, 0, 0, 102]; // 40% black
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel Anchor
// ─────────────────────────────────────────────────────────────────────────────

/// Screen-space offset of the panel's top-left corner.
///
/// The panel hangs off the left edge of the host UI root, vertically centred,
/// so `x` is a margin from the left edge and `y` an offset from the middle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelAnchor {
    #[serde(default = "default_anchor_x")]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

fn default_anchor_x() -> f32 {
    15.0
}

impl Default for PanelAnchor {
    fn default() -> Self {
        Self {
            x: default_anchor_x(),
            y: 0.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlay Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Tunables for the skill overlay.
///
/// Times are in the host clock's units (seconds for most hosts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Minimum time between data refreshes
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: f64,
    /// Delay before the panel reappears after a modal screen closes
    #[serde(default = "default_show_delay")]
    pub show_delay: f64,
    /// Skills at or below this level are not shown
    #[serde(default = "default_level_threshold")]
    pub level_threshold: f32,
    /// Level that fills the bar completely
    #[serde(default = "default_max_level")]
    pub max_level: f32,

    // Layout
    #[serde(default = "default_bar_width")]
    pub bar_width: f32,
    #[serde(default = "default_bar_height")]
    pub bar_height: f32,
    #[serde(default = "default_row_height")]
    pub row_height: f32,
    #[serde(default = "default_icon_size")]
    pub icon_size: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub anchor: PanelAnchor,

    // Colors
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_bonus_color")]
    pub bonus_color: Color,
    #[serde(default = "default_bar_fill_color")]
    pub bar_fill_color: Color,
    #[serde(default = "default_bar_bg_color")]
    pub bar_bg_color: Color,
}

fn default_refresh_interval() -> f64 {
    1.0
}
fn default_show_delay() -> f64 {
    0.5
}
fn default_level_threshold() -> f32 {
    15.0
}
fn default_max_level() -> f32 {
    100.0
}
fn default_bar_width() -> f32 {
    120.0
}
fn default_bar_height() -> f32 {
    8.0
}
fn default_row_height() -> f32 {
    28.0
}
fn default_icon_size() -> f32 {
    24.0
}
fn default_font_size() -> f32 {
    13.0
}
fn default_label_color() -> Color {
    overlay_colors::LABEL
}
fn default_bonus_color() -> Color {
    overlay_colors::BONUS
}
fn default_bar_fill_color() -> Color {
    overlay_colors::BAR_FILL
}
fn default_bar_bg_color() -> Color {
    overlay_colors::BAR_BG
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            refresh_interval: default_refresh_interval(),
            show_delay: default_show_delay(),
            level_threshold: default_level_threshold(),
            max_level: default_max_level(),
            bar_width: default_bar_width(),
            bar_height: default_bar_height(),
            row_height: default_row_height(),
            icon_size: default_icon_size(),
            font_size: default_font_size(),
            anchor: PanelAnchor::default(),
            label_color: default_label_color(),
            bonus_color: default_bonus_color(),
            bar_fill_color: default_bar_fill_color(),
            bar_bg_color: default_bar_bg_color(),
        }
    }
}
