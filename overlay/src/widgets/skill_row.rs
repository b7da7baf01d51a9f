//! One skill row: icon, level bar and label
//!
//! Layout, left to right: `| icon | gap | bar | gap | Name 42 +5 |`, every
//! part vertically centred in the row.
use tiny_skia::Color;

use skill_overlay_core::{OverlaySettings, RowLabel};

use crate::frame::HudFrame;
use crate::icons::IconData;
use crate::utils::color_from_rgba;
use crate::widgets::ProgressBar;
use crate::widgets::colors;

const ICON_GAP: f32 = 16.0;
const LABEL_GAP: f32 = 8.0;

/// Sizes and colors shared by every row
#[derive(Debug, Clone)]
pub struct RowStyle {
    pub row_height: f32,
    pub icon_size: f32,
    pub bar_width: f32,
    pub bar_height: f32,
    pub font_size: f32,
    pub label_color: Color,
    pub bonus_color: Color,
    pub bar_fill_color: Color,
    pub bar_bg_color: Color,
}

impl RowStyle {
    pub fn from_settings(settings: &OverlaySettings) -> Self {
        Self {
            row_height: settings.row_height,
            icon_size: settings.icon_size,
            bar_width: settings.bar_width,
            bar_height: settings.bar_height,
            font_size: settings.font_size,
            label_color: color_from_rgba(settings.label_color),
            bonus_color: color_from_rgba(settings.bonus_color),
            bar_fill_color: color_from_rgba(settings.bar_fill_color),
            bar_bg_color: color_from_rgba(settings.bar_bg_color),
        }
    }

    /// Left edge of the bar relative to the row
    pub fn bar_x(&self) -> f32 {
        self.icon_size + ICON_GAP
    }

    /// Left edge of the label relative to the row
    pub fn label_x(&self) -> f32 {
        self.bar_x() + self.bar_width + LABEL_GAP
    }
}

/// Snapshot of one row's painted state
#[derive(Debug, Clone, Copy)]
pub struct SkillRow<'a> {
    pub icon: Option<&'a IconData>,
    pub fill_width: f32,
    pub label: Option<&'a RowLabel>,
}

impl SkillRow<'_> {
    /// Draw the row with its top-left corner at (x, y)
    pub fn render(&self, frame: &mut HudFrame<'_>, style: &RowStyle, x: f32, y: f32) {
        let center_y = y + style.row_height / 2.0;

        let icon_y = center_y - style.icon_size / 2.0;
        match self.icon {
            Some(icon) => frame.draw_icon(icon, x, icon_y, style.icon_size),
            None => frame.fill_rect(
                x,
                icon_y,
                style.icon_size,
                style.icon_size,
                colors::icon_placeholder(),
            ),
        }

        ProgressBar::new(self.fill_width, style.bar_fill_color, style.bar_bg_color).render(
            frame,
            x + style.bar_x(),
            center_y - style.bar_height / 2.0,
            style.bar_width,
            style.bar_height,
        );

        let Some(label) = self.label else {
            return;
        };
        let text_x = x + style.label_x();
        let text_y = center_y + style.font_size / 3.0;

        let base = label.base_text();
        draw_shadowed(frame, &base, text_x, text_y, style.font_size, style.label_color);

        if let Some(bonus) = label.bonus_text() {
            let (base_width, _) = frame.measure_text(&base, style.font_size);
            let (space_width, _) = frame.measure_text(" ", style.font_size);
            draw_shadowed(
                frame,
                &bonus,
                text_x + base_width + space_width,
                text_y,
                style.font_size,
                style.bonus_color,
            );
        }
    }
}

fn draw_shadowed(frame: &mut HudFrame<'_>, text: &str, x: f32, y: f32, size: f32, color: Color) {
    frame.draw_text(text, x + 1.0, y + 1.0, size, colors::text_shadow());
    frame.draw_text(text, x, y, size, color);
}
