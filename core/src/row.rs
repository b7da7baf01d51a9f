//! Per-row presentation
//!
//! A [`RowWidget`] wraps one surface row and remembers what it last painted,
//! so re-applying an unchanged entry issues no surface calls.

use std::fmt;
use std::sync::Arc;

use crate::host::{HudSurface, IconHandle};
use crate::settings::OverlaySettings;
use crate::source::ProficiencyEntry;

// ─────────────────────────────────────────────────────────────────────────────
// Layout math
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry shared by every row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub row_height: f32,
    pub bar_width: f32,
    pub max_level: f32,
}

impl RowLayout {
    pub fn from_settings(settings: &OverlaySettings) -> Self {
        Self {
            row_height: settings.row_height,
            bar_width: settings.bar_width,
            max_level: settings.max_level,
        }
    }

    /// Offset below the panel top; rows stack in sort order
    pub fn row_offset(&self, index: usize) -> f32 {
        index as f32 * self.row_height
    }

    /// Filled bar width, clamped to `[0, bar_width]`
    pub fn bar_fill_width(&self, base_level: f32) -> f32 {
        let ratio = base_level / self.max_level;
        if ratio.is_nan() {
            return 0.0;
        }
        self.bar_width * ratio.clamp(0.0, 1.0)
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::from_settings(&OverlaySettings::default())
    }
}

/// Levels gained on top of the base level (never negative)
pub fn bonus(base_level: f32, effective_level: i32) -> i32 {
    (effective_level - base_level.floor() as i32).max(0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Label
// ─────────────────────────────────────────────────────────────────────────────

/// Text of one row: `"{name} {level}"` plus an accented `"+{bonus}"` suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLabel {
    name: Arc<str>,
    level: i32,
    bonus: i32,
}

impl RowLabel {
    pub fn new(name: impl Into<Arc<str>>, level: i32, bonus: i32) -> Self {
        Self {
            name: name.into(),
            level,
            bonus: bonus.max(0),
        }
    }

    pub fn for_entry(entry: &ProficiencyEntry) -> Self {
        Self::new(
            Arc::clone(&entry.name),
            entry.base_level.floor() as i32,
            bonus(entry.base_level, entry.effective_level),
        )
    }

    /// Text drawn in the regular label color
    pub fn base_text(&self) -> String {
        format!("{} {}", self.name, self.level)
    }

    /// Text drawn in the accent color, if there is a bonus
    pub fn bonus_text(&self) -> Option<String> {
        (self.bonus > 0).then(|| format!("+{}", self.bonus))
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.level)?;
        if self.bonus > 0 {
            write!(f, " +{}", self.bonus)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row widget
// ─────────────────────────────────────────────────────────────────────────────

/// One on-screen row, identified by its position in the list
#[derive(Debug)]
pub struct RowWidget<R> {
    handle: R,
    offset_y: Option<f32>,
    fill_width: Option<f32>,
    label: Option<RowLabel>,
    icon: Option<IconHandle>,
}

impl<R> RowWidget<R> {
    pub(crate) fn new(handle: R) -> Self {
        Self {
            handle,
            offset_y: None,
            fill_width: None,
            label: None,
            icon: None,
        }
    }

    pub fn handle(&self) -> &R {
        &self.handle
    }

    pub(crate) fn into_handle(self) -> R {
        self.handle
    }

    /// Paint `entry` at list position `index`.
    ///
    /// Only parts that differ from the last paint reach the surface. A missing
    /// icon leaves the previous sprite in place. Returns true if anything was
    /// repainted.
    pub fn apply<S>(
        &mut self,
        surface: &mut S,
        layout: &RowLayout,
        entry: &ProficiencyEntry,
        index: usize,
    ) -> bool
    where
        S: HudSurface<Row = R>,
    {
        let mut changed = false;

        let offset_y = layout.row_offset(index);
        if self.offset_y != Some(offset_y) {
            surface.set_row_offset(&self.handle, offset_y);
            self.offset_y = Some(offset_y);
            changed = true;
        }

        if let Some(icon) = entry.icon {
            if self.icon != Some(icon) {
                surface.set_row_icon(&self.handle, icon);
                self.icon = Some(icon);
                changed = true;
            }
        }

        let fill_width = layout.bar_fill_width(entry.base_level);
        if self.fill_width != Some(fill_width) {
            surface.set_row_fill(&self.handle, fill_width);
            self.fill_width = Some(fill_width);
            changed = true;
        }

        let label = RowLabel::for_entry(entry);
        if self.label.as_ref() != Some(&label) {
            surface.set_row_label(&self.handle, &label);
            self.label = Some(label);
            changed = true;
        }

        changed
    }
}
