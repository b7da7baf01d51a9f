//! Software HUD surface
//!
//! [`SoftwareHud`] implements [`HudSurface`] by keeping the panel and row
//! state in memory and drawing it on demand with [`Renderer`]. Row slots are
//! recycled through a free list, so a row handle is just a slot index.

use skill_overlay_core::{
    HudSurface, IconHandle, OverlaySettings, PanelAnchor, RowLabel, SurfaceError,
};

use crate::frame::HudFrame;
use crate::icons::IconAtlas;
use crate::renderer::Renderer;
use crate::widgets::{RowStyle, SkillRow};

/// Handle to one row of a [`SoftwareHud`]. Not `Clone`: destroying a row
/// consumes its handle.
#[derive(Debug, PartialEq, Eq)]
pub struct RowId(usize);

#[derive(Debug, Default)]
struct RowSlot {
    offset_y: f32,
    fill_width: f32,
    icon: Option<IconHandle>,
    label: Option<RowLabel>,
}

#[derive(Debug, Clone, Copy)]
struct Panel {
    anchor: PanelAnchor,
    visible: bool,
}

/// In-memory HUD rendered into an RGBA buffer
pub struct SoftwareHud {
    /// Size of the host UI root; `None` until the host UI exists
    ui_root: Option<(u32, u32)>,
    panel: Option<Panel>,
    slots: Vec<Option<RowSlot>>,
    free: Vec<usize>,
    icons: IconAtlas,
    style: RowStyle,
    renderer: Renderer,
}

impl SoftwareHud {
    pub fn new(settings: &OverlaySettings, icons: IconAtlas) -> Self {
        Self::with_renderer(settings, icons, Renderer::new())
    }

    pub fn with_renderer(settings: &OverlaySettings, icons: IconAtlas, renderer: Renderer) -> Self {
        Self {
            ui_root: None,
            panel: None,
            slots: Vec::new(),
            free: Vec::new(),
            icons,
            style: RowStyle::from_settings(settings),
            renderer,
        }
    }

    /// The host UI root came up with the given size
    pub fn set_ui_root(&mut self, width: u32, height: u32) {
        self.ui_root = Some((width, height));
    }

    /// The host UI root went away (scene unload)
    pub fn clear_ui_root(&mut self) {
        self.ui_root = None;
    }

    pub fn has_panel(&self) -> bool {
        self.panel.is_some()
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_some_and(|p| p.visible)
    }

    pub fn live_rows(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Allocated slots, live or free
    pub fn slot_capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn icons(&self) -> &IconAtlas {
        &self.icons
    }

    /// Row labels ordered top to bottom
    pub fn labels_top_down(&self) -> Vec<String> {
        let mut rows: Vec<&RowSlot> = self.slots.iter().flatten().collect();
        rows.sort_by(|a, b| a.offset_y.total_cmp(&b.offset_y));
        rows.into_iter()
            .filter_map(|r| r.label.as_ref().map(ToString::to_string))
            .collect()
    }

    /// Top-left corner of the panel in buffer coordinates.
    ///
    /// The panel hangs off the left edge with its top at the vertical middle
    /// of the buffer shifted up by `anchor.y`. Rows hang down from that
    /// corner, so the origin does not depend on how many rows exist.
    pub fn panel_origin(&self, height: u32) -> Option<(f32, f32)> {
        let panel = self.panel?;
        Some((panel.anchor.x, height as f32 / 2.0 - panel.anchor.y))
    }

    /// Draw the current state into `buffer` (RGBA, `width * height * 4`).
    ///
    /// The buffer is always cleared; a hidden or missing panel leaves it
    /// fully transparent.
    pub fn render(&mut self, buffer: &mut [u8], width: u32, height: u32) {
        let origin = if self.is_panel_visible() {
            self.panel_origin(height)
        } else {
            None
        };

        let mut frame = HudFrame::new(&mut self.renderer, buffer, width, height);
        frame.begin_frame();

        let Some((x, y)) = origin else {
            return;
        };
        for slot in self.slots.iter().flatten() {
            let row = SkillRow {
                icon: slot.icon.and_then(|h| self.icons.get(h)),
                fill_width: slot.fill_width,
                label: slot.label.as_ref(),
            };
            row.render(&mut frame, &self.style, x, y + slot.offset_y);
        }
    }

    fn slot_mut(&mut self, row: &RowId) -> Option<&mut RowSlot> {
        self.slots.get_mut(row.0).and_then(Option::as_mut)
    }
}

impl HudSurface for SoftwareHud {
    type Row = RowId;

    fn attach_panel(&mut self, anchor: PanelAnchor) -> Result<(), SurfaceError> {
        if self.ui_root.is_none() {
            return Err(SurfaceError::UiRootMissing);
        }
        if self.panel.is_some() {
            return Err(SurfaceError::Attach {
                reason: "panel already attached".to_string(),
            });
        }
        self.panel = Some(Panel {
            anchor,
            visible: false,
        });
        Ok(())
    }

    fn detach_panel(&mut self) {
        let leaked = self.live_rows();
        if leaked > 0 {
            tracing::warn!(rows = leaked, "Panel detached with live rows, dropping them");
        }
        self.slots.clear();
        self.free.clear();
        self.panel = None;
    }

    fn set_panel_visible(&mut self, visible: bool) {
        if let Some(panel) = self.panel.as_mut() {
            panel.visible = visible;
        }
    }

    fn create_row(&mut self) -> RowId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(RowSlot::default());
                RowId(index)
            }
            None => {
                self.slots.push(Some(RowSlot::default()));
                RowId(self.slots.len() - 1)
            }
        }
    }

    fn destroy_row(&mut self, row: RowId) {
        if let Some(slot) = self.slots.get_mut(row.0) {
            if slot.take().is_some() {
                self.free.push(row.0);
            }
        }
    }

    fn set_row_offset(&mut self, row: &RowId, offset_y: f32) {
        if let Some(slot) = self.slot_mut(row) {
            slot.offset_y = offset_y;
        }
    }

    fn set_row_icon(&mut self, row: &RowId, icon: IconHandle) {
        if let Some(slot) = self.slot_mut(row) {
            slot.icon = Some(icon);
        }
    }

    fn set_row_fill(&mut self, row: &RowId, width: f32) {
        if let Some(slot) = self.slot_mut(row) {
            slot.fill_width = width;
        }
    }

    fn set_row_label(&mut self, row: &RowId, label: &RowLabel) {
        if let Some(slot) = self.slot_mut(row) {
            slot.label = Some(label.clone());
        }
    }
}
