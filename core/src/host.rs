//! Host-facing interfaces
//!
//! The overlay never talks to the running application directly. The host glue
//! implements [`SkillHost`] (read-only data queries) and [`HudSurface`] (the UI
//! attachment point the panel and its rows live on).

use std::fmt;
use std::sync::Arc;

use crate::error::{CapabilityError, SurfaceError};
use crate::row::RowLabel;
use crate::settings::PanelAnchor;

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Host-assigned skill identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillId(Arc<str>);

impl SkillId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to an icon sprite owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u32);

/// One skill as the host exposes it, in the host's native order
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
    pub id: SkillId,
    pub name: Arc<str>,
    pub level: f32,
    pub icon: Option<IconHandle>,
}

impl SkillRecord {
    pub fn new(id: impl Into<SkillId>, name: impl Into<Arc<str>>, level: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: IconHandle) -> Self {
        self.icon = Some(icon);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Host data queries
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only view of the host's live state.
///
/// Every query must be cheap: the modal flags are sampled once per frame.
pub trait SkillHost {
    /// Whether the inventory screen is currently visible
    fn inventory_visible(&self) -> bool;

    /// Whether a container (chest, crafting station, ...) is currently open
    fn container_open(&self) -> bool {
        false
    }

    /// Whether the local player exists. Skills are meaningless before it does.
    fn player_ready(&self) -> bool;

    /// All skills of the local player, in the host's iteration order
    fn skills(&self) -> &[SkillRecord];

    /// Resolve the effective-level lookup. Called at most once per session.
    fn probe_effective_levels(&self) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported)
    }

    /// Effective (buffed) level for a skill, if the host can tell
    fn effective_level(&self, _id: &SkillId) -> Option<f32> {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI surface
// ─────────────────────────────────────────────────────────────────────────────

/// The host UI the overlay draws onto.
///
/// A `Row` owns every visual part of one on-screen row (icon, bar background,
/// bar fill, label). `create_row` must return a fully built row; the only way
/// to release it is to move it back into `destroy_row`.
pub trait HudSurface {
    type Row;

    /// Create the panel under the host UI root at `anchor`
    fn attach_panel(&mut self, anchor: PanelAnchor) -> Result<(), SurfaceError>;

    /// Remove the panel. Rows must already have been destroyed.
    fn detach_panel(&mut self);

    fn set_panel_visible(&mut self, visible: bool);

    fn create_row(&mut self) -> Self::Row;

    fn destroy_row(&mut self, row: Self::Row);

    /// Vertical offset of the row below the panel's top edge
    fn set_row_offset(&mut self, row: &Self::Row, offset_y: f32);

    fn set_row_icon(&mut self, row: &Self::Row, icon: IconHandle);

    /// Width of the filled part of the level bar
    fn set_row_fill(&mut self, row: &Self::Row, width: f32);

    fn set_row_label(&mut self, row: &Self::Row, label: &RowLabel);
}
