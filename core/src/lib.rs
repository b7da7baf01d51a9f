//! Skill overlay core
//!
//! Host-agnostic logic for a HUD panel listing the player's skills: hide
//! under modal screens, refresh on a fixed cadence, keep one row per skill
//! above the level threshold. The host plugs in through [`SkillHost`] and
//! [`HudSurface`]; everything runs on the host's frame thread.

pub mod error;
pub mod host;
pub mod overlay;
pub mod pool;
pub mod row;
pub mod scheduler;
pub mod settings;
pub mod source;
pub mod visibility;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod overlay_tests;

// Re-exports for convenience
pub use error::{CapabilityError, SettingsError, SurfaceError};
pub use host::{HudSurface, IconHandle, SkillHost, SkillId, SkillRecord};
pub use overlay::SkillOverlay;
pub use pool::{ReconcileStats, RowPool};
pub use row::{RowLabel, RowLayout, RowWidget, bonus};
pub use scheduler::RefreshScheduler;
pub use settings::{
    Color, OverlaySettings, OverlaySettingsExt, PanelAnchor, overlay_colors, parse_settings,
};
pub use source::{DataSource, ProficiencyEntry};
pub use visibility::{Visibility, VisibilityController, VisibilityState};
