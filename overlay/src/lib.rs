//! Skill Overlay software surface
//!
//! CPU rendering of the skill panel for hosts without their own UI toolkit,
//! and for tests and the demo binary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                       hud                           │
//! │                   SoftwareHud                       │
//! │     (HudSurface impl: panel + recycled row slots)   │
//! ├─────────────────────────────────────────────────────┤
//! │                    widgets/                         │
//! │              SkillRow, ProgressBar                  │
//! │            (reusable UI components)                 │
//! ├─────────────────────────────────────────────────────┤
//! │                      frame                          │
//! │                     HudFrame                        │
//! │            (renderer + target buffer)               │
//! ├─────────────────────────────────────────────────────┤
//! │                    renderer                         │
//! │             tiny-skia + cosmic-text                 │
//! │              (drawing primitives)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Icons are decoded once into an [`IconAtlas`]; finished frames can be
//! written out with [`snapshot::write_png`].

pub mod frame;
pub mod hud;
pub mod icons;
pub mod renderer;
pub mod sim;
pub mod snapshot;
pub mod utils;
pub mod widgets;


// Re-export commonly used types
pub use hud::{RowId, SoftwareHud};
pub use icons::{IconAtlas, IconData, IconError};
pub use renderer::Renderer;
pub use sim::SimulatedHost;
pub use snapshot::SnapshotError;

// Re-export tiny_skia Color for external use
pub use tiny_skia::Color;
