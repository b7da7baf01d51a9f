//! Widgets drawn onto a [`HudFrame`](crate::frame::HudFrame)
//!
//! - [`ProgressBar`] - Flat level bar with background and fill
//! - [`SkillRow`] - Icon, level bar and label of one skill

pub mod colors;
mod progress_bar;
mod skill_row;

pub use progress_bar::ProgressBar;
pub use skill_row::{RowStyle, SkillRow};
