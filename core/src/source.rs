//! Data source adapter
//!
//! Reads the modal flags and the skill list from the host and turns them into
//! the filtered, sorted entries the rows display. Nothing is cached beyond the
//! reusable entry buffer and the outcome of the effective-level probe.

use std::sync::Arc;

use crate::host::{IconHandle, SkillHost, SkillId, SkillRecord};

/// One skill as displayed for a single refresh
#[derive(Debug, Clone, PartialEq)]
pub struct ProficiencyEntry {
    pub id: SkillId,
    pub name: Arc<str>,
    pub base_level: f32,
    pub effective_level: i32,
    pub icon: Option<IconHandle>,
}

impl ProficiencyEntry {
    fn from_record(record: &SkillRecord, effective_level: Option<f32>) -> Self {
        let base_floor = record.level.floor() as i32;
        Self {
            id: record.id.clone(),
            name: Arc::clone(&record.name),
            base_level: record.level,
            effective_level: effective_level.map_or(base_floor, |level| level.floor() as i32),
            icon: record.icon,
        }
    }
}

/// Outcome of the one-time effective-level probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectiveLevels {
    Unprobed,
    Available,
    Unavailable,
}

/// Turns host state into display entries
#[derive(Debug)]
pub struct DataSource {
    threshold: f32,
    effective_levels: EffectiveLevels,
    entries: Vec<ProficiencyEntry>,
}

impl DataSource {
    /// Skills at or below `threshold` are dropped
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            effective_levels: EffectiveLevels::Unprobed,
            entries: Vec::new(),
        }
    }

    /// True while any modal screen (inventory or container) is up
    pub fn modal_open<H: SkillHost + ?Sized>(&self, host: &H) -> bool {
        host.inventory_visible() || host.container_open()
    }

    /// `Some(true)` once the host's effective-level lookup resolved,
    /// `Some(false)` if it failed, `None` before the first probe
    pub fn effective_levels_available(&self) -> Option<bool> {
        match self.effective_levels {
            EffectiveLevels::Unprobed => None,
            EffectiveLevels::Available => Some(true),
            EffectiveLevels::Unavailable => Some(false),
        }
    }

    /// Entries above the threshold, highest level first.
    ///
    /// Equal levels keep the host's order so rows do not swap between
    /// refreshes. Empty while the player is not available.
    pub fn fetch<H: SkillHost + ?Sized>(&mut self, host: &H) -> &[ProficiencyEntry] {
        self.entries.clear();
        if !host.player_ready() {
            return &self.entries;
        }

        let lookup = self.resolve_effective_levels(host);
        let threshold = self.threshold;
        self.entries.extend(
            host.skills()
                .iter()
                .filter(|record| record.level > threshold)
                .map(|record| {
                    let effective = if lookup {
                        host.effective_level(&record.id)
                    } else {
                        None
                    };
                    ProficiencyEntry::from_record(record, effective)
                }),
        );
        // sort_by is stable
        self.entries
            .sort_by(|a, b| b.base_level.total_cmp(&a.base_level));

        tracing::debug!(
            skills = host.skills().len(),
            shown = self.entries.len(),
            "Fetched skill entries"
        );
        &self.entries
    }

    fn resolve_effective_levels<H: SkillHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.effective_levels == EffectiveLevels::Unprobed {
            self.effective_levels = match host.probe_effective_levels() {
                Ok(()) => {
                    tracing::debug!("Effective level lookup resolved");
                    EffectiveLevels::Available
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Effective level lookup unavailable, bonuses disabled");
                    EffectiveLevels::Unavailable
                }
            };
        }
        self.effective_levels == EffectiveLevels::Available
    }
}
