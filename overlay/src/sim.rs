//! Simulated host for the demo binary and rendering tests
//!
//! Plays a fixed script against the clock passed to [`SimulatedHost::advance`]:
//! the player spawns after a short delay, skills level up at their own rates,
//! and the inventory and a container open and close on a repeating cycle.

use std::collections::HashMap;

use skill_overlay_core::{CapabilityError, IconHandle, SkillHost, SkillId, SkillRecord};

/// (id, display name, starting level, levels gained per second)
const SKILLS: &[(&str, &str, f32, f32)] = &[
    ("swords", "Swords", 38.0, 0.35),
    ("blocking", "Blocking", 24.5, 0.20),
    ("run", "Run", 31.0, 0.50),
    ("jump", "Jump", 12.0, 0.45),
    ("woodcutting", "Woodcutting", 17.25, 0.30),
    ("bows", "Bows", 9.0, 0.60),
    ("swim", "Swim", 14.5, 0.25),
    ("sneak", "Sneak", 3.0, 0.15),
];

/// Length of one modal cycle in seconds
const MODAL_CYCLE: f64 = 12.0;

/// Host with scripted state
#[derive(Debug)]
pub struct SimulatedHost {
    skills: Vec<SkillRecord>,
    rates: Vec<f32>,
    effective_bonus: HashMap<SkillId, f32>,
    lookup_supported: bool,
    spawn_at: f64,
    player_ready: bool,
    inventory_visible: bool,
    container_open: bool,
    last_advance: Option<f64>,
}

impl SimulatedHost {
    /// `icons` are assigned to skills in order; skills past the end get none
    pub fn new(icons: &[IconHandle]) -> Self {
        let skills = SKILLS
            .iter()
            .enumerate()
            .map(|(i, &(id, name, level, _))| {
                let record = SkillRecord::new(id, name, level);
                match icons.get(i) {
                    Some(&icon) => record.with_icon(icon),
                    None => record,
                }
            })
            .collect();

        Self {
            skills,
            rates: SKILLS.iter().map(|s| s.3).collect(),
            effective_bonus: HashMap::from([(SkillId::from("swords"), 5.0)]),
            lookup_supported: true,
            spawn_at: 0.25,
            player_ready: false,
            inventory_visible: false,
            container_open: false,
            last_advance: None,
        }
    }

    /// Disable the effective-level lookup, as on hosts that lack it
    pub fn without_effective_levels(mut self) -> Self {
        self.lookup_supported = false;
        self
    }

    /// Player available from the very first frame
    pub fn spawned(mut self) -> Self {
        self.spawn_at = 0.0;
        self
    }

    /// Move the script to `now`
    pub fn advance(&mut self, now: f64) {
        let dt = self.last_advance.map_or(0.0, |last| (now - last).max(0.0)) as f32;
        self.last_advance = Some(now);

        self.player_ready = now >= self.spawn_at;
        if self.player_ready {
            for (skill, rate) in self.skills.iter_mut().zip(&self.rates) {
                skill.level = (skill.level + rate * dt).min(100.0);
            }
        }

        // Inventory for 2s, later a container for 1.5s, every cycle
        let phase = now % MODAL_CYCLE;
        self.inventory_visible = (4.0..6.0).contains(&phase);
        self.container_open = (8.5..10.0).contains(&phase);
    }
}

impl SkillHost for SimulatedHost {
    fn inventory_visible(&self) -> bool {
        self.inventory_visible
    }

    fn container_open(&self) -> bool {
        self.container_open
    }

    fn player_ready(&self) -> bool {
        self.player_ready
    }

    fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    fn probe_effective_levels(&self) -> Result<(), CapabilityError> {
        if self.lookup_supported {
            Ok(())
        } else {
            Err(CapabilityError::Unsupported)
        }
    }

    fn effective_level(&self, id: &SkillId) -> Option<f32> {
        let bonus = self.effective_bonus.get(id)?;
        let skill = self.skills.iter().find(|s| &s.id == id)?;
        Some(skill.level + bonus)
    }
}
