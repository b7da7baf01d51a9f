//! Test doubles for the host interfaces

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use crate::error::{CapabilityError, SurfaceError};
use crate::host::{HudSurface, IconHandle, SkillHost, SkillId, SkillRecord};
use crate::row::RowLabel;
use crate::settings::PanelAnchor;

/// Scriptable host state
#[derive(Debug, Default)]
pub struct MockHost {
    pub inventory_visible: bool,
    pub container_open: bool,
    pub player_ready: bool,
    pub skills: Vec<SkillRecord>,
    pub effective_levels_supported: bool,
    pub effective: HashMap<SkillId, f32>,
    pub probe_calls: Cell<u32>,
}

impl MockHost {
    pub fn with_skills(skills: Vec<SkillRecord>) -> Self {
        Self {
            player_ready: true,
            skills,
            ..Default::default()
        }
    }

    /// One skill per level, named `S0`, `S1`, ...
    pub fn with_levels(levels: &[f32]) -> Self {
        Self::with_skills(
            levels
                .iter()
                .enumerate()
                .map(|(i, level)| {
                    let name = format!("S{i}");
                    SkillRecord::new(name.as_str(), name.as_str(), *level)
                })
                .collect(),
        )
    }
}

impl SkillHost for MockHost {
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
        self.probe_calls.set(self.probe_calls.get() + 1);
        if self.effective_levels_supported {
            Ok(())
        } else {
            Err(CapabilityError::Unresolved("GetSkillLevel not found".to_string()))
        }
    }

    fn effective_level(&self, id: &SkillId) -> Option<f32> {
        self.effective.get(id).copied()
    }
}

/// Row handle handed out by [`RecordingSurface`]; deliberately not `Clone`
#[derive(Debug, PartialEq, Eq)]
pub struct TestRow(u32);

impl TestRow {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Last values painted onto a row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedRow {
    pub offset_y: f32,
    pub fill_width: f32,
    pub icon: Option<IconHandle>,
    pub label: String,
}

/// Surface that records every call
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ui_root_ready: bool,
    pub panel: Option<PanelAnchor>,
    pub panels_attached: u32,
    pub panel_visible: bool,
    pub visibility_changes: u32,
    pub rows: BTreeMap<u32, RecordedRow>,
    pub rows_created: u32,
    pub rows_destroyed: u32,
    pub destroy_order: Vec<u32>,
    pub paint_calls: u32,
    next_row: u32,
}

impl RecordingSurface {
    pub fn ready() -> Self {
        Self {
            ui_root_ready: true,
            ..Default::default()
        }
    }

    pub fn live_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: &TestRow) -> &RecordedRow {
        self.rows.get(&row.0).expect("row was destroyed")
    }

    /// Labels of live rows ordered top to bottom
    pub fn labels_top_down(&self) -> Vec<String> {
        let mut rows: Vec<&RecordedRow> = self.rows.values().collect();
        rows.sort_by(|a, b| a.offset_y.total_cmp(&b.offset_y));
        rows.into_iter().map(|r| r.label.clone()).collect()
    }

    fn painted(&mut self, row: &TestRow) -> &mut RecordedRow {
        self.paint_calls += 1;
        self.rows.get_mut(&row.0).expect("painting a destroyed row")
    }
}

impl HudSurface for RecordingSurface {
    type Row = TestRow;

    fn attach_panel(&mut self, anchor: PanelAnchor) -> Result<(), SurfaceError> {
        if !self.ui_root_ready {
            return Err(SurfaceError::UiRootMissing);
        }
        assert!(self.panel.is_none(), "panel attached twice");
        self.panel = Some(anchor);
        self.panels_attached += 1;
        Ok(())
    }

    fn detach_panel(&mut self) {
        assert!(self.rows.is_empty(), "panel detached with live rows");
        self.panel = None;
        self.panel_visible = false;
    }

    fn set_panel_visible(&mut self, visible: bool) {
        if self.panel_visible != visible {
            self.visibility_changes += 1;
        }
        self.panel_visible = visible;
    }

    fn create_row(&mut self) -> TestRow {
        let id = self.next_row;
        self.next_row += 1;
        self.rows.insert(id, RecordedRow::default());
        self.rows_created += 1;
        TestRow(id)
    }

    fn destroy_row(&mut self, row: TestRow) {
        assert!(self.rows.remove(&row.0).is_some(), "row destroyed twice");
        self.rows_destroyed += 1;
        self.destroy_order.push(row.0);
    }

    fn set_row_offset(&mut self, row: &TestRow, offset_y: f32) {
        self.painted(row).offset_y = offset_y;
    }

    fn set_row_icon(&mut self, row: &TestRow, icon: IconHandle) {
        self.painted(row).icon = Some(icon);
    }

    fn set_row_fill(&mut self, row: &TestRow, width: f32) {
        self.painted(row).fill_width = width;
    }

    fn set_row_label(&mut self, row: &TestRow, label: &RowLabel) {
        self.painted(row).label = label.to_string();
    }
}
