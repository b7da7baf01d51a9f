//! Row pool reconciliation
//!
//! Rows are positional: slot `i` always shows the `i`-th entry of the latest
//! list, whichever skill that is. Reconciling only creates or destroys the
//! rows needed to match the new length, always at the tail.

use crate::host::HudSurface;
use crate::row::{RowLayout, RowWidget};
use crate::source::ProficiencyEntry;

/// What a single reconciliation did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub created: usize,
    pub destroyed: usize,
    pub repainted: usize,
}

/// Owns the on-screen rows
#[derive(Debug)]
pub struct RowPool<R> {
    rows: Vec<RowWidget<R>>,
    total_created: u64,
    total_destroyed: u64,
}

impl<R> RowPool<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            total_created: 0,
            total_destroyed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RowWidget<R>] {
        &self.rows
    }

    /// Rows created over the pool's lifetime
    pub fn total_created(&self) -> u64 {
        self.total_created
    }

    /// Rows destroyed over the pool's lifetime
    pub fn total_destroyed(&self) -> u64 {
        self.total_destroyed
    }

    /// Resize the pool to `entries.len()` and paint every entry in order
    pub fn reconcile<S>(
        &mut self,
        surface: &mut S,
        layout: &RowLayout,
        entries: &[ProficiencyEntry],
    ) -> ReconcileStats
    where
        S: HudSurface<Row = R>,
    {
        let mut stats = ReconcileStats::default();

        if self.rows.len() < entries.len() {
            self.rows.reserve(entries.len() - self.rows.len());
            while self.rows.len() < entries.len() {
                self.rows.push(RowWidget::new(surface.create_row()));
                stats.created += 1;
            }
        }

        stats.destroyed = self.truncate(surface, entries.len());
        debug_assert_eq!(self.rows.len(), entries.len());

        for (index, (row, entry)) in self.rows.iter_mut().zip(entries).enumerate() {
            if row.apply(surface, layout, entry, index) {
                stats.repainted += 1;
            }
        }

        self.total_created += stats.created as u64;
        if stats.created > 0 || stats.destroyed > 0 {
            tracing::debug!(
                rows = self.rows.len(),
                created = stats.created,
                destroyed = stats.destroyed,
                "Reconciled overlay rows"
            );
        }
        stats
    }

    /// Destroy every row
    pub fn clear<S>(&mut self, surface: &mut S) -> usize
    where
        S: HudSurface<Row = R>,
    {
        self.truncate(surface, 0)
    }

    /// Destroy rows from the tail until `len` remain
    fn truncate<S>(&mut self, surface: &mut S, len: usize) -> usize
    where
        S: HudSurface<Row = R>,
    {
        let mut destroyed = 0;
        while self.rows.len() > len {
            if let Some(row) = self.rows.pop() {
                surface.destroy_row(row.into_handle());
                destroyed += 1;
            }
        }
        self.total_destroyed += destroyed as u64;
        destroyed
    }
}

impl<R> Default for RowPool<R> {
    fn default() -> Self {
        Self::new()
    }
}
