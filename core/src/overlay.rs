//! The overlay context and its lifecycle hooks
//!
//! [`SkillOverlay`] owns everything the overlay needs: the host adapters, the
//! visibility and refresh state, and the row pool. The host glue calls
//! [`on_host_ready`](SkillOverlay::on_host_ready) when its UI root exists,
//! [`on_frame`](SkillOverlay::on_frame) once per rendered frame and
//! [`on_host_teardown`](SkillOverlay::on_host_teardown) when the UI root goes away.

use crate::error::{SettingsError, SurfaceError};
use crate::host::{HudSurface, SkillHost};
use crate::pool::RowPool;
use crate::row::RowLayout;
use crate::scheduler::RefreshScheduler;
use crate::settings::{OverlaySettings, OverlaySettingsExt};
use crate::source::DataSource;
use crate::visibility::{Visibility, VisibilityController, VisibilityState};

/// A single skill overlay bound to one host
pub struct SkillOverlay<H, S: HudSurface> {
    host: H,
    surface: S,
    settings: OverlaySettings,
    layout: RowLayout,

    attached: bool,
    panel_visible: bool,
    /// A refresh came due while the panel was hidden (or before the player
    /// existed); the next visible frame refreshes first.
    stale: bool,
    refreshes: u64,

    visibility: VisibilityController,
    scheduler: RefreshScheduler,
    source: DataSource,
    rows: RowPool<S::Row>,
}

impl<H: SkillHost, S: HudSurface> SkillOverlay<H, S> {
    /// Create an overlay. Nothing is drawn until the host signals ready.
    pub fn new(host: H, surface: S, settings: OverlaySettings) -> Result<Self, SettingsError> {
        settings.validate()?;

        Ok(Self {
            layout: RowLayout::from_settings(&settings),
            visibility: VisibilityController::new(settings.show_delay),
            scheduler: RefreshScheduler::new(settings.refresh_interval),
            source: DataSource::new(settings.level_threshold),
            rows: RowPool::new(),
            attached: false,
            panel_visible: false,
            stale: false,
            refreshes: 0,
            host,
            surface,
            settings,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle hooks
    // ─────────────────────────────────────────────────────────────────────────

    /// Create the panel under the host UI root. Safe to call repeatedly.
    pub fn on_host_ready(&mut self) {
        if self.attached {
            return;
        }

        match self.surface.attach_panel(self.settings.anchor) {
            Ok(()) => {
                self.attached = true;
                self.panel_visible = false;
                self.surface.set_panel_visible(false);
                tracing::info!(
                    x = self.settings.anchor.x,
                    y = self.settings.anchor.y,
                    "Skill overlay panel created"
                );
            }
            Err(SurfaceError::UiRootMissing) => {
                tracing::warn!("Host UI root not found yet, will retry on next ready signal");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create skill overlay panel");
            }
        }
    }

    /// Per-frame update; `now` is the host's monotonic clock
    pub fn on_frame(&mut self, now: f64) {
        if !self.attached {
            return;
        }

        let modal_open = self.source.modal_open(&self.host);
        let Visibility { visible } = self.visibility.update(modal_open, now);
        if visible != self.panel_visible {
            self.surface.set_panel_visible(visible);
            self.panel_visible = visible;
            tracing::debug!(visible, now, "Skill overlay visibility changed");
        }

        // The schedule keeps ticking while hidden
        if self.scheduler.should_refresh(now) {
            self.stale = true;
        }

        if visible && self.stale {
            self.refresh();
        }
    }

    /// Destroy all rows and the panel. A later ready signal recreates them.
    pub fn on_host_teardown(&mut self) {
        if !self.attached {
            return;
        }

        let destroyed = self.rows.clear(&mut self.surface);
        self.surface.detach_panel();
        self.attached = false;
        self.panel_visible = false;
        self.stale = false;
        self.visibility.reset();
        self.scheduler.reset();
        tracing::info!(rows = destroyed, "Skill overlay panel destroyed");
    }

    fn refresh(&mut self) {
        // Player not spawned yet: keep the old rows and retry next frame
        if !self.host.player_ready() {
            return;
        }
        self.stale = false;

        let entries = self.source.fetch(&self.host);
        self.rows.reconcile(&mut self.surface, &self.layout, entries);
        self.refreshes += 1;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn visibility_state(&self) -> VisibilityState {
        self.visibility.state()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &RowPool<S::Row> {
        &self.rows
    }

    /// Number of completed data refreshes
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    /// Whether bonus levels are shown (`None` until the first refresh)
    pub fn effective_levels_available(&self) -> Option<bool> {
        self.source.effective_levels_available()
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
