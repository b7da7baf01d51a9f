//! Lifecycle tests for SkillOverlay driven by scripted frames

use crate::host::SkillRecord;
use crate::overlay::SkillOverlay;
use crate::settings::OverlaySettings;
use crate::testing::{MockHost, RecordingSurface};
use crate::visibility::VisibilityState;

type TestOverlay = SkillOverlay<MockHost, RecordingSurface>;

fn overlay_with(host: MockHost, settings: OverlaySettings) -> TestOverlay {
    SkillOverlay::new(host, RecordingSurface::ready(), settings).unwrap()
}

fn ready_overlay(host: MockHost) -> TestOverlay {
    let mut overlay = overlay_with(host, OverlaySettings::default());
    overlay.on_host_ready();
    overlay
}

fn no_delay() -> OverlaySettings {
    OverlaySettings {
        show_delay: 0.0,
        ..Default::default()
    }
}

/// Run frames at `from, from + step, ..., to` (inclusive)
fn run_frames(overlay: &mut TestOverlay, from: f64, to: f64, step: f64) {
    let mut now = from;
    while now <= to {
        overlay.on_frame(now);
        now += step;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ready_twice_creates_one_panel() {
    let mut overlay = ready_overlay(MockHost::with_levels(&[20.0]));
    overlay.on_host_ready();

    assert!(overlay.is_attached());
    assert_eq!(overlay.surface().panels_attached, 1);
    assert!(!overlay.surface().panel_visible);
}

#[test]
fn test_frames_before_ready_are_noops() {
    let mut overlay = overlay_with(MockHost::with_levels(&[20.0, 30.0]), OverlaySettings::default());

    run_frames(&mut overlay, 0.0, 3.0, 0.25);

    assert!(!overlay.is_attached());
    assert_eq!(overlay.refresh_count(), 0);
    assert_eq!(overlay.surface().rows_created, 0);
    assert_eq!(overlay.surface().visibility_changes, 0);
}

#[test]
fn test_ready_retries_when_ui_root_missing() {
    let mut overlay = SkillOverlay::new(
        MockHost::with_levels(&[20.0]),
        RecordingSurface::default(),
        OverlaySettings::default(),
    )
    .unwrap();

    overlay.on_host_ready();
    assert!(!overlay.is_attached());
    overlay.on_frame(0.0);
    assert_eq!(overlay.surface().rows_created, 0);

    overlay.surface_mut().ui_root_ready = true;
    overlay.on_host_ready();
    assert!(overlay.is_attached());
    assert_eq!(overlay.surface().panels_attached, 1);
}

#[test]
fn test_teardown_then_ready_rebuilds() {
    let mut overlay = ready_overlay(MockHost::with_levels(&[20.0, 30.0, 40.0]));
    run_frames(&mut overlay, 0.0, 1.0, 0.125);
    assert_eq!(overlay.row_count(), 3);

    overlay.on_host_teardown();
    assert!(!overlay.is_attached());
    assert_eq!(overlay.row_count(), 0);
    assert_eq!(overlay.surface().live_rows(), 0);
    assert!(overlay.surface().panel.is_none());
    assert_eq!(overlay.visibility_state(), VisibilityState::HiddenByModal);

    // Frames between teardown and the next ready signal do nothing
    run_frames(&mut overlay, 2.0, 3.0, 0.25);
    assert_eq!(overlay.surface().rows_created, 3);

    overlay.on_host_ready();
    run_frames(&mut overlay, 10.0, 10.5, 0.125);
    assert_eq!(overlay.surface().panels_attached, 2);
    assert_eq!(overlay.row_count(), 3);
    assert_eq!(overlay.surface().live_rows(), 3);
    assert!(overlay.is_visible());
}

#[test]
fn test_invalid_settings_rejected() {
    let settings = OverlaySettings {
        refresh_interval: 0.0,
        ..Default::default()
    };
    let result = SkillOverlay::new(MockHost::default(), RecordingSurface::ready(), settings);
    assert!(result.is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Visibility and refresh
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_first_paint_after_show_delay() {
    let mut overlay = ready_overlay(MockHost::with_levels(&[10.0, 20.0, 16.0, 30.0, 15.0]));

    run_frames(&mut overlay, 0.0, 0.375, 0.125);
    assert!(!overlay.is_visible());
    assert_eq!(overlay.refresh_count(), 0);
    assert_eq!(overlay.surface().live_rows(), 0);

    overlay.on_frame(0.5);
    assert!(overlay.is_visible());
    assert_eq!(overlay.refresh_count(), 1);
    assert_eq!(
        overlay.surface().labels_top_down(),
        vec!["S3 30", "S1 20", "S2 16"]
    );
}

#[test]
fn test_hidden_under_container_and_fresh_on_reappear() {
    let mut overlay = ready_overlay(MockHost::with_levels(&[20.0, 30.0]));
    run_frames(&mut overlay, 0.0, 1.0, 0.125);
    assert!(overlay.is_visible());
    let refreshes = overlay.refresh_count();

    overlay.host_mut().container_open = true;
    overlay.on_frame(1.125);
    assert!(!overlay.is_visible());
    assert!(!overlay.surface().panel_visible);

    // Skills change behind the modal
    overlay
        .host_mut()
        .skills
        .push(SkillRecord::new("swim", "Swim", 55.0));
    run_frames(&mut overlay, 1.25, 4.0, 0.125);
    assert!(!overlay.is_visible());
    assert_eq!(overlay.refresh_count(), refreshes);
    assert_eq!(overlay.surface().labels_top_down(), vec!["S1 30", "S0 20"]);

    overlay.host_mut().container_open = false;
    run_frames(&mut overlay, 4.125, 4.5, 0.125);
    assert!(!overlay.is_visible());

    overlay.on_frame(4.625);
    assert!(overlay.is_visible());
    assert_eq!(overlay.refresh_count(), refreshes + 1);
    assert_eq!(
        overlay.surface().labels_top_down(),
        vec!["Swim 55", "S1 30", "S0 20"]
    );
}

#[test]
fn test_inventory_counts_as_modal() {
    let mut overlay = ready_overlay(MockHost::with_levels(&[20.0]));
    run_frames(&mut overlay, 0.0, 1.0, 0.125);
    assert!(overlay.is_visible());

    overlay.host_mut().inventory_visible = true;
    overlay.on_frame(1.125);
    assert!(!overlay.is_visible());
    assert_eq!(overlay.visibility_state(), VisibilityState::HiddenByModal);
}

#[test]
fn test_refresh_count_follows_interval() {
    let mut overlay = overlay_with(MockHost::with_levels(&[20.0, 30.0]), no_delay());
    overlay.on_host_ready();

    let deltas = [0.0625, 0.3125, 0.125, 0.5];
    let mut now = 0.0;
    overlay.on_frame(now);
    for frame in 0..40 {
        now += deltas[frame % deltas.len()];
        overlay.on_frame(now);
    }

    assert_eq!(now, 10.0);
    // One on the first frame plus one per whole interval
    assert_eq!(overlay.refresh_count(), 11);
}

#[test]
fn test_row_counts_follow_skill_list() {
    let mut overlay = overlay_with(MockHost::default(), no_delay());
    overlay.on_host_ready();

    for (second, count) in [3, 3, 5, 5, 1, 0].into_iter().enumerate() {
        let levels: Vec<f32> = (0..count).map(|i| 20.0 + i as f32).collect();
        *overlay.host_mut() = MockHost::with_levels(&levels);
        overlay.on_frame(second as f64);
        assert_eq!(overlay.row_count(), count);
        assert_eq!(overlay.surface().live_rows(), count);
    }

    assert_eq!(overlay.refresh_count(), 6);
    assert_eq!(overlay.surface().rows_created, 5);
    assert_eq!(overlay.surface().rows_destroyed, 5);
}

#[test]
fn test_waits_for_player() {
    let mut host = MockHost::with_levels(&[20.0, 30.0]);
    host.player_ready = false;
    let mut overlay = ready_overlay(host);

    run_frames(&mut overlay, 0.0, 0.75, 0.125);
    assert!(overlay.is_visible());
    assert_eq!(overlay.refresh_count(), 0);
    assert_eq!(overlay.row_count(), 0);

    // Retried on the very next frame, not the next interval
    overlay.host_mut().player_ready = true;
    overlay.on_frame(0.875);
    assert_eq!(overlay.refresh_count(), 1);
    assert_eq!(overlay.row_count(), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Effective levels
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bonus_shown_when_lookup_available() {
    let mut host = MockHost::with_skills(vec![SkillRecord::new("swords", "Swords", 42.0)]);
    host.effective_levels_supported = true;
    host.effective.insert("swords".into(), 47.0);
    let mut overlay = ready_overlay(host);

    run_frames(&mut overlay, 0.0, 0.5, 0.125);
    assert_eq!(overlay.effective_levels_available(), Some(true));
    assert_eq!(overlay.surface().labels_top_down(), vec!["Swords 42 +5"]);
}

#[test]
fn test_degrades_without_lookup() {
    let mut host = MockHost::with_skills(vec![SkillRecord::new("swords", "Swords", 42.0)]);
    host.effective.insert("swords".into(), 47.0);
    let mut overlay = ready_overlay(host);

    run_frames(&mut overlay, 0.0, 3.0, 0.125);
    assert!(overlay.refresh_count() > 1);
    assert_eq!(overlay.effective_levels_available(), Some(false));
    assert_eq!(overlay.host().probe_calls.get(), 1);
    assert_eq!(overlay.surface().labels_top_down(), vec!["Swords 42"]);
}
