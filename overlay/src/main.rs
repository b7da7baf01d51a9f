//! Demo of the skill overlay on the software surface
//!
//! Drives a simulated host with irregular frame times, including the
//! inventory and container screens opening and closing, then writes the last
//! frame as a PNG.

mod logging;

use std::path::PathBuf;

use clap::Parser;
use skill_overlay::{IconAtlas, IconData, Renderer, SimulatedHost, SoftwareHud, snapshot};
use skill_overlay_core::{OverlaySettings, SkillOverlay, parse_settings};

#[derive(Parser)]
#[command(version, about = "Render the skill overlay against a simulated host")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Where to write the final frame
    #[arg(long, default_value = "skill-overlay.png")]
    output: PathBuf,

    /// Overlay settings (TOML); defaults when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Font file for labels; system fonts when omitted
    #[arg(long)]
    font: Option<PathBuf>,

    /// Skill icons (PNG), assigned to skills in order
    #[arg(long = "icon")]
    icons: Vec<PathBuf>,

    #[arg(long, default_value_t = 480)]
    width: u32,

    #[arg(long, default_value_t = 320)]
    height: u32,
}

/// Frame deltas cycled by the simulation, roughly 30 to 120 fps with a hitch
const FRAME_DELTAS: [f64; 7] = [
    1.0 / 60.0,
    1.0 / 30.0,
    1.0 / 120.0,
    1.0 / 60.0,
    0.25,
    1.0 / 45.0,
    1.0 / 60.0,
];

fn main() -> Result<(), String> {
    logging::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            parse_settings(&text).map_err(|e| format!("Invalid settings {}: {e}", path.display()))?
        }
        None => OverlaySettings::default(),
    };

    let mut atlas = IconAtlas::new();
    let mut handles = Vec::new();
    for path in &args.icons {
        match atlas.load_png_file(path) {
            Ok(handle) => handles.push(handle),
            Err(e) => tracing::warn!(path = ?path, error = %e, "Skipping icon"),
        }
    }
    if handles.is_empty() {
        // Distinct placeholder tiles so rows are told apart in the snapshot
        for rgba in [[200, 60, 60, 255], [60, 160, 220, 255], [90, 200, 90, 255]] {
            handles.push(atlas.insert(IconData::solid(24, rgba)));
        }
    }

    let renderer = match &args.font {
        Some(path) => Renderer::with_font_file(path)
            .map_err(|e| format!("Failed to load font {}: {e}", path.display()))?,
        None => Renderer::new(),
    };
    let mut hud = SoftwareHud::with_renderer(&settings, atlas, renderer);
    hud.set_ui_root(args.width, args.height);

    let host = SimulatedHost::new(&handles);
    let mut overlay =
        SkillOverlay::new(host, hud, settings).map_err(|e| format!("Invalid settings: {e}"))?;
    overlay.on_host_ready();

    let mut now = 0.0;
    for frame in 0..args.frames {
        overlay.host_mut().advance(now);
        overlay.on_frame(now);
        now += FRAME_DELTAS[frame as usize % FRAME_DELTAS.len()];
    }

    tracing::info!(
        frames = args.frames,
        elapsed = now,
        refreshes = overlay.refresh_count(),
        rows = overlay.row_count(),
        visible = overlay.is_visible(),
        "Simulation finished"
    );

    let mut buffer = Renderer::create_buffer(args.width, args.height);
    overlay
        .surface_mut()
        .render(&mut buffer, args.width, args.height);
    snapshot::write_png(&args.output, &buffer, args.width, args.height)
        .map_err(|e| format!("Failed to write {}: {e}", args.output.display()))?;

    overlay.on_host_teardown();
    Ok(())
}
