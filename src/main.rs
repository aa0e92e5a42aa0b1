//! Curve Point Editor.
//!
//! Erkennt gelbe Markierungen in einem Bild, lässt sie per Klick
//! (de)aktivieren und fittet fortlaufend ein Polynom durch die aktiven Punkte.

use std::path::Path;

use anyhow::Context;
use curve_point_editor::{
    detect_points_from_file, AppController, AppState, EditorOptions, FrameLoop, LogRenderSink,
    ScriptedInput,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Curve Point Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut args = std::env::args().skip(1);
        let image_path = args
            .next()
            .context("Aufruf: curve-point-editor <bild> [events.json]")?;
        let script_path = args.next();

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Standardwerte als Vorlage zum Anpassen ablegen
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        let detected = detect_points_from_file(Path::new(&image_path), &options.detection_params())?;

        let input = match script_path {
            Some(path) => ScriptedInput::from_file(Path::new(&path))?,
            None => ScriptedInput::default(),
        };

        let target_fps = options.target_fps;
        let mut state = AppState::new(detected, options);
        let mut frame_loop =
            FrameLoop::new(AppController::new(), input, LogRenderSink::default(), target_fps);

        let stats = frame_loop.run(&mut state)?;
        log::info!(
            "{} Frames gerendert ({} Elemente), {} aktive Punkte, Grad {}",
            frame_loop.sink().frames(),
            frame_loop.sink().elements(),
            state.points.active_count(),
            state.degree
        );
        if let Some(line) = state.reporter.last_line() {
            log::info!("Letztes Polynom: {}", line);
        }
        log::debug!("Statistik: {:?}", stats);

        Ok(())
    }
}
