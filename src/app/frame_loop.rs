//! Hauptschleife: Input → Klassifikation → Fit → Bericht → Render, im festen Takt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::input::{map_input_event, InputSource};
use super::render::RenderSink;
use super::{AppController, AppIntent, AppState};

/// Wartet bis zur nächsten Tick-Grenze einer festen Framerate.
///
/// Läuft ein Frame länger als ein Intervall, wird ohne Wartezeit
/// weitergemacht und der Takt ab jetzt neu verankert.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: Duration,
    next_tick: Instant,
}

impl FrameTicker {
    /// Erstellt einen Ticker für `target_fps` Frames pro Sekunde (0 = ungebremst).
    pub fn new(target_fps: u32) -> Self {
        let interval = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };
        Self {
            interval,
            next_tick: Instant::now() + interval,
        }
    }

    /// Intervall zwischen zwei Ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blockiert bis zur nächsten Tick-Grenze und gibt die Wartezeit zurück.
    pub fn wait_for_next_tick(&mut self) -> Duration {
        let now = Instant::now();
        let waited = if self.next_tick > now {
            let remaining = self.next_tick - now;
            std::thread::sleep(remaining);
            remaining
        } else {
            Duration::ZERO
        };
        self.next_tick = self.next_tick.max(now) + self.interval;
        waited
    }
}

/// Kennzahlen eines Schleifenlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Anzahl vollständig durchlaufener Frames
    pub frames: u64,
    /// Anzahl ausgegebener Polynom-Berichte
    pub reports: usize,
}

/// Orchestriert einen Frame nach dem anderen auf einem einzelnen Thread.
pub struct FrameLoop<I: InputSource, R: RenderSink> {
    controller: AppController,
    input: I,
    sink: R,
    ticker: FrameTicker,
    stop: Arc<AtomicBool>,
}

impl<I: InputSource, R: RenderSink> FrameLoop<I, R> {
    /// Erstellt die Schleife mit Input-Quelle, Renderer und Ziel-Framerate.
    pub fn new(controller: AppController, input: I, sink: R, target_fps: u32) -> Self {
        Self {
            controller,
            input,
            sink,
            ticker: FrameTicker::new(target_fps),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Globales Stop-Flag; wird am Anfang jedes Frames geprüft.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Renderer (z.B. für Auswertungen nach dem Lauf).
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Läuft bis Stop-Flag oder Beenden-Intent.
    pub fn run(&mut self, state: &mut AppState) -> anyhow::Result<FrameStats> {
        let mut stats = FrameStats::default();
        let reports_before = state.reporter.emitted();

        while !self.stop.load(Ordering::Relaxed) && !state.should_exit {
            self.run_frame(state)?;
            stats.frames += 1;
            if state.should_exit {
                self.stop.store(true, Ordering::Relaxed);
                break;
            }
            self.ticker.wait_for_next_tick();
        }

        stats.reports = state.reporter.emitted() - reports_before;
        log::info!(
            "Hauptschleife beendet nach {} Frames ({} Berichte)",
            stats.frames,
            stats.reports
        );
        Ok(stats)
    }

    /// Führt genau einen Frame aus: Events abarbeiten, Fit, Bericht, Render.
    pub fn run_frame(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        for event in self.input.poll_events() {
            let Some(intent) = map_input_event(event) else {
                continue;
            };
            if let Err(e) = self.controller.handle_intent(state, intent) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }

        self.controller
            .handle_intent(state, AppIntent::FrameAdvanced)?;

        let scene = self.controller.build_render_scene(state);
        self.sink.render(&scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_interval_matches_target_rate() {
        let ticker = FrameTicker::new(50);
        assert_eq!(ticker.interval(), Duration::from_millis(20));
        assert_eq!(FrameTicker::new(0).interval(), Duration::ZERO);
    }

    #[test]
    fn ticker_waits_at_most_one_interval() {
        let mut ticker = FrameTicker::new(200);
        let start = Instant::now();
        ticker.wait_for_next_tick();
        ticker.wait_for_next_tick();
        let waited = ticker.wait_for_next_tick();

        assert!(waited <= ticker.interval());
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn unpaced_ticker_never_sleeps() {
        let mut ticker = FrameTicker::new(0);
        for _ in 0..10 {
            assert_eq!(ticker.wait_for_next_tick(), Duration::ZERO);
        }
    }
}
