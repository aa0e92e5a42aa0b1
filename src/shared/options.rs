//! Zentrale Konfiguration für den Curve Point Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{DetectionParams, HitTester};

// ── Marker & Klicks ─────────────────────────────────────────────────

/// Radius der Punkt-Marker in Pixeln.
pub const MARKER_RADIUS: f32 = 10.0;
/// Klick-Toleranz in Pixeln (doppelter Marker-Radius).
pub const CLICK_TOLERANCE: f32 = MARKER_RADIUS * 2.0;

// ── Fit ─────────────────────────────────────────────────────────────

/// Polynomgrad beim Start.
pub const INITIAL_DEGREE: u8 = 2;
/// Anzahl Stützstellen der gezeichneten Kurve.
pub const CURVE_SAMPLES: usize = 100;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_LINE_WIDTH: f32 = 2.0;
/// Breite des normalisierten Koordinatenraums.
pub const NORMALIZED_WIDTH: f64 = 50.0;
/// Höhe des normalisierten Koordinatenraums.
pub const NORMALIZED_HEIGHT: f64 = 30.0;

// ── Frame-Takt ──────────────────────────────────────────────────────

/// Ziel-Framerate der Hauptschleife.
pub const TARGET_FPS: u32 = 60;

// ── Punkterkennung ──────────────────────────────────────────────────

/// Untere HSV-Grenze für gelbe Markierungen (H 0..180, S/V 0..255).
pub const HSV_LOWER: [u8; 3] = [25, 100, 100];
/// Obere HSV-Grenze für gelbe Markierungen.
pub const HSV_UPPER: [u8; 3] = [35, 255, 255];
/// Minimale Blob-Fläche in Pixeln (exklusive).
pub const MIN_BLOB_AREA: f64 = 15.0;
/// Versatz der Schwerpunkte in Pixeln.
pub const CENTROID_OFFSET: [i32; 2] = [1, -2];

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Erkannte, nicht aktive Punkte (Grün).
pub const UNTOGGLED_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Aktive Punkte (Gelb).
pub const TOGGLED_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Manuelle Punkte (Rot).
pub const USER_POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Polynom-Kurve (Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Grad-Anzeige (Grau).
pub const TEXT_COLOR: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_point_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Marker & Klicks ─────────────────────────────────────────
    /// Radius der Punkt-Marker in Pixeln
    pub marker_radius: f32,
    /// Maximale Klick-Distanz zu einem Punkt in Pixeln
    pub click_tolerance: f32,

    // ── Fit ─────────────────────────────────────────────────────
    /// Polynomgrad beim Start (wird auf 1..=10 begrenzt)
    pub initial_degree: u8,
    /// Anzahl Stützstellen der gezeichneten Kurve
    pub curve_samples: usize,
    /// Linienstärke der Kurve in Pixeln
    pub curve_line_width: f32,
    /// Breite des normalisierten Koordinatenraums
    pub normalized_width: f64,
    /// Höhe des normalisierten Koordinatenraums
    pub normalized_height: f64,

    // ── Frame-Takt ──────────────────────────────────────────────
    /// Ziel-Framerate (0 = ungebremst)
    pub target_fps: u32,

    // ── Punkterkennung ──────────────────────────────────────────
    /// Untere HSV-Grenze
    pub hsv_lower: [u8; 3],
    /// Obere HSV-Grenze
    pub hsv_upper: [u8; 3],
    /// Minimale Blob-Fläche in Pixeln
    pub min_blob_area: f64,
    /// Versatz der Schwerpunkte in Pixeln
    pub centroid_offset: [i32; 2],

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe erkannter Punkte
    pub untoggled_color: [f32; 4],
    /// Farbe aktiver Punkte
    pub toggled_color: [f32; 4],
    /// Farbe manueller Punkte
    pub user_point_color: [f32; 4],
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Farbe der Grad-Anzeige
    pub text_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            marker_radius: MARKER_RADIUS,
            click_tolerance: CLICK_TOLERANCE,
            initial_degree: INITIAL_DEGREE,
            curve_samples: CURVE_SAMPLES,
            curve_line_width: CURVE_LINE_WIDTH,
            normalized_width: NORMALIZED_WIDTH,
            normalized_height: NORMALIZED_HEIGHT,
            target_fps: TARGET_FPS,
            hsv_lower: HSV_LOWER,
            hsv_upper: HSV_UPPER,
            min_blob_area: MIN_BLOB_AREA,
            centroid_offset: CENTROID_OFFSET,
            untoggled_color: UNTOGGLED_COLOR,
            toggled_color: TOGGLED_COLOR,
            user_point_color: USER_POINT_COLOR,
            curve_color: CURVE_COLOR,
            text_color: TEXT_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_point_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_point_editor.toml")
    }

    /// Treffer-Test mit der konfigurierten Klick-Toleranz.
    pub fn hit_tester(&self) -> HitTester {
        HitTester::new(self.click_tolerance as f64)
    }

    /// Segmentierungs-Parameter für die Punktquelle.
    pub fn detection_params(&self) -> DetectionParams {
        DetectionParams {
            hsv_lower: self.hsv_lower,
            hsv_upper: self.hsv_upper,
            min_blob_area: self.min_blob_area,
            centroid_offset: self.centroid_offset,
        }
    }
}
