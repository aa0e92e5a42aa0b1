//! Application State: zentrale Datenhaltung.
//!
//! Alle veränderlichen Daten (Punkt-Sammlungen, Grad, letzter Fit,
//! Berichtszustand) liegen in genau einem `AppState`, der explizit an
//! Controller und Handler übergeben wird.

use super::report::CoefficientReporter;
use crate::core::{Degree, DetectedPoints, DisplaySize, NormalizedSpace, PointSets, PolynomialFit};
use crate::shared::EditorOptions;

/// Standard-Anzeigegröße, wenn keine Punktquelle vorhanden ist.
const DEFAULT_DISPLAY_SIZE: DisplaySize = DisplaySize {
    width: 1280,
    height: 720,
};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Erkannte, aktive und manuelle Punkte
    pub points: PointSets,
    /// Aktueller Polynomgrad
    pub degree: Degree,
    /// Anzeigegröße (Basis der Normalisierung und der Kurvenabtastung)
    pub display_size: DisplaySize,
    /// Fit des aktuellen Frames (None bei zu wenigen Punkten oder singulärem System)
    pub fit: Option<PolynomialFit>,
    /// Änderungsunterdrückung und letzter Bericht
    pub reporter: CoefficientReporter,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert, dass die Hauptschleife enden soll
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            DetectedPoints::from_points(Vec::new(), DEFAULT_DISPLAY_SIZE),
            EditorOptions::default(),
        )
    }
}

impl AppState {
    /// Erstellt den Zustand aus dem Ergebnis der Punktquelle.
    pub fn new(detected: DetectedPoints, options: EditorOptions) -> Self {
        Self {
            points: PointSets::new(detected.points),
            degree: Degree::new(options.initial_degree),
            display_size: detected.display_size,
            fit: None,
            reporter: CoefficientReporter::new(),
            options,
            should_exit: false,
        }
    }

    /// Normalisierter Koordinatenraum für die aktuelle Anzeige.
    pub fn normalized_space(&self) -> NormalizedSpace {
        NormalizedSpace::new(
            self.display_size,
            self.options.normalized_width,
            self.options.normalized_height,
        )
    }
}
