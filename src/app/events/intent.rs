use crate::core::Point;

/// Intents sind Eingaben aus Input-Quelle oder System, die noch nicht
/// direkt den State mutieren.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    /// Primärklick: Punkt umschalten bzw. manuellen Punkt entfernen
    PrimaryClickRequested { pos: Point },
    /// Sekundärklick: manuellen Punkt hinzufügen
    SecondaryClickRequested { pos: Point },
    /// Polynomgrad erhöhen
    DegreeIncreaseRequested,
    /// Polynomgrad verringern
    DegreeDecreaseRequested,
    /// Neuer Frame: Fit neu berechnen und berichten
    FrameAdvanced,
    /// Anwendung beenden
    ExitRequested,
}
