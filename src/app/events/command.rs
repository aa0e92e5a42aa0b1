use crate::core::Point;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Punkt an Position umschalten (manuell entfernen / aktivieren / deaktivieren)
    TogglePointAt { pos: Point },
    /// Manuellen Punkt anhängen
    AddUserPoint { pos: Point },
    /// Polynomgrad um 1 erhöhen (begrenzt)
    IncrementDegree,
    /// Polynomgrad um 1 verringern (begrenzt)
    DecrementDegree,
    /// Fit über die aktive Punktmenge neu berechnen und Ergebnis berichten
    RefreshFit,
    /// Anwendung beenden
    RequestExit,
}
