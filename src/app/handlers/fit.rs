//! Handler für Fit-Neuberechnung und Beenden.

use crate::app::use_cases;
use crate::app::AppState;

/// Berechnet den Fit für den aktuellen Frame neu.
pub fn refresh(state: &mut AppState) {
    use_cases::fit::refresh_fit(state);
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
