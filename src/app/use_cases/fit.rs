//! Use-Case: Polynom-Fit über die aktive Punktmenge.

use crate::app::AppState;
use crate::core::{fit_active_points, PolynomialFit};

/// Berechnet den Fit für den aktuellen Zustand.
///
/// Zu wenige Punkte ergeben still `None`; ein singuläres System wird
/// als Warnung geloggt und ergibt für diesen Frame ebenfalls `None`.
pub fn compute_fit(state: &AppState) -> Option<PolynomialFit> {
    let active = state.points.active_points();
    match fit_active_points(&active, state.degree, &state.normalized_space()) {
        Ok(fit) => fit,
        Err(e) => {
            log::warn!("Polynom-Fit fehlgeschlagen (singulaere Matrix): {:#}", e);
            None
        }
    }
}

/// Berechnet den Fit neu, speichert ihn im State und berichtet die
/// normalisierten Koeffizienten.
pub fn refresh_fit(state: &mut AppState) -> Option<String> {
    state.fit = compute_fit(state);
    let normalized = state.fit.as_ref().map(|fit| fit.normalized.highest_first());
    state.reporter.report(normalized.as_deref())
}
