//! Use-Case: Punkte per Klick umschalten oder manuell hinzufügen.

use crate::app::AppState;
use crate::core::{Point, ToggleOutcome};

/// Löst einen Primärklick gegen die Punkt-Sammlungen auf.
pub fn toggle_point_at(state: &mut AppState, pos: Point) -> ToggleOutcome {
    let hit_tester = state.options.hit_tester();
    let outcome = state.points.toggle_at(pos, &hit_tester);

    match outcome {
        ToggleOutcome::RemovedUserPoint(point) => {
            log::info!("Manueller Punkt ({}, {}) entfernt", point.x, point.y);
        }
        ToggleOutcome::Activated(point) => {
            log::info!("Punkt ({}, {}) aktiviert", point.x, point.y);
        }
        ToggleOutcome::Deactivated(point) => {
            log::info!("Punkt ({}, {}) deaktiviert", point.x, point.y);
        }
        ToggleOutcome::NoMatch => {
            log::debug!("Kein Punkt bei ({}, {})", pos.x, pos.y);
        }
    }

    outcome
}

/// Hängt einen manuellen Punkt an der Klickposition an.
pub fn add_user_point(state: &mut AppState, pos: Point) {
    state.points.add_user_point(pos);
    log::info!(
        "Manueller Punkt ({}, {}) hinzugefügt ({} gesamt)",
        pos.x,
        pos.y,
        state.points.user_added().len()
    );
}
