//! Handler für Punkt-Klassifikation.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Primärklick: manuellen Punkt entfernen oder Punkt umschalten.
pub fn toggle_at(state: &mut AppState, pos: Point) {
    use_cases::classify::toggle_point_at(state, pos);
}

/// Sekundärklick: manuellen Punkt anhängen.
pub fn add_user_point(state: &mut AppState, pos: Point) {
    use_cases::classify::add_user_point(state, pos);
}
