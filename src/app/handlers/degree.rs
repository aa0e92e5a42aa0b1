//! Handler für den Polynomgrad.

use crate::app::AppState;

/// Erhöht den Grad (begrenzt auf das Maximum).
pub fn increment(state: &mut AppState) {
    if state.degree.increment() {
        log::info!("Polynomgrad: {}", state.degree);
    }
}

/// Verringert den Grad (begrenzt auf das Minimum).
pub fn decrement(state: &mut AppState) {
    if state.degree.decrement() {
        log::info!("Polynomgrad: {}", state.degree);
    }
}
