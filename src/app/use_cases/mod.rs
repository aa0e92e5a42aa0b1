//! Use-Cases: Klassifikation der Punkte und Fit-Berechnung.

pub mod classify;
pub mod fit;
