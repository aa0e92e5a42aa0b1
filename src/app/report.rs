//! Bericht der normalisierten Koeffizienten mit Änderungsunterdrückung.

use crate::core::format_polynomial;

/// Platzhalter für die vorherigen Koeffizienten vor dem ersten Bericht.
pub const PLACEHOLDER_COEFFICIENTS: [f64; 3] = [1.0, 1.0, 1.0];

/// Merkt sich die zuletzt berichteten Koeffizienten.
///
/// Ein neuer Bericht entsteht nur, wenn sich der Koeffizient an Index 1
/// (höchste Potenz zuerst) vom vorherigen unterscheidet. Änderungen an
/// anderen Indizes allein lösen keinen Bericht aus.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientReporter {
    previous: Vec<f64>,
    emitted: usize,
    last_line: Option<String>,
}

impl Default for CoefficientReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CoefficientReporter {
    /// Erstellt einen Reporter mit Platzhalter-Koeffizienten.
    pub fn new() -> Self {
        Self {
            previous: PLACEHOLDER_COEFFICIENTS.to_vec(),
            emitted: 0,
            last_line: None,
        }
    }

    /// Zuletzt berichtete Koeffizienten (höchste Potenz zuerst).
    pub fn previous(&self) -> &[f64] {
        &self.previous
    }

    /// Anzahl bisher ausgegebener Berichte.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Zuletzt ausgegebener Ausdruck.
    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }

    /// Berichtet `coefficients` (höchste Potenz zuerst), falls die
    /// Änderungsbedingung erfüllt ist. Gibt den ausgegebenen Ausdruck zurück.
    pub fn report(&mut self, coefficients: Option<&[f64]>) -> Option<String> {
        let coefficients = coefficients?;
        if coefficients.get(1) == self.previous.get(1) {
            return None;
        }

        self.previous = coefficients.to_vec();
        let line = format_polynomial(coefficients);
        log::info!("Polynom: {}", line);
        self.emitted += 1;
        self.last_line = Some(line.clone());
        Some(line)
    }
}
