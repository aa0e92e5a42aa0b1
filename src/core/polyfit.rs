//! Least-Squares-Polynom-Fit über die aktive Punktmenge.
//!
//! Gelöst wird das überbestimmte System `V c = y` mit der Vandermonde-Matrix
//! `V`. Die Spalten werden vorher auf Einheitsnorm skaliert, danach liefert
//! eine SVD sowohl den Rang (für die Singularitätsprüfung) als auch die
//! Lösung. Das Ergebnis ist für identische Eingaben bitgleich.

use anyhow::{anyhow, bail, Result};
use nalgebra::{DMatrix, DVector};

use super::{Degree, NormalizedSpace, Point};

/// Polynom mit Koeffizienten in aufsteigender Potenz (`c0 + c1 x + ...`).
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Erstellt ein Polynom aus Koeffizienten in aufsteigender Potenz.
    pub fn from_ascending(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Koeffizienten in aufsteigender Potenz.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Koeffizienten beginnend mit der höchsten Potenz.
    pub fn highest_first(&self) -> Vec<f64> {
        self.coefficients.iter().rev().copied().collect()
    }

    /// Grad des Polynoms (Anzahl Koeffizienten - 1).
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Wertet das Polynom per Horner-Schema aus.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

/// Ergebnis eines erfolgreichen Fits in beiden Koordinatenräumen.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    /// Fit in Anzeige-Koordinaten (nur für das Zeichnen der Kurve)
    pub display: Polynomial,
    /// Fit im normalisierten Raum (wird berichtet)
    pub normalized: Polynomial,
}

impl PolynomialFit {
    /// Tastet die Anzeige-Kurve an `samples` gleichverteilten x-Werten in
    /// `[0, width]` ab. Koordinaten werden auf ganze Pixel abgeschnitten.
    pub fn sample_display_curve(&self, width: u32, samples: usize) -> Vec<Point> {
        let width = width as f64;
        let steps = samples.saturating_sub(1).max(1) as f64;
        (0..samples)
            .map(|i| {
                let x = width * i as f64 / steps;
                let y = self.display.eval(x);
                Point::new(x as i32, y as i32)
            })
            .collect()
    }
}

/// Fittet ein Polynom des Grads `degree` durch die aktiven Punkte.
///
/// - `Ok(None)`, wenn weniger als `degree + 1` Punkte vorhanden sind.
/// - `Err`, wenn das System rangdefizient ist (z.B. zu wenige verschiedene x-Werte).
pub fn fit_active_points(
    points: &[Point],
    degree: Degree,
    space: &NormalizedSpace,
) -> Result<Option<PolynomialFit>> {
    if points.len() < degree.coefficient_count() {
        return Ok(None);
    }

    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.x);

    let xs: Vec<f64> = sorted.iter().map(|p| p.x as f64).collect();
    let ys: Vec<f64> = sorted.iter().map(|p| p.y as f64).collect();
    let display = least_squares(&xs, &ys, degree.value() as usize)?;

    let (nxs, nys): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .map(|&p| {
            let n = space.to_normalized(p);
            (n.x, n.y)
        })
        .unzip();
    let normalized = least_squares(&nxs, &nys, degree.value() as usize)?;

    Ok(Some(PolynomialFit {
        display,
        normalized,
    }))
}

/// Least-Squares-Polynom des Grads `degree` durch `(xs[i], ys[i])`.
pub fn least_squares(xs: &[f64], ys: &[f64], degree: usize) -> Result<Polynomial> {
    let rows = xs.len();
    let cols = degree + 1;
    if rows != ys.len() {
        bail!("x- und y-Werte haben unterschiedliche Laenge ({} != {})", rows, ys.len());
    }
    if rows < cols {
        bail!("Zu wenige Punkte fuer Grad {}: {} < {}", degree, rows, cols);
    }

    // Spaltennormen der Vandermonde-Matrix
    let mut scales = Vec::with_capacity(cols);
    for power in 0..cols {
        let norm = xs
            .iter()
            .map(|&x| x.powi(power as i32).powi(2))
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 || !norm.is_finite() {
            bail!("Singulaere Matrix: Spalte x^{} ist entartet", power);
        }
        scales.push(norm);
    }

    let design = DMatrix::from_fn(rows, cols, |r, c| xs[r].powi(c as i32) / scales[c]);
    let rhs = DVector::from_column_slice(ys);

    let svd = design.svd(true, true);
    let max_singular = svd.singular_values.max();
    let cutoff = rows as f64 * f64::EPSILON * max_singular;
    let rank = svd.rank(cutoff);
    if max_singular <= 0.0 || rank < cols {
        bail!("Singulaere Matrix: Rang {} < {}", rank, cols);
    }

    let solution = svd.solve(&rhs, cutoff).map_err(|e| anyhow!(e))?;

    let coefficients: Vec<f64> = solution
        .iter()
        .zip(&scales)
        .map(|(c, scale)| c / scale)
        .collect();
    if coefficients.iter().any(|c| !c.is_finite()) {
        bail!("Polynom-Fit lieferte nicht-endliche Koeffizienten");
    }

    Ok(Polynomial::from_ascending(coefficients))
}
