//! Treffer-Test: Klickposition gegen eine Punkt-Sammlung auflösen.

use super::Point;

/// Löst eine Klickposition gegen Punkt-Sammlungen auf.
///
/// Gewinnt der erste Punkt in Iterationsreihenfolge, dessen euklidische
/// Distanz höchstens dem Toleranzradius entspricht. Es wird bewusst nicht
/// nach dem nächstgelegenen Punkt gesucht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    tolerance: f64,
}

impl HitTester {
    /// Erstellt einen Treffer-Test mit dem gegebenen Toleranzradius (Pixel).
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Toleranzradius in Pixeln.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Prüft, ob `point` innerhalb der Toleranz um `pos` liegt.
    pub fn hits(&self, pos: Point, point: Point) -> bool {
        pos.as_dvec2().distance(point.as_dvec2()) <= self.tolerance
    }

    /// Index des ersten Punkts innerhalb der Toleranz.
    pub fn first_hit<'a, I>(&self, candidates: I, pos: Point) -> Option<usize>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        candidates
            .into_iter()
            .position(|&point| self.hits(pos, point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_distance_counts_as_hit() {
        let tester = HitTester::new(20.0);
        assert!(tester.hits(Point::new(0, 0), Point::new(12, 16)));
        assert!(!tester.hits(Point::new(0, 0), Point::new(12, 17)));
    }

    #[test]
    fn first_hit_prefers_iteration_order_over_distance() {
        let tester = HitTester::new(20.0);
        let points = [Point::new(15, 0), Point::new(1, 0), Point::new(500, 500)];

        assert_eq!(tester.first_hit(&points, Point::new(0, 0)), Some(0));
    }

    #[test]
    fn first_hit_returns_none_without_match() {
        let tester = HitTester::new(5.0);
        let points = [Point::new(100, 100)];

        assert_eq!(tester.first_hit(&points, Point::new(0, 0)), None);
        assert_eq!(tester.first_hit(&[], Point::new(0, 0)), None);
    }
}
