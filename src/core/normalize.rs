//! Abbildung von Anzeige-Koordinaten in das normalisierte Spielkoordinatensystem.

use super::Point;
use glam::DVec2;

/// Größe der Anzeige in Pixeln (entspricht der Bildgröße der Punktquelle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    /// Breite in Pixeln
    pub width: u32,
    /// Höhe in Pixeln
    pub height: u32,
}

impl DisplaySize {
    /// Erstellt eine Anzeigegröße.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Normalisierter Koordinatenraum mit Ursprung in der Bildmitte und y nach oben.
///
/// `x' = x / width * span_x - span_x / 2`
/// `y' = (height - y) / height * span_y - span_y / 2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSpace {
    display: DisplaySize,
    span: DVec2,
}

impl NormalizedSpace {
    /// Erstellt den Raum für eine Anzeige und die Spannweite der Zielachsen.
    pub fn new(display: DisplaySize, span_x: f64, span_y: f64) -> Self {
        Self {
            display,
            span: DVec2::new(span_x, span_y),
        }
    }

    /// Zugrundeliegende Anzeigegröße.
    pub fn display(&self) -> DisplaySize {
        self.display
    }

    /// Transformiert einen Anzeige-Punkt in den normalisierten Raum.
    pub fn to_normalized(&self, point: Point) -> DVec2 {
        let width = self.display.width as f64;
        let height = self.display.height as f64;
        let x = point.x as f64 / width * self.span.x - self.span.x / 2.0;
        let y = (height - point.y as f64) / height * self.span.y - self.span.y / 2.0;
        DVec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_map_to_centered_range_with_flipped_y() {
        let space = NormalizedSpace::new(DisplaySize::new(100, 100), 50.0, 30.0);

        let top_left = space.to_normalized(Point::new(0, 0));
        assert_relative_eq!(top_left.x, -25.0);
        assert_relative_eq!(top_left.y, 15.0);

        let bottom_right = space.to_normalized(Point::new(100, 100));
        assert_relative_eq!(bottom_right.x, 25.0);
        assert_relative_eq!(bottom_right.y, -15.0);

        let center = space.to_normalized(Point::new(50, 50));
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);
    }

    #[test]
    fn non_square_display_scales_axes_independently() {
        let space = NormalizedSpace::new(DisplaySize::new(200, 50), 50.0, 30.0);
        let p = space.to_normalized(Point::new(40, 10));
        assert_relative_eq!(p.x, -15.0);
        assert_relative_eq!(p.y, 9.0);
    }
}
