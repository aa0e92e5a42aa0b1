//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Render-Kollaborateur
//! sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Degree, DisplaySize, Point};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Anzeigegröße in Pixeln
    pub display_size: DisplaySize,
    /// Erkannte, nicht aktive Punkte
    pub untoggled: Vec<Point>,
    /// Aktive Punkte
    pub toggled: Vec<Point>,
    /// Manuell hinzugefügte Punkte
    pub user_points: Vec<Point>,
    /// Abgetastete Kurve in Anzeige-Koordinaten (nur bei gültigem Fit)
    pub curve: Option<Vec<Point>>,
    /// Aktueller Polynomgrad für die Textanzeige
    pub degree: Degree,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden soll.
    pub fn has_curve(&self) -> bool {
        self.curve.as_ref().is_some_and(|c| c.len() >= 2)
    }

    /// Beschriftung der Grad-Anzeige.
    pub fn degree_label(&self) -> String {
        format!("Degree: {}", self.degree)
    }

    /// Zeichenebenen in Zeichenreihenfolge, mit Farben und Größen aus den Optionen.
    pub fn layers(&self) -> Vec<SceneLayer<'_>> {
        let opts = &self.options;
        let mut layers = vec![
            SceneLayer::Markers {
                points: &self.untoggled,
                radius: opts.marker_radius,
                color: opts.untoggled_color,
            },
            SceneLayer::Markers {
                points: &self.toggled,
                radius: opts.marker_radius,
                color: opts.toggled_color,
            },
            SceneLayer::Markers {
                points: &self.user_points,
                radius: opts.marker_radius,
                color: opts.user_point_color,
            },
        ];

        if let Some(curve) = self.curve.as_deref().filter(|c| c.len() >= 2) {
            layers.push(SceneLayer::Polyline {
                points: curve,
                width: opts.curve_line_width,
                color: opts.curve_color,
            });
        }

        layers.push(SceneLayer::Label {
            text: self.degree_label(),
            color: opts.text_color,
        });
        layers
    }
}

/// Eine Zeichenebene der Szene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneLayer<'a> {
    /// Gefüllte Kreise um jeden Punkt
    Markers {
        points: &'a [Point],
        radius: f32,
        color: [f32; 4],
    },
    /// Verbundene Linie durch die Punkte
    Polyline {
        points: &'a [Point],
        width: f32,
        color: [f32; 4],
    },
    /// Textanzeige
    Label { text: String, color: [f32; 4] },
}

impl SceneLayer<'_> {
    /// Anzahl gezeichneter Elemente.
    pub fn element_count(&self) -> usize {
        match self {
            SceneLayer::Markers { points, .. } | SceneLayer::Polyline { points, .. } => {
                points.len()
            }
            SceneLayer::Label { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::{CURVE_COLOR, CURVE_LINE_WIDTH, TOGGLED_COLOR, USER_POINT_COLOR};

    fn scene(curve: Option<Vec<Point>>) -> RenderScene {
        RenderScene {
            display_size: DisplaySize::new(100, 100),
            untoggled: vec![Point::new(5, 5)],
            toggled: vec![Point::new(10, 100), Point::new(50, 60)],
            user_points: vec![Point::new(90, 100)],
            curve,
            degree: Degree::new(2),
            options: EditorOptions::default(),
        }
    }

    #[test]
    fn layers_without_curve_are_markers_and_label() {
        let scene = scene(None);
        let layers = scene.layers();

        assert_eq!(layers.len(), 4);
        assert!(matches!(
            layers[1],
            SceneLayer::Markers { points, color, .. } if points.len() == 2 && color == TOGGLED_COLOR
        ));
        assert!(matches!(
            layers[2],
            SceneLayer::Markers { color, .. } if color == USER_POINT_COLOR
        ));
        assert_eq!(
            layers[3],
            SceneLayer::Label {
                text: "Degree: 2".to_string(),
                color: scene.options.text_color,
            }
        );
    }

    #[test]
    fn curve_layer_uses_configured_width_and_color() {
        let scene = scene(Some(vec![Point::new(0, 0), Point::new(100, 50)]));
        let layers = scene.layers();

        assert_eq!(layers.len(), 5);
        assert_eq!(
            layers[3],
            SceneLayer::Polyline {
                points: &[Point::new(0, 0), Point::new(100, 50)],
                width: CURVE_LINE_WIDTH,
                color: CURVE_COLOR,
            }
        );
        assert_eq!(layers[3].element_count(), 2);
    }

    #[test]
    fn single_sample_curve_is_not_drawn() {
        let scene = scene(Some(vec![Point::new(0, 0)]));
        assert!(!scene.has_curve());
        assert_eq!(scene.layers().len(), 4);
    }
}
