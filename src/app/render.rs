//! Schnittstelle zum Render-Kollaborateur.

use crate::shared::{RenderScene, SceneLayer};

/// Empfängt pro Frame eine fertige RenderScene.
pub trait RenderSink {
    /// Zeichnet (oder verarbeitet anderweitig) die Szene eines Frames.
    fn render(&mut self, scene: &RenderScene) -> anyhow::Result<()>;
}

/// Renderer ohne Fenster: schreibt pro Frame eine Zusammenfassung ins Log.
#[derive(Debug, Default)]
pub struct LogRenderSink {
    frames: u64,
    elements: u64,
}

impl LogRenderSink {
    /// Anzahl bisher verarbeiteter Frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Summe aller gezeichneten Elemente über alle Frames.
    pub fn elements(&self) -> u64 {
        self.elements
    }
}

impl RenderSink for LogRenderSink {
    fn render(&mut self, scene: &RenderScene) -> anyhow::Result<()> {
        self.frames += 1;
        for layer in scene.layers() {
            self.elements += layer.element_count() as u64;
            match &layer {
                SceneLayer::Markers {
                    points,
                    radius,
                    color,
                } => log::trace!("  Marker x{} r={} rgba={:?}", points.len(), radius, color),
                SceneLayer::Polyline {
                    points,
                    width,
                    color,
                } => log::trace!("  Linie x{} w={} rgba={:?}", points.len(), width, color),
                SceneLayer::Label { text, color } => {
                    log::trace!("  Text '{}' rgba={:?}", text, color)
                }
            }
        }
        log::debug!(
            "Frame {}: {} erkannt, {} aktiv, {} manuell, Kurve: {}, {}",
            self.frames,
            scene.untoggled.len(),
            scene.toggled.len(),
            scene.user_points.len(),
            scene.curve.as_ref().map_or(0, Vec::len),
            scene.degree_label()
        );
        Ok(())
    }
}
