//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Render-Kollaborateur geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{CLICK_TOLERANCE, MARKER_RADIUS};
pub use render_scene::{RenderScene, SceneLayer};
