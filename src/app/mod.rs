//! Application-Layer: Controller, State, Events, Use-Cases und Hauptschleife.

pub mod controller;
pub mod events;
pub mod frame_loop;
pub mod handlers;
pub mod input;
mod intent_mapping;
pub mod render;
pub mod render_scene;
pub mod report;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Punkte, Grad, Fit).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame_loop::{FrameLoop, FrameStats, FrameTicker};
pub use input::{EventScript, InputEvent, InputSource, Key, PointerButton, ScriptedInput};
pub use render::{LogRenderSink, RenderSink};
pub use render_scene::build as build_render_scene;
pub use report::CoefficientReporter;
pub use state::AppState;
