//! Curve Point Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CoefficientReporter, EventScript, FrameLoop,
    FrameStats, InputEvent, InputSource, Key, LogRenderSink, PointerButton, RenderSink,
    ScriptedInput,
};
pub use core::{
    detect_points, detect_points_from_file, fit_active_points, format_polynomial, Degree,
    DetectedPoints, DetectionParams, DisplaySize, HitTester, NormalizedSpace, Point, PointSets,
    PolynomialFit, ToggleOutcome,
};
pub use shared::{EditorOptions, RenderScene, SceneLayer};
