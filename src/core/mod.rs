//! Core-Domänentypen: Punkte, Klassifikation, Polynomgrad, Fit und Formatierung.

pub mod degree;
pub mod detection;
pub mod hit_test;
pub mod normalize;
/// Punkt-Sammlungen und Klick-Übergänge
pub mod point_sets;
pub mod poly_format;
pub mod polyfit;

/// Punkt in Anzeige-Koordinaten (ganzzahlige Pixel, Ursprung oben links).
pub type Point = glam::IVec2;

pub use degree::Degree;
pub use detection::{detect_points, detect_points_from_file, DetectedPoints, DetectionParams};
pub use hit_test::HitTester;
pub use normalize::{DisplaySize, NormalizedSpace};
pub use point_sets::{PointCategory, PointSets, ToggleOutcome};
pub use poly_format::format_polynomial;
pub use polyfit::{fit_active_points, least_squares, Polynomial, PolynomialFit};
