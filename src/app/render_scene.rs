//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Kurve wird aus dem Anzeige-Fit über die volle Anzeigebreite abgetastet.
pub fn build(state: &AppState) -> RenderScene {
    let curve = state.fit.as_ref().map(|fit| {
        fit.sample_display_curve(state.display_size.width, state.options.curve_samples)
    });

    RenderScene {
        display_size: state.display_size,
        untoggled: state.points.untoggled().iter().copied().collect(),
        toggled: state.points.toggled().iter().copied().collect(),
        user_points: state.points.user_added().to_vec(),
        curve,
        degree: state.degree,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::use_cases::fit::refresh_fit;
    use crate::app::AppState;
    use crate::core::{DetectedPoints, DisplaySize, HitTester, Point};
    use crate::shared::EditorOptions;

    fn state_with_parabola() -> AppState {
        let detected = DetectedPoints::from_points(
            vec![Point::new(10, 100), Point::new(50, 60), Point::new(90, 100)],
            DisplaySize::new(100, 100),
        );
        AppState::new(detected, EditorOptions::default())
    }

    #[test]
    fn scene_without_fit_has_no_curve() {
        let state = state_with_parabola();
        let scene = build(&state);

        assert_eq!(scene.untoggled.len(), 3);
        assert!(scene.toggled.is_empty());
        assert!(scene.curve.is_none());
        assert!(!scene.has_curve());
        assert_eq!(scene.degree_label(), "Degree: 2");
    }

    #[test]
    fn scene_with_fit_contains_sampled_curve() {
        let mut state = state_with_parabola();
        let tester = HitTester::new(1.0);
        for p in [Point::new(10, 100), Point::new(50, 60), Point::new(90, 100)] {
            state.points.toggle_at(p, &tester);
        }
        refresh_fit(&mut state);

        let scene = build(&state);

        assert_eq!(scene.toggled.len(), 3);
        let curve = scene.curve.as_ref().expect("Kurve erwartet");
        assert_eq!(curve.len(), state.options.curve_samples);
        assert_eq!(curve.first().map(|p| p.x), Some(0));
        assert_eq!(curve.last().map(|p| p.x), Some(100));
    }
}
