//! Mapping von Input-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PrimaryClickRequested { pos } => vec![AppCommand::TogglePointAt { pos }],
        AppIntent::SecondaryClickRequested { pos } => vec![AppCommand::AddUserPoint { pos }],
        AppIntent::DegreeIncreaseRequested => vec![AppCommand::IncrementDegree],
        AppIntent::DegreeDecreaseRequested => vec![AppCommand::DecrementDegree],
        AppIntent::FrameAdvanced => vec![AppCommand::RefreshFit],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
