//! Input-Kollaborateur: diskrete Eingabe-Events pro Frame.
//!
//! Die Hauptschleife holt pro Frame alle anstehenden Events ab und
//! übersetzt sie in `AppIntent`s.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::AppIntent;
use crate::core::Point;

/// Maustaste eines Klick-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Linke Taste
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste (ohne Funktion)
    Middle,
}

/// Taste eines Tastatur-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Pfeil hoch: Grad erhöhen
    Up,
    /// Pfeil runter: Grad verringern
    Down,
    /// Jede andere Taste (ohne Funktion)
    Other,
}

/// Ein diskretes Eingabe-Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Fenster schließen / Beenden
    Quit,
    /// Maustaste gedrückt an Anzeige-Position `[x, y]`
    PointerPressed { button: PointerButton, pos: [i32; 2] },
    /// Taste gedrückt
    KeyPressed { key: Key },
}

/// Übersetzt ein Eingabe-Event in einen Intent (oder ignoriert es).
pub fn map_input_event(event: InputEvent) -> Option<AppIntent> {
    match event {
        InputEvent::Quit => Some(AppIntent::ExitRequested),
        InputEvent::PointerPressed { button, pos } => {
            let pos = Point::from_array(pos);
            match button {
                PointerButton::Primary => Some(AppIntent::PrimaryClickRequested { pos }),
                PointerButton::Secondary => Some(AppIntent::SecondaryClickRequested { pos }),
                PointerButton::Middle => None,
            }
        }
        InputEvent::KeyPressed { key } => match key {
            Key::Up => Some(AppIntent::DegreeIncreaseRequested),
            Key::Down => Some(AppIntent::DegreeDecreaseRequested),
            Key::Other => None,
        },
    }
}

/// Liefert pro Frame die anstehenden Eingabe-Events.
pub trait InputSource {
    /// Holt alle seit dem letzten Aufruf angefallenen Events ab.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Skript aus Frames mit Events, z.B. aus einer JSON-Datei.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    /// Events je Frame, in Frame-Reihenfolge
    pub frames: Vec<Vec<InputEvent>>,
}

/// Spielt ein `EventScript` Frame für Frame ab.
///
/// Ist das Skript erschöpft, wird ein `Quit` geliefert.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    /// Erstellt eine Eingabequelle aus einem Skript.
    pub fn new(script: EventScript) -> Self {
        Self {
            frames: script.frames.into(),
        }
    }

    /// Parst ein Skript aus JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let script: EventScript =
            serde_json::from_str(json).context("Event-Skript ist kein gueltiges JSON")?;
        Ok(Self::new(script))
    }

    /// Lädt ein Skript aus einer JSON-Datei.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Event-Skript nicht lesbar: {}", path.display()))?;
        let input = Self::from_json(&content)
            .with_context(|| format!("Event-Skript fehlerhaft: {}", path.display()))?;
        log::info!(
            "Event-Skript geladen: {} Frames aus {}",
            input.remaining_frames(),
            path.display()
        );
        Ok(input)
    }

    /// Anzahl noch nicht abgespielter Frames.
    pub fn remaining_frames(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
