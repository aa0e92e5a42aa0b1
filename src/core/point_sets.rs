//! Klassifizierte Punkt-Sammlungen und ihre Übergänge.
//!
//! Drei Kategorien: erkannte, noch nicht aktive Punkte (`untoggled`),
//! aktivierte Punkte (`toggled`) und manuell hinzugefügte Punkte
//! (`user_added`). `untoggled` und `toggled` sind stets disjunkt.

use indexmap::IndexSet;

use super::{HitTester, Point};

/// Kategorie eines Punkts, z.B. für Marker-Farben.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointCategory {
    /// Erkannt, aber nicht aktiv
    Untoggled,
    /// Vom Bediener aktiviert
    Toggled,
    /// Manuell hinzugefügt
    UserAdded,
}

/// Ergebnis eines Klicks auf die Punkt-Sammlungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Manuell hinzugefügter Punkt wurde entfernt
    RemovedUserPoint(Point),
    /// Erkannter Punkt wurde aktiviert
    Activated(Point),
    /// Aktiver Punkt wurde zurück in die erkannten Punkte verschoben
    Deactivated(Point),
    /// Kein Punkt innerhalb der Toleranz
    NoMatch,
}

/// Besitzt die drei Punkt-Sammlungen.
///
/// Sets sind `IndexSet`s, damit die Iterationsreihenfolge (und damit die
/// Treffer-Priorität) deterministisch der Einfügereihenfolge folgt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSets {
    untoggled: IndexSet<Point>,
    toggled: IndexSet<Point>,
    user_added: Vec<Point>,
}

impl PointSets {
    /// Erstellt die Sammlungen aus den erkannten Startpunkten.
    /// Doppelte Positionen werden zusammengefasst.
    pub fn new(detected: impl IntoIterator<Item = Point>) -> Self {
        Self {
            untoggled: detected.into_iter().collect(),
            toggled: IndexSet::new(),
            user_added: Vec::new(),
        }
    }

    /// Erkannte, nicht aktive Punkte.
    pub fn untoggled(&self) -> &IndexSet<Point> {
        &self.untoggled
    }

    /// Aktivierte Punkte.
    pub fn toggled(&self) -> &IndexSet<Point> {
        &self.toggled
    }

    /// Manuell hinzugefügte Punkte in Einfügereihenfolge.
    pub fn user_added(&self) -> &[Point] {
        &self.user_added
    }

    /// Aktive Punktmenge für den Fit: `toggled` gefolgt von `user_added`.
    pub fn active_points(&self) -> Vec<Point> {
        self.toggled
            .iter()
            .chain(self.user_added.iter())
            .copied()
            .collect()
    }

    /// Anzahl der aktiven Punkte.
    pub fn active_count(&self) -> usize {
        self.toggled.len() + self.user_added.len()
    }

    /// Kategorie eines Punkts, falls er in `untoggled` oder `toggled` liegt.
    pub fn category_of(&self, point: Point) -> Option<PointCategory> {
        if self.untoggled.contains(&point) {
            Some(PointCategory::Untoggled)
        } else if self.toggled.contains(&point) {
            Some(PointCategory::Toggled)
        } else if self.user_added.contains(&point) {
            Some(PointCategory::UserAdded)
        } else {
            None
        }
    }

    /// Klick auf `pos` in strenger Prioritätsreihenfolge auflösen.
    ///
    /// 1. Erster manueller Punkt in Toleranz wird entfernt.
    /// 2. Sonst: erster erkannter Punkt in Toleranz wird aktiviert.
    /// 3. Sonst: erster aktiver Punkt in Toleranz wird deaktiviert.
    ///
    /// Pro Aufruf wird höchstens eine Sammlung verändert.
    pub fn toggle_at(&mut self, pos: Point, hit_tester: &HitTester) -> ToggleOutcome {
        if let Some(index) = hit_tester.first_hit(&self.user_added, pos) {
            let point = self.user_added.remove(index);
            return ToggleOutcome::RemovedUserPoint(point);
        }

        if let Some(index) = hit_tester.first_hit(&self.untoggled, pos) {
            if let Some(point) = self.untoggled.shift_remove_index(index) {
                self.toggled.insert(point);
                return ToggleOutcome::Activated(point);
            }
        }

        if let Some(index) = hit_tester.first_hit(&self.toggled, pos) {
            if let Some(point) = self.toggled.shift_remove_index(index) {
                self.untoggled.insert(point);
                return ToggleOutcome::Deactivated(point);
            }
        }

        ToggleOutcome::NoMatch
    }

    /// Hängt einen manuellen Punkt ohne Toleranzprüfung und ohne Dedup an.
    pub fn add_user_point(&mut self, pos: Point) {
        self.user_added.push(pos);
    }
}
