//! Begrenzter Polynomgrad.

/// Polynomgrad im Bereich `MIN..=MAX`.
///
/// Änderungen laufen ausschließlich über `increment`/`decrement`,
/// beide begrenzen still an den Rändern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(u8);

impl Degree {
    /// Kleinster erlaubter Grad.
    pub const MIN: u8 = 1;
    /// Größter erlaubter Grad.
    pub const MAX: u8 = 10;

    /// Erstellt einen Grad, Werte außerhalb des Bereichs werden begrenzt.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Aktueller Grad.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Anzahl der Koeffizienten eines Polynoms dieses Grads.
    pub fn coefficient_count(self) -> usize {
        self.0 as usize + 1
    }

    /// Erhöht den Grad um 1. Gibt `false` zurück, wenn bereits am Maximum.
    pub fn increment(&mut self) -> bool {
        if self.0 < Self::MAX {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Verringert den Grad um 1. Gibt `false` zurück, wenn bereits am Minimum.
    pub fn decrement(&mut self) -> bool {
        if self.0 > Self::MIN {
            self.0 -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self(2)
    }
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_range() {
        assert_eq!(Degree::new(0).value(), 1);
        assert_eq!(Degree::new(42).value(), 10);
        assert_eq!(Degree::new(4).value(), 4);
    }

    #[test]
    fn increment_stops_at_max() {
        let mut degree = Degree::new(9);
        assert!(degree.increment());
        assert!(!degree.increment());
        assert_eq!(degree.value(), Degree::MAX);
    }

    #[test]
    fn decrement_stops_at_min() {
        let mut degree = Degree::new(2);
        assert!(degree.decrement());
        assert!(!degree.decrement());
        assert_eq!(degree.value(), Degree::MIN);
    }

    #[test]
    fn mixed_sequence_stays_in_range() {
        let mut degree = Degree::default();
        for step in 0..200u32 {
            if (step * 7 + step / 3) % 3 == 0 {
                degree.decrement();
            } else {
                degree.increment();
            }
            assert!((Degree::MIN..=Degree::MAX).contains(&degree.value()));
        }
    }
}
