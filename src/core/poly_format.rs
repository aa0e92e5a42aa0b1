//! Lesbare Darstellung von Polynom-Koeffizienten.

/// Nachkommastellen, auf die Koeffizienten vor der Ausgabe gerundet werden.
pub const COEFFICIENT_DECIMALS: i32 = 10;

/// Rundet `value` auf `decimals` Nachkommastellen.
/// Werte, deren Skalierung überläuft, bleiben unverändert.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Festkomma-Darstellung ohne abschließende Nullen und ohne abschließenden Punkt.
fn fixed_point(value: f64) -> String {
    let text = format!("{:.*}", COEFFICIENT_DECIMALS as usize, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Formatiert Koeffizienten (höchste Potenz zuerst) als Polynom-Ausdruck.
///
/// Die Terme erscheinen in aufsteigender Potenz, z.B. `-3 -0.03x^2`.
/// Null-Terme entfallen, ein Koeffizient 1 bzw. -1 wird ab Potenz 1 implizit
/// geschrieben. Sind alle Koeffizienten null, lautet die Ausgabe `0`.
///
/// Erwartet endliche Koeffizienten, wie sie `least_squares` liefert.
pub fn format_polynomial(highest_first: &[f64]) -> String {
    debug_assert!(
        highest_first.iter().all(|c| c.is_finite()),
        "Koeffizienten muessen endlich sein: {highest_first:?}"
    );

    let mut terms: Vec<String> = Vec::new();

    for (power, &raw) in highest_first.iter().rev().enumerate() {
        let c = round_decimals(raw, COEFFICIENT_DECIMALS);
        if c == 0.0 {
            continue;
        }

        let mut c_str = fixed_point(c);
        if power > 0 {
            if c_str == "1" {
                c_str.clear();
            } else if c_str == "-1" {
                c_str = "-".to_string();
            }
        }

        let term = match power {
            0 => c_str,
            1 => format!("{c_str}x"),
            _ => format!("{c_str}x^{power}"),
        };

        if c > 0.0 && !terms.is_empty() {
            terms.push(format!("+{term}"));
        } else {
            terms.push(term);
        }
    }

    if terms.is_empty() {
        return "0".to_string();
    }
    terms.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_linear_term_renders_as_bare_x() {
        assert_eq!(format_polynomial(&[0.0, 1.0, 0.0]), "x");
    }

    #[test]
    fn all_zero_renders_as_zero() {
        assert_eq!(format_polynomial(&[0.0, 0.0, 0.0]), "0");
        assert_eq!(format_polynomial(&[]), "0");
    }

    #[test]
    fn terms_appear_in_ascending_power_with_signs() {
        assert_eq!(format_polynomial(&[1.0, -1.0, 2.0]), "2 -x +x^2");
        assert_eq!(format_polynomial(&[-0.045, 0.0, 3.0]), "3 -0.045x^2");
        assert_eq!(format_polynomial(&[-3.0, 1.0]), "1 -3x");
    }

    #[test]
    fn downward_parabola_in_normalized_space() {
        assert_eq!(format_polynomial(&[-0.03, 0.0, -3.0]), "-3 -0.03x^2");
    }

    #[test]
    fn leading_term_has_no_plus_prefix() {
        assert_eq!(format_polynomial(&[1.0, 0.0, 0.0]), "x^2");
        assert_eq!(format_polynomial(&[2.5, 0.0]), "2.5x");
    }

    #[test]
    fn minus_one_constant_keeps_its_digit() {
        assert_eq!(format_polynomial(&[-1.0, -1.0]), "-1 -x");
    }

    #[test]
    fn coefficients_are_rounded_to_ten_decimals() {
        assert_eq!(format_polynomial(&[1.0 / 3.0, 0.0]), "0.3333333333x");
        assert_eq!(format_polynomial(&[1e-12, 4.0]), "4");
        assert_eq!(format_polynomial(&[-1e-12, 0.0]), "0");
        assert_eq!(format_polynomial(&[1.00000000001, 0.0]), "x");
    }

    #[test]
    fn integral_values_drop_the_decimal_point() {
        assert_eq!(format_polynomial(&[10.0, 100.0]), "100 +10x");
    }

    #[test]
    fn huge_values_do_not_overflow_rounding() {
        assert_eq!(round_decimals(1e300, COEFFICIENT_DECIMALS), 1e300);
        assert!(format_polynomial(&[1e300]).starts_with("1000"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Koeffizienten muessen endlich sein")]
    fn non_finite_coefficients_are_rejected_in_debug_builds() {
        format_polynomial(&[f64::NAN, 1.0]);
    }
}
