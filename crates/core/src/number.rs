//! Numeric helpers shared by scoring and message rendering.
//!
//! Risk percentages and recommendation texts are consumed by clients that were
//! built against the first version of this service, so rounding and the
//! textual form of floats follow its conventions exactly:
//! - decimal rounding is correctly rounded on the exact binary value, ties to even
//! - integer rounding of model output is ties-to-even
//! - floats render with the shortest round-trip digits, always with a fractional
//!   part or an exponent (`3.0`, `0.6`, `1e+16`, `1e-05`)

use core::fmt;

/// Round `value` to `places` decimal digits.
///
/// Rounds the exact binary value, so `2.675` (stored as `2.67499999...`)
/// becomes `2.67`, and exact ties go to the even digit.
pub fn round_to_places(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // The formatter is correctly rounded; parsing its output cannot fail for a finite value.
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Round to the nearest integer, ties to even (`0.5 -> 0`, `1.5 -> 2`, `2.5 -> 2`).
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Display adapter rendering an `f64` the way the service has always printed
/// floats inside recommendation text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PyFloat(pub f64);

impl fmt::Display for PyFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }

        let abs = v.abs();
        if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
            let sci = format!("{v:e}");
            let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            return write!(f, "{mantissa}e{sign}{:02}", exponent.abs());
        }

        if v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to_places(47.448979591836735, 2), 47.45);
        assert_eq!(round_to_places(3.571428571428571, 2), 3.57);
        assert_eq!(round_to_places(100.0, 2), 100.0);
        assert_eq!(round_to_places(0.0, 2), 0.0);
    }

    #[test]
    fn decimal_rounding_uses_exact_binary_value() {
        // 2.675 is stored just below the tie.
        assert_eq!(round_to_places(2.675, 2), 2.67);
        // 0.125 is an exact tie and goes to the even digit.
        assert_eq!(round_to_places(0.125, 2), 0.12);
        assert_eq!(round_to_places(0.375, 2), 0.38);
    }

    #[test]
    fn integer_rounding_is_ties_to_even() {
        assert_eq!(round_half_even(0.5), 0.0);
        assert_eq!(round_half_even(1.5), 2.0);
        assert_eq!(round_half_even(2.5), 2.0);
        assert_eq!(round_half_even(-2.5), -2.0);
        assert_eq!(round_half_even(999.6), 1000.0);
    }

    #[test]
    fn renders_floats_like_the_legacy_service() {
        assert_eq!(PyFloat(3.0).to_string(), "3.0");
        assert_eq!(PyFloat(0.6).to_string(), "0.6");
        assert_eq!(PyFloat(0.0).to_string(), "0.0");
        assert_eq!(PyFloat(-150.0).to_string(), "-150.0");
        assert_eq!(PyFloat(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(PyFloat(0.0001).to_string(), "0.0001");
        assert_eq!(PyFloat(1e16).to_string(), "1e+16");
        assert_eq!(PyFloat(1.5e20).to_string(), "1.5e+20");
        assert_eq!(PyFloat(1e-5).to_string(), "1e-05");
        assert_eq!(PyFloat(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(PyFloat(f64::NAN).to_string(), "nan");
        assert_eq!(PyFloat(f64::NEG_INFINITY).to_string(), "-inf");
    }

    proptest! {
        #[test]
        fn rounded_values_have_at_most_two_decimals(x in -1.0e6f64..1.0e6f64) {
            let r = round_to_places(x, 2);
            let text = format!("{r}");
            let decimals = text.split_once('.').map(|(_, d)| d.len()).unwrap_or(0);
            prop_assert!(decimals <= 2, "{} rendered as {}", r, text);
            prop_assert!((r - x).abs() <= 0.005 + 1e-9);
        }
    }
}
