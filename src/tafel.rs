//! Tafel analysis diagnostics.
//!
//! The Tafel slope is the decade-scaling coefficient of a branch in the
//! high-overpotential regime, reported in volts per decade of current
//! density. It is independent of the evaluator and used on its own as a
//! kinetic diagnostic.

use crate::butler_volmer::constants::{DECADE, F, R};

/// Tafel slope [V/decade] for one branch of the reaction.
///
/// slope = 2.303 * R * T / (alpha * n * F)
///
/// Zero or out-of-domain inputs are rejected with an error rather than
/// propagated as infinities.
pub fn tafel_slope(alpha: f64, n: u32, temperature: f64) -> Result<f64, String> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(format!("alpha = {} is out of bounds (0, 1]", alpha));
    }
    if n < 1 {
        return Err(format!("n = {} must be at least 1", n));
    }
    if temperature.is_nan() || temperature <= 0.0 {
        return Err(format!("temperature = {} K must be positive", temperature));
    }
    Ok(DECADE * R * temperature / (alpha * f64::from(n) * F))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn known_value_at_room_temperature() {
        // 2.303 * 8.314 * 298.15 / (0.5 * 96485.3329) ~= 0.1183 V/dec
        let slope = tafel_slope(0.5, 1, 298.15).unwrap();
        assert_relative_eq!(slope, 0.1183, epsilon = 1e-4);
    }

    #[test]
    fn slope_decreases_with_alpha() {
        let low = tafel_slope(0.2, 1, 300.0).unwrap();
        let high = tafel_slope(0.8, 1, 300.0).unwrap();
        assert!(high < low);
    }

    #[test]
    fn slope_decreases_with_electron_count() {
        let one = tafel_slope(0.5, 1, 300.0).unwrap();
        let three = tafel_slope(0.5, 3, 300.0).unwrap();
        assert_relative_eq!(three, one / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn slope_increases_with_temperature() {
        let cold = tafel_slope(0.5, 1, 250.0).unwrap();
        let hot = tafel_slope(0.5, 1, 900.0).unwrap();
        assert!(hot > cold);
    }

    #[test]
    fn rejects_out_of_domain_alpha() {
        assert!(tafel_slope(0.0, 1, 300.0).is_err());
        assert!(tafel_slope(-0.5, 1, 300.0).is_err());
        assert!(tafel_slope(1.5, 1, 300.0).is_err());
        assert!(tafel_slope(f64::NAN, 1, 300.0).is_err());
    }

    #[test]
    fn rejects_zero_electrons() {
        assert!(tafel_slope(0.5, 0, 300.0).is_err());
    }

    #[test]
    fn rejects_non_positive_temperature() {
        assert!(tafel_slope(0.5, 1, 0.0).is_err());
        assert!(tafel_slope(0.5, 1, -300.0).is_err());
    }

    #[test]
    fn alpha_of_one_is_valid() {
        assert!(tafel_slope(1.0, 1, 300.0).is_ok());
    }
}
