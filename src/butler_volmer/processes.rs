/// Butler-Volmer core process functions.
///
/// Pure functions implementing the two exponential branches and the
/// mass-transport correction. All inputs and outputs are f64.
use super::constants::{F, MAX_EXP_ARG, R};

/// Dimensionless exponential argument alpha * n * F * eta / (R * T),
/// clamped to +/- MAX_EXP_ARG so the branch currents stay finite.
fn exp_arg(alpha: f64, n: u32, temperature: f64, eta: f64) -> f64 {
    let arg = alpha * f64::from(n) * F * eta / (R * temperature);
    arg.clamp(-MAX_EXP_ARG, MAX_EXP_ARG)
}

/// Anodic (oxidation) branch current density [A/m^2].
///
/// ia = i0 * exp(alpha_a * n * F * eta / (R * T))
///
/// Strictly positive for i0 > 0 and strictly increasing in eta inside
/// the clamp window.
pub fn anodic_current(eta: f64, i0: f64, alpha_a: f64, n: u32, temperature: f64) -> f64 {
    i0 * exp_arg(alpha_a, n, temperature, eta).exp()
}

/// Cathodic (reduction) branch current density magnitude [A/m^2],
/// before any mass-transport limit.
///
/// ic = i0 * exp(-alpha_c * n * F * eta / (R * T))
///
/// Strictly positive for i0 > 0 and strictly decreasing in eta inside
/// the clamp window. The sign convention keeps this a magnitude; the
/// net current subtracts it.
pub fn cathodic_current(eta: f64, i0: f64, alpha_c: f64, n: u32, temperature: f64) -> f64 {
    i0 * exp_arg(alpha_c, n, temperature, -eta).exp()
}

/// Apply mass-transport saturation to an unlimited cathodic branch.
///
/// ic = ic_raw / (1 + ic_raw / ilim)
///
/// Monotone in ic_raw, bounded above by ilim, and converging to ic_raw
/// as ic_raw -> 0. Must be fed the raw branch value; capping ic_raw
/// first would distort the curve near saturation.
pub fn apply_transport_limit(ic_raw: f64, ilim: f64) -> f64 {
    ic_raw / (1.0 + ic_raw / ilim)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: assert two f64 values are close.
    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    // -- anodic_current --

    #[test]
    fn anodic_equals_i0_at_equilibrium() {
        assert_approx(anodic_current(0.0, 1.0, 0.5, 1, 300.0), 1.0, 1e-12);
        assert_approx(anodic_current(0.0, 3.7, 0.3, 2, 450.0), 3.7, 1e-12);
    }

    #[test]
    fn anodic_strictly_positive() {
        for eta in [-1.0, -0.5, 0.0, 0.5, 1.0] {
            assert!(anodic_current(eta, 0.01, 0.5, 1, 300.0) > 0.0);
        }
    }

    #[test]
    fn anodic_strictly_increasing_in_overpotential() {
        let mut prev = anodic_current(-1.0, 1.0, 0.5, 1, 300.0);
        for k in 1..=20 {
            let eta = -1.0 + 0.1 * k as f64;
            let ia = anodic_current(eta, 1.0, 0.5, 1, 300.0);
            assert!(ia > prev, "ia not increasing at eta = {eta}");
            prev = ia;
        }
    }

    #[test]
    fn anodic_finite_at_extreme_overpotential() {
        // 5 electrons at 200 K pushes the exponent far past the clamp
        let ia = anodic_current(1000.0, 100.0, 1.0, 5, 200.0);
        assert!(ia.is_finite());
        assert_eq!(ia, 100.0 * MAX_EXP_ARG.exp());
    }

    // -- cathodic_current --

    #[test]
    fn cathodic_equals_i0_at_equilibrium() {
        assert_approx(cathodic_current(0.0, 1.0, 0.5, 1, 300.0), 1.0, 1e-12);
    }

    #[test]
    fn cathodic_strictly_positive() {
        for eta in [-1.0, -0.5, 0.0, 0.5, 1.0] {
            assert!(cathodic_current(eta, 0.01, 0.5, 1, 300.0) > 0.0);
        }
    }

    #[test]
    fn cathodic_strictly_decreasing_in_overpotential() {
        let mut prev = cathodic_current(-1.0, 1.0, 0.5, 1, 300.0);
        for k in 1..=20 {
            let eta = -1.0 + 0.1 * k as f64;
            let ic = cathodic_current(eta, 1.0, 0.5, 1, 300.0);
            assert!(ic < prev, "ic not decreasing at eta = {eta}");
            prev = ic;
        }
    }

    #[test]
    fn cathodic_finite_at_extreme_overpotential() {
        let ic = cathodic_current(-1000.0, 100.0, 1.0, 5, 200.0);
        assert!(ic.is_finite());
        assert_eq!(ic, 100.0 * MAX_EXP_ARG.exp());
    }

    #[test]
    fn branches_mirror_for_equal_coefficients() {
        // With alpha_a = alpha_c, ia(eta) = ic(-eta)
        let ia = anodic_current(0.12, 2.0, 0.4, 2, 310.0);
        let ic = cathodic_current(-0.12, 2.0, 0.4, 2, 310.0);
        assert_approx(ia, ic, 1e-12 * ia);
    }

    #[test]
    fn zero_exchange_current_gives_zero_branches() {
        assert_eq!(anodic_current(0.3, 0.0, 0.5, 1, 300.0), 0.0);
        assert_eq!(cathodic_current(0.3, 0.0, 0.5, 1, 300.0), 0.0);
    }

    // -- apply_transport_limit --

    #[test]
    fn limit_reduces_magnitude() {
        let ic = apply_transport_limit(125.9, 1.0);
        assert!(ic < 125.9);
        assert!(ic < 1.0);
    }

    #[test]
    fn limit_bounds_output_below_ilim() {
        for raw in [0.1, 1.0, 10.0, 1e6] {
            assert!(apply_transport_limit(raw, 2.5) < 2.5);
        }
    }

    #[test]
    fn limit_saturates_toward_ilim() {
        assert_approx(apply_transport_limit(1e12, 1.0), 1.0, 1e-6);
    }

    #[test]
    fn limit_negligible_for_small_currents() {
        // ic_raw far below ilim passes through almost unchanged
        let raw = 1e-6;
        assert_approx(apply_transport_limit(raw, 10.0), raw, 1e-12);
    }
}
