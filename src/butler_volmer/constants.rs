/// Butler-Volmer numerical constants.
///
/// Fixed physical values and numerical safeguards used throughout the
/// kinetics model. None of these are configurable at runtime.

// -- Physical constants --

/// Universal gas constant [J/(mol K)].
pub const R: f64 = 8.314;

/// Faraday constant [C/mol].
pub const F: f64 = 96485.3329;

/// Natural-log to base-10 factor in the Tafel relation [-].
pub const DECADE: f64 = 2.303;

// -- Numerical safeguards --

/// Maximum magnitude of the exponential argument in either branch.
///
/// `f64::exp` overflows to infinity near 709.78. Clamping the argument
/// at 700 keeps both branch currents finite (ceiling around 1e304) for
/// extreme combinations of overpotential, electron count, and
/// temperature, instead of propagating IEEE infinities.
pub const MAX_EXP_ARG: f64 = 700.0;
