/// electrokinetics: Butler-Volmer electrode kinetics in Rust.
///
/// Computes anodic, cathodic, and net current density over an
/// overpotential sweep, with optional mass-transport limiting on the
/// cathodic branch and Tafel slope diagnostics.
pub mod butler_volmer;
pub mod sweep;
pub mod tafel;

#[cfg(feature = "python")]
mod pyo3_bindings;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_bindings::register(m)?;
    Ok(())
}
