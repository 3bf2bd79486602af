#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
use crate::tafel;

#[cfg(feature = "python")]
#[pyfunction]
fn rust_tafel_slope(alpha: f64, n: u32, temperature: f64) -> PyResult<f64> {
    tafel::tafel_slope(alpha, n, temperature).map_err(pyo3::exceptions::PyValueError::new_err)
}

#[cfg(feature = "python")]
pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "tafel")?;
    m.add_function(wrap_pyfunction!(rust_tafel_slope, &m)?)?;
    parent.add_submodule(&m)?;
    // Register in sys.modules so `from electrokinetics._core.tafel import ...` works
    py.import("sys")?
        .getattr("modules")?
        .set_item("electrokinetics._core.tafel", &m)?;
    Ok(())
}
