use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::butler_volmer::params::Parameters;
use crate::butler_volmer::run;

#[pyfunction]
#[pyo3(signature = (eta, i0, alpha_a, alpha_c, n, temperature, ilim=None))]
fn butler_volmer_run<'py>(
    py: Python<'py>,
    eta: PyReadonlyArray1<'py, f64>,
    i0: f64,
    alpha_a: f64,
    alpha_c: f64,
    n: u32,
    temperature: f64,
    ilim: Option<f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let p = Parameters::new(i0, alpha_a, alpha_c, n, temperature, ilim)
        .map_err(pyo3::exceptions::PyValueError::new_err)?;

    let eta_slice = eta.as_slice()?;
    let result = run::run(&p, eta_slice);

    let dict = PyDict::new(py);
    dict.set_item("eta", PyArray1::from_vec(py, result.eta))?;
    dict.set_item("net", PyArray1::from_vec(py, result.net))?;
    dict.set_item("anodic", PyArray1::from_vec(py, result.anodic))?;
    dict.set_item("cathodic", PyArray1::from_vec(py, result.cathodic))?;
    Ok(dict)
}

#[pyfunction]
#[pyo3(signature = (eta, i0, alpha_a, alpha_c, n, temperature, ilim=None))]
fn butler_volmer_point<'py>(
    py: Python<'py>,
    eta: f64,
    i0: f64,
    alpha_a: f64,
    alpha_c: f64,
    n: u32,
    temperature: f64,
    ilim: Option<f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let p = Parameters::new(i0, alpha_a, alpha_c, n, temperature, ilim)
        .map_err(pyo3::exceptions::PyValueError::new_err)?;

    let c = run::point(&p, eta);

    let dict = PyDict::new(py);
    dict.set_item("eta", c.eta)?;
    dict.set_item("net", c.net)?;
    dict.set_item("anodic", c.anodic)?;
    dict.set_item("cathodic", c.cathodic)?;
    Ok(dict)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = parent.py();
    let m = PyModule::new(py, "butler_volmer")?;
    m.add_function(wrap_pyfunction!(butler_volmer_run, &m)?)?;
    m.add_function(wrap_pyfunction!(butler_volmer_point, &m)?)?;
    parent.add_submodule(&m)?;
    py.import("sys")?
        .getattr("modules")?
        .set_item("electrokinetics._core.butler_volmer", &m)?;
    Ok(())
}
