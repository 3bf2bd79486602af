#[cfg(feature = "python")]
mod butler_volmer;
#[cfg(feature = "python")]
mod tafel;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Register a submodule in sys.modules so `from parent.child import ...` works.
#[cfg(feature = "python")]
fn register_submodule(
    py: Python<'_>,
    parent_name: &str,
    child: &Bound<'_, PyModule>,
) -> PyResult<()> {
    let child_name = child.name()?;
    let full_name = format!("{}.{}", parent_name, child_name);
    let sys = py.import("sys")?;
    let modules = sys.getattr("modules")?;
    modules.set_item(full_name, child)?;
    Ok(())
}

/// Register the _core Python module.
#[cfg(feature = "python")]
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    let parent_name = m.name()?.to_string();

    m.add_function(wrap_pyfunction!(rust_version, m)?)?;

    butler_volmer::register(m)?;
    tafel::register(m)?;

    // Register submodules in sys.modules for `from electrokinetics._core.X import ...`
    for name in &["butler_volmer", "tafel"] {
        let sub = m.getattr(*name)?;
        register_submodule(py, &parent_name, sub.downcast::<PyModule>()?)?;
    }

    Ok(())
}

#[cfg(feature = "python")]
#[pyfunction]
fn rust_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
