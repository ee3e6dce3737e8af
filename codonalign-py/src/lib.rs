use pyo3::prelude::*;

mod align;
mod report;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    align::register(m)?;
    report::register(m)?;
    Ok(())
}
