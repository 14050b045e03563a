use pyo3::prelude::*;

mod locate;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // a host application may already own the logger
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init();

    locate::register(m)?;
    Ok(())
}
