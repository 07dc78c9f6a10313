use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::analyzer;

/// Full stasjonsanalyse fra JSON-strenger. Ugyldige inndata gir ValueError.
#[pyfunction]
#[pyo3(signature = (samples_json, meta_json, cfg_json=None))]
fn analyze_station_json(
    samples_json: &str,
    meta_json: &str,
    cfg_json: Option<&str>,
) -> PyResult<String> {
    analyzer::analyze_station_json(samples_json, meta_json, cfg_json)
        .map_err(|e| PyErr::new::<PyValueError, _>(e))
}

/// Kun sprangsjiktdeteksjon; JSON `null` når ingenting påvises.
#[pyfunction]
#[pyo3(signature = (samples_json, cfg_json=None))]
fn detect_thermocline_json(samples_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    analyzer::detect_thermocline_json(samples_json, cfg_json)
        .map_err(|e| PyErr::new::<PyValueError, _>(e))
}

#[pymodule]
fn abysseye_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_station_json, m)?)?;
    m.add_function(wrap_pyfunction!(detect_thermocline_json, m)?)?;
    Ok(())
}
