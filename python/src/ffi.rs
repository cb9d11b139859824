//! ffi.rs
//! `PinEncryptor` class and helpers exposed to Python.
//!
//! Weak PINs come back as a JSON record with a rejection code, same as in Rust.
//! Misconfiguration raises `ValueError`; internal failures raise `RuntimeError`.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use pin_core::prelude::*;

fn to_py_err(e: ServiceError) -> PyErr {
    match e {
        ServiceError::Config(_) => PyValueError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

#[pyclass(name = "PinEncryptor", module = "rust_pin", frozen)]
pub struct PyPinEncryptor {
    inner: EncryptionService,
}

#[pymethods]
impl PyPinEncryptor {
    #[new]
    #[pyo3(signature = (subject_id=None, public_key_b64=None, reference_year=None))]
    fn new(
        subject_id: Option<String>,
        public_key_b64: Option<String>,
        reference_year: Option<i32>,
    ) -> PyResult<Self> {
        let mut settings = ServiceSettings::default();
        if let Some(subject_id) = subject_id {
            settings.subject_id = subject_id;
        }
        if let Some(public_key) = public_key_b64 {
            settings.public_key = public_key;
        }
        settings.reference_year = reference_year;

        let inner = EncryptionService::from_settings(&settings).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Screen, encode and encrypt `pin`; returns the JSON result record.
    fn encrypt(&self, py: Python<'_>, pin: &str) -> PyResult<String> {
        py.allow_threads(|| self.inner.process_json(pin))
            .map_err(to_py_err)
    }

    /// Result code of the weak-PIN rules alone (0 when accepted).
    fn classify(&self, pin: &str) -> u16 {
        self.inner.classify(pin).error_code().code()
    }

    fn version(&self) -> String {
        self.inner.version().to_string()
    }

    #[getter]
    fn subject_id(&self) -> String {
        self.inner.subject_id().to_string()
    }
}

/// Human-readable description for a result code.
#[pyfunction]
fn error_description(code: u16) -> String {
    match ErrorCode::try_from(code) {
        Ok(known) => known.description().to_string(),
        Err(_) => format!("unknown result code {}", code),
    }
}

pub fn register(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPinEncryptor>()?;
    m.add_function(wrap_pyfunction!(error_description, m)?)?;
    m.add("VERSION", VERSION)?;
    Ok(())
}
