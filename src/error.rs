use metro_core::Error;
use pyo3::PyErr;
use pyo3::exceptions::{PyIOError, PyLookupError, PyRuntimeError, PyValueError};

/// Maps core errors to the closest Python exception
pub(crate) fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::UnknownStationId(_) => PyLookupError::new_err(err.to_string()),
        Error::DuplicateStationName(_) | Error::InvalidDistance { .. } | Error::InvalidData(_) => {
            PyValueError::new_err(err.to_string())
        }
        Error::IoError(_) | Error::CsvError(_) => PyIOError::new_err(err.to_string()),
        Error::GeoJsonError(_) => PyRuntimeError::new_err(err.to_string()),
    }
}
