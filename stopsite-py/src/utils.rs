use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::PyErr;

use stopsite_core::error::BioError;

/// File-system failures become `IOError`, everything else `ValueError`.
pub fn map_bio_err(err: BioError) -> PyErr {
    match err {
        BioError::FastaIo(io) => PyIOError::new_err(io.to_string()),
        BioError::CsvParse { ref source, .. } if source.is_io_error() => {
            PyIOError::new_err(err.to_string())
        }
        BioError::CsvWrite(ref source) if source.is_io_error() => {
            PyIOError::new_err(err.to_string())
        }
        other => PyValueError::new_err(other.to_string()),
    }
}
