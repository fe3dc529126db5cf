//! Reading input files.
//!
//! A missing implementation file is the first-generation case and is not an
//! error; an unreadable or non-UTF-8 file is.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::ParserError;

/// Read an interface header. The header must exist.
///
/// # Errors
/// Returns `ParserError::Io` if the file cannot be read as UTF-8 text.
pub fn read_interface(path: &Path) -> Result<String, ParserError> {
    std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an existing implementation file, `Ok(None)` when it does not exist.
///
/// An existing empty file yields `Ok(Some(String::new()))`.
///
/// # Errors
/// Returns `ParserError::Io` for any failure other than the file being absent.
pub fn read_implementation(path: &Path) -> Result<Option<String>, ParserError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no prior implementation file");
            Ok(None)
        }
        Err(source) => Err(ParserError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
