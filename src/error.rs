//! Crate-wide error taxonomy.
//!
//! Nothing in this crate treats an error as fatal: I/O failures degrade to
//! default field values, system query failures degrade to empty values, and
//! malformed numeric fields keep their prior value. The variants below exist
//! so that each fallible operation can still return a `Result` and leave the
//! log-and-continue decision to the boundary that owns it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by theme document I/O, OS queries, and field parsing.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A theme file could not be read or written.
    #[error("could not access theme file at {path}")]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// An OS-side query for active theme state failed.
    #[error("system query failed: {0}")]
    Query(String),

    /// A declared integer field carried a non-numeric value.
    #[error("value {value:?} for key {key} is not a number")]
    Format {
        /// Field key as it appeared in the document.
        key: String,
        /// Offending raw value.
        value: String,
    },
}

impl ThemeError {
    /// Wrap a filesystem error together with the path it occurred on.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ThemeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeError;

    #[test]
    fn error_display_names_the_offender() {
        let err = ThemeError::Format {
            key: "PicturePosition".to_string(),
            value: "notanumber".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PicturePosition"));
        assert!(msg.contains("notanumber"));
    }
}
