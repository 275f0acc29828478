//! Raw line storage and file I/O for theme documents.
//!
//! A theme document on disk is nothing but an ordered run of text lines;
//! every higher-level structure (sections, fields) is a view imposed on
//! that order. Files are Windows-1252 encoded because the OS-native theme
//! editing tools read and write that code page; emitting UTF-8 here would
//! break interoperability with them.

use std::fs;
use std::path::Path;

use crate::error::ThemeError;

/// Ordered sequence of raw text lines backing a theme document.
///
/// Line order is the only structure this type maintains. No line may
/// contain an embedded newline; `read` and the codec never produce one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDocument {
    lines: Vec<String>,
}

impl LineDocument {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from already-split lines.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Read and decode a theme file.
    ///
    /// Accepts CRLF or LF line endings. The caller is expected to treat a
    /// failure as "use default values", not as fatal.
    pub fn read(path: &Path) -> Result<Self, ThemeError> {
        let bytes = fs::read(path).map_err(|e| ThemeError::io(path, e))?;
        let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
        Ok(Self {
            lines: decoded.lines().map(String::from).collect(),
        })
    }

    /// Encode and write the document, creating missing parent directories.
    ///
    /// Every line is terminated with CRLF, matching what the OS-native
    /// tools emit for this format.
    pub fn write(&self, path: &Path) -> Result<(), ThemeError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| ThemeError::io(path, e))?;
        }
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 2).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push_str("\r\n");
        }
        let (encoded, _, _) = encoding_rs::WINDOWS_1252.encode(&text);
        fs::write(path, &encoded).map_err(|e| ThemeError::io(path, e))
    }

    /// All lines in file order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Mutable access for the section codec.
    pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }
}
