//! Word list loading
//!
//! The canonical word list is a plain text file with one five-letter word
//! per line. Blank lines and surrounding whitespace are ignored here;
//! validation of the words themselves belongs to [`crate::core::Codec`].

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for reading a word list file
#[derive(Debug)]
pub enum WordListError {
    /// No file exists at the given path.
    Missing(PathBuf),
    /// The file exists but could not be read.
    Io(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(
                f,
                "word list {} not found, supply a file with one five-letter word per line",
                path.display()
            ),
            Self::Io(error) => write!(f, "failed to read word list: {error}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Missing(_) => None,
        }
    }
}

/// Read one word per line, skipping blank lines
///
/// # Errors
/// - [`WordListError::Missing`] if there is no file at `path`
/// - [`WordListError::Io`] for any other read failure
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            WordListError::Missing(path.to_path_buf())
        } else {
            WordListError::Io(error)
        }
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
