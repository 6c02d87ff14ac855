//! Precomputed response table
//!
//! An n×n matrix holding the encoded response for every (guess, answer) pair
//! in the word list. Building it is the expensive step, so rows are computed
//! in parallel and the result is saved as text for later runs. Row order
//! follows the codec's canonical word order on both axes.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::core::{Codec, Response, score_row};

/// Rows between progress reports during a build.
const PROGRESS_EVERY_ROWS: usize = 100;

/// Observer hooks for a table build
///
/// Progress reports and cancellation are both optional; neither affects the
/// computed table. The cancel flag is checked once per row.
#[derive(Clone, Copy, Default)]
pub struct BuildMonitor<'a> {
    progress: Option<&'a (dyn Fn(usize, usize) + Sync)>,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> BuildMonitor<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a `(rows_completed, total_rows)` callback
    ///
    /// Called every few completed rows and once when the last row finishes.
    /// Rows complete out of order, so consecutive reports may not be
    /// monotonic.
    #[must_use]
    pub fn with_progress(mut self, progress: &'a (dyn Fn(usize, usize) + Sync)) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Install a cooperative cancellation flag
    #[must_use]
    pub fn with_cancel(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Error returned when a monitored build observes its cancel flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildCancelled;

impl fmt::Display for BuildCancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lookup table build was cancelled")
    }
}

impl std::error::Error for BuildCancelled {}

/// Error type for loading a saved table
#[derive(Debug)]
pub enum TableError {
    /// No file at the given path; the table has to be built first.
    Missing(PathBuf),
    Io(io::Error),
    /// Stored dimensions don't match the current word list.
    SizeMismatch { expected: usize, found: usize },
    /// A cell is not an integer in [0, 242].
    BadCell { row: usize, column: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(
                f,
                "lookup table {} not found, run the build-table command to generate it",
                path.display()
            ),
            Self::Io(error) => write!(f, "failed to read lookup table: {error}"),
            Self::SizeMismatch { expected, found } => write!(
                f,
                "lookup table is sized for {found} words but the word list has {expected}, \
                 rebuild it with build-table --force"
            ),
            Self::BadCell { row, column } => write!(
                f,
                "lookup table holds an invalid response value at row {row}, column {column}"
            ),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}

/// The n×n response matrix
///
/// Immutable once built; sessions and rankers only read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    size: usize,
    cells: Vec<u8>,
}

impl LookupTable {
    /// Compute the full table for a codec's word list
    ///
    /// # Examples
    /// ```
    /// use ordle_solver::core::{Codec, Response};
    /// use ordle_solver::table::LookupTable;
    ///
    /// let codec = Codec::build(["bager", "gader", "kaffe"]).unwrap();
    /// let table = LookupTable::build(&codec);
    /// assert_eq!(table.response(0, 0), Response::ALL_GREEN);
    /// assert_eq!(table.value(0, 1), 71);
    /// ```
    #[must_use]
    pub fn build(codec: &Codec) -> Self {
        Self::build_monitored(codec, &BuildMonitor::new())
            .expect("builds without a cancel flag cannot be interrupted")
    }

    /// Compute the full table with progress reporting and cancellation
    ///
    /// Rows are scored in parallel, each worker filling a disjoint row slice.
    ///
    /// # Errors
    /// Returns [`BuildCancelled`] if the monitor's cancel flag was set; the
    /// partial result is discarded.
    pub fn build_monitored(
        codec: &Codec,
        monitor: &BuildMonitor<'_>,
    ) -> Result<Self, BuildCancelled> {
        let size = codec.len();
        if size == 0 {
            return Ok(Self {
                size,
                cells: Vec::new(),
            });
        }

        let encoded = codec.encoded();
        let mut cells = vec![0u8; size * size];
        let completed = AtomicUsize::new(0);

        cells
            .par_chunks_mut(size)
            .enumerate()
            .try_for_each(|(row, out)| {
                if monitor.cancelled() {
                    return Err(BuildCancelled);
                }
                score_row(&encoded[row], encoded, out);
                if let Some(progress) = monitor.progress {
                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    if done % PROGRESS_EVERY_ROWS == 0 || done == size {
                        progress(done, size);
                    }
                }
                Ok(())
            })?;

        Ok(Self { size, cells })
    }

    /// Save as text: one line per guess row, values separated by spaces
    ///
    /// # Errors
    /// Returns any underlying file system error.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = fs::File::create(path)?;
        let mut out = BufWriter::new(file);
        if self.size > 0 {
            for row in self.cells.chunks(self.size) {
                let mut first = true;
                for &value in row {
                    if first {
                        write!(out, "{value}")?;
                        first = false;
                    } else {
                        write!(out, " {value}")?;
                    }
                }
                writeln!(out)?;
            }
        }
        out.flush()
    }

    /// Load a previously saved table
    ///
    /// # Errors
    /// - [`TableError::Missing`] if there is no file at `path`
    /// - [`TableError::SizeMismatch`] if any dimension differs from
    ///   `expected_size` (stale table after a word-list change)
    /// - [`TableError::BadCell`] for values outside [0, 242]
    pub fn load(path: impl AsRef<Path>, expected_size: usize) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                TableError::Missing(path.to_path_buf())
            } else {
                TableError::Io(error)
            }
        })?;

        let mut cells = Vec::with_capacity(expected_size * expected_size);
        let mut rows = 0;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let mut width = 0;
            for token in line.split_whitespace() {
                let value: u16 = token.parse().map_err(|_| TableError::BadCell {
                    row: rows,
                    column: width,
                })?;
                if value > u16::from(Response::ALL_GREEN.value()) {
                    return Err(TableError::BadCell {
                        row: rows,
                        column: width,
                    });
                }
                cells.push(value as u8);
                width += 1;
            }
            if width != expected_size {
                return Err(TableError::SizeMismatch {
                    expected: expected_size,
                    found: width,
                });
            }
            rows += 1;
        }
        if rows != expected_size {
            return Err(TableError::SizeMismatch {
                expected: expected_size,
                found: rows,
            });
        }

        Ok(Self {
            size: expected_size,
            cells,
        })
    }

    /// Number of words on each axis
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All encoded responses for one guess row
    ///
    /// # Panics
    /// Panics if `guess` is out of range.
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u8] {
        &self.cells[guess * self.size..(guess + 1) * self.size]
    }

    /// Encoded response for a (guess, answer) pair
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn value(&self, guess: usize, answer: usize) -> u8 {
        self.cells[guess * self.size + answer]
    }

    /// Response for a (guess, answer) pair
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn response(&self, guess: usize, answer: usize) -> Response {
        Response::new(self.value(guess, answer))
    }
}
