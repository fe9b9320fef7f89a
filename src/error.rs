//! Error types for the filter engine and its driver checks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading patterns, checking paths, or streaming records.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Read or write failure in the middle of a run.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The pattern file could not be read.
    #[error("failed to read pattern file '{}'", .path.display())]
    PatternFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening the input or creating the output failed.
    #[error("cannot open '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error(
        "input and output files are the same ('{}') - aborting to prevent data loss",
        .0.display()
    )]
    SameFile(PathBuf),
}
