use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Broad category of a [`PlotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of command-line arguments.
    Usage,
    /// File missing, unreadable, malformed, or missing a required column/row.
    Load,
    /// A value that should be numeric is not.
    Compute,
    /// The chart window could not be created or run.
    Render,
}

/// Every way a plot invocation can fail.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Usage: {program} <dataset_file> <model_file>")]
    Usage { program: String },

    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{}' is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("'{}' has no data rows", .path.display())]
    NoRows { path: PathBuf },

    #[error(
        "'{}' row {row}, column '{column}': {value:?} is not a number",
        .path.display()
    )]
    NotNumeric {
        path: PathBuf,
        /// 1-based index of the data row (the header is not counted).
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("cannot display chart: {0}")]
    Render(#[from] eframe::Error),
}

impl PlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::Usage { .. } => ErrorKind::Usage,
            PlotError::Read { .. } | PlotError::MissingColumn { .. } | PlotError::NoRows { .. } => {
                ErrorKind::Load
            }
            PlotError::NotNumeric { .. } => ErrorKind::Compute,
            PlotError::Render(_) => ErrorKind::Render,
        }
    }
}
