use std::path::PathBuf;

use crate::error::PlotError;

/// Positional arguments of a plot invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotArgs {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
}

/// Check arity and split `argv` (program name first) into the two input paths.
///
/// Files are not touched here, so a wrong count always yields the usage error.
pub fn parse_args(argv: &[String]) -> Result<PlotArgs, PlotError> {
    match argv {
        [_, dataset, model] => Ok(PlotArgs {
            dataset_path: PathBuf::from(dataset),
            model_path: PathBuf::from(model),
        }),
        _ => Err(PlotError::Usage {
            program: argv
                .first()
                .cloned()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
        }),
    }
}
