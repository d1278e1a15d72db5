use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the calculators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("a name is required for the data set")]
    EmptyDatasetName,

    #[error("unknown input mode {0:?}, expected P (probabilities) or E (occurrences)")]
    UnknownInputMode(String),

    #[error("unknown data type {0:?}, expected 1, 2 or 3")]
    UnknownDataType(String),

    #[error("standard input closed while waiting for {0}")]
    UnexpectedEof(&'static str),

    #[error("categorical weights {0:?} cannot be normalised")]
    InvalidWeights(Vec<f64>),

    #[error("failed to write trajectory to {}", path.display())]
    WriteTrajectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
