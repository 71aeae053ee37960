//! Crate-wide error type.

use std::path::PathBuf;

/// Everything that can go wrong while scanning, reading or writing data files.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed csv in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("{}: missing column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{}: line {line}: cannot parse timestamp '{value}'", path.display())]
    Timestamp {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("{}: line {line}: cannot parse temperature '{value}'", path.display())]
    Temperature {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("time and temperature columns differ in length ({times} vs {temps})")]
    LengthMismatch { times: usize, temps: usize },
    #[error("invalid log file name '{0}'")]
    InvalidFileName(String),
    #[error("settings file: {0}")]
    Settings(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
