// src/error.rs
use std::path::PathBuf;

/// Everything that can stop a run. All of it is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    #[error("CSV error in {what}: {source}")]
    Csv { what: String, source: csv::Error },

    #[error("could not decode parquet {what}: {source}")]
    Parquet {
        what: String,
        source: polars::error::PolarsError,
    },

    #[error("play-by-play is missing required columns for {purpose}: {}", missing.join(", "))]
    MissingColumns {
        purpose: &'static str,
        missing: Vec<String>,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed source {0}")]
    Malformed(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub(crate) fn csv(what: impl Into<String>, source: csv::Error) -> Self {
        Error::Csv { what: what.into(), source }
    }
}
