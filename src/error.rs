//! Error types for the totem pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Every way a totem run can fail after argument parsing.
#[derive(Error, Debug)]
pub enum TotemError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: no '#OTU ID' header line")]
    MissingHeader { path: PathBuf },

    #[error("{path}: header must have 3 tab-separated columns, found {fields}")]
    MalformedHeader { path: PathBuf, fields: usize },

    #[error("{path}, line {line}: expected 3 tab-separated fields, found {fields}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    #[error("{path}, line {line}: missing taxonomy column")]
    MissingTaxonomy { path: PathBuf, line: u64 },

    #[error("{path}, line {line}: '{value}' in column {column} is not a number")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
    },

    #[error("invalid colour '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("no rows left to plot after filtering")]
    EmptyResult,

    #[error("axis limits [{min}, {max}] are not finite; check the table for inf, nan or huge values")]
    NonFiniteLimits { min: f64, max: f64 },

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl TotemError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TotemError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, TotemError>;
