//! Error types for dataset generation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A cross-field constraint on the requested parameters was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("distribution must be specified")]
    MissingDistribution,

    #[error("min value and max value must be specified")]
    MissingBounds,

    #[error("max value must be greater or equal to min_value")]
    InvertedBounds,

    /// Infinite or NaN bounds, or a span that overflows `f64`.
    #[error("min value and max value must be finite")]
    NonFiniteBounds,

    #[error("mean value and standard deviation must be specified")]
    MissingNormalParams,

    #[error("std must be greater than zero")]
    NonPositiveStd,

    #[error("mean value and standard deviation must be finite")]
    NonFiniteNormalParams,
}

/// Errors that terminate a generation run.
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected by the validator before anything was generated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed generator-level input, e.g. an empty charset.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
