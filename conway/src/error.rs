//! Error types for the Life engine.

use thiserror::Error;

/// Engine result type alias.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Everything that can abort a run. None of these are retried.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Height or width was zero at creation.
    #[error("invalid grid dimensions {height}x{width}: both must be at least 1")]
    InvalidDimension { height: usize, width: usize },

    /// Cell storage could not be reserved (or its size overflowed).
    #[error("failed to allocate cell buffer for a {height}x{width} grid")]
    AllocationFailure { height: usize, width: usize },

    /// Explicit contents held something other than 0 or 1.
    #[error("cell {index} holds {value}, expected 0 or 1")]
    InvalidCell { index: usize, value: u8 },

    /// Explicit contents did not match the stated dimensions.
    #[error("expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Current and next buffers disagree on shape.
    #[error("buffer shape mismatch: current is {current:?}, next is {next:?}")]
    DimensionMismatch {
        current: (usize, usize),
        next: (usize, usize),
    },

    /// A replacement buffer did not have the grid's shape.
    #[error("replacement buffer is {actual:?}, grid is {expected:?}")]
    ReplacementMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("tile size must be at least 1")]
    InvalidTileSize,

    /// The worker runtime could not be started.
    #[error("failed to start worker runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// A unit of parallel work did not finish.
    #[error("parallel unit failed: {0}")]
    Dispatch(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<tokio::task::JoinError> for LifeError {
    fn from(e: tokio::task::JoinError) -> Self {
        LifeError::Dispatch(e.to_string())
    }
}

impl From<toml::de::Error> for LifeError {
    fn from(e: toml::de::Error) -> Self {
        LifeError::Config(e.to_string())
    }
}
