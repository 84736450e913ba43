//! Error types for the dimension-estimation pipeline.
//!
//! Every stage fails fast: the first violated precondition aborts the whole
//! computation and no partial estimate is ever returned.

use thiserror::Error;

/// Pipeline stage that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Input validation and pairwise distance computation
    Distances,
    /// Threshold grid and correlation-sum accumulation
    CorrelationSum,
    /// Log-log transform and quadratic regression
    Regression,
    /// Vertex location and windowed extraction
    Extraction,
}

/// Errors that can occur while estimating a correlation dimension.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FracDimError {
    /// Too few points, malformed rows, non-finite coordinates or bad configuration.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// All pairwise distances are zero, so the threshold grid collapses.
    #[error("Degenerate input: maximum pairwise distance is {max_distance}")]
    DegenerateInput {
        /// Largest pairwise distance found
        max_distance: f64,
    },

    /// The quadratic regression has no unique, finite solution.
    #[error("Singular fit: {0}")]
    SingularFit(String),

    /// The extraction window around the crossing index is empty.
    #[error("Empty window: crossing index {crossing_index} with half-width {half_width}")]
    EmptyWindow {
        /// Index of the first log-threshold above the vertex
        crossing_index: usize,
        /// Half-width of the window that collapsed
        half_width: usize,
    },
}

impl FracDimError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a SingularFit error.
    pub fn singular_fit(message: impl Into<String>) -> Self {
        Self::SingularFit(message.into())
    }

    /// Stage of the pipeline this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidInput(_) => Stage::Distances,
            Self::DegenerateInput { .. } => Stage::CorrelationSum,
            Self::SingularFit(_) => Stage::Regression,
            Self::EmptyWindow { .. } => Stage::Extraction,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FracDimError>;
