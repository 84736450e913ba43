//! Estimator Module: Correlation Dimension from a Point Cloud
//!
//! Chains the pipeline stages:
//!
//! ```text
//! points ──► distance matrix ──► C(ε) on 1024 thresholds
//!        ──► ν(ln ε) = d ln C / d ln ε ──► parabola fit ν ≈ a·x² + b·x + c
//!        ──► crossing index of the vertex ──► max ν in a window around it
//! ```
//!
//! The slope curve rises from the small-ε noise floor, plateaus over the
//! scaling region and falls off as C(ε) saturates at 1. The fitted
//! parabola's vertex locates the plateau, and the dimension is read off
//! the slope curve in a window of ±32 samples around it.

mod config;
mod pipeline;
mod window;

pub use config::{
    EstimatorConfig,
    DEFAULT_N_THRESHOLDS,
    DEFAULT_NARROW_HALF_WIDTH,
    DEFAULT_WIDE_HALF_WIDTH,
};
pub use pipeline::{estimate_dimension, CorrelationDimension, DimensionEstimate};
pub use window::{crossing_index, Window};
