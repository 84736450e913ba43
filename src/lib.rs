//! # fracdim
//!
//! Correlation (fractal) dimension of point clouds via the
//! Grassberger-Procaccia correlation sum.
//!
//! ## Theoretical Framework
//!
//! For M points x₁, ..., x_M the correlation sum
//!
//!   C(ε) = (1/M²) #{(i, j) : ‖xᵢ - xⱼ‖ < ε}
//!
//! scales as a power law C(ε) ∝ ε^ν over a range of ε. The exponent ν is
//! the correlation dimension: 1 for points on a curve, 2 on a surface,
//! and fractional on a strange attractor.
//!
//! ### Pipeline
//!
//! 1. **Distances** (`geometry`): symmetric M × M distance matrix built
//!    from the condensed upper triangle
//!
//! 2. **Correlation sum** (`correlation`): C(ε) on 1024 linearly spaced
//!    thresholds over (0, max distance]
//!
//! 3. **Local slopes** (`scaling`): centred difference of ln C against
//!    ln ε, then a closed-form least-squares parabola through the slopes
//!
//! 4. **Extraction** (`estimator`): the slope maximum in a window around
//!    the parabola's vertex is the dimension estimate
//!
//! ## Example
//!
//! ```no_run
//! use fracdim::{samples, CorrelationDimension};
//!
//! let points = samples::uniform_cube(2000, 2, 42)?;
//! let estimate = CorrelationDimension::new().estimate(&points)?;
//! let (dimension, [window_mean, vertex_height, max_slope]) = estimate.as_tuple();
//! # Ok::<(), fracdim::FracDimError>(())
//! ```
//!
//! ## References
//!
//! - Grassberger & Procaccia, "Characterization of Strange Attractors",
//!   PRL 50, 346 (1983)
//! - Grassberger & Procaccia, "Measuring the strangeness of strange
//!   attractors", Physica D 9, 189 (1983)

pub mod correlation;
pub mod error;
pub mod estimator;
pub mod geometry;
pub mod samples;
pub mod scaling;

pub use error::{FracDimError, Result, Stage};

// Re-exports from geometry
pub use geometry::{
    Metric,
    Euclidean,
    pairwise_distances,
    pairwise_distances_with,
    points_from_rows,
};

// Re-exports from correlation
pub use correlation::{
    CorrelationSum,
    SumStrategy,
    ThresholdGrid,
};

// Re-exports from scaling
pub use scaling::{
    LogDerivative,
    QuadraticFit,
};

// Re-exports from estimator
pub use estimator::{
    CorrelationDimension,
    DimensionEstimate,
    EstimatorConfig,
    Window,
    estimate_dimension,
};
