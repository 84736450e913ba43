//! Correlation-sum accumulation.

use ndarray::{Array1, Array2};
use tracing::{debug, trace};

use super::ThresholdGrid;
use crate::error::{FracDimError, Result};

/// Largest point count evaluated with the vectorized strategy by default.
pub const DEFAULT_VECTORIZE_LIMIT: usize = 1024;

/// Evaluation strategy for the correlation sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SumStrategy {
    /// Vectorized up to the configured point limit, iterative above it
    #[default]
    Auto,
    /// Single pass over the matrix with per-threshold bins
    Vectorized,
    /// One matrix comparison per threshold
    Iterative,
}

impl SumStrategy {
    /// Resolve `Auto` against the number of points.
    pub fn resolve(self, n_points: usize, vectorize_limit: usize) -> Self {
        match self {
            Self::Auto if n_points <= vectorize_limit => Self::Vectorized,
            Self::Auto => Self::Iterative,
            other => other,
        }
    }
}

/// Correlation sum C(ε) over a threshold grid.
#[derive(Debug, Clone)]
pub struct CorrelationSum {
    /// Threshold grid ε₀ < ε₁ < ... < εₖ₋₁
    pub thresholds: ThresholdGrid,
    /// C(εₖ) in (0, 1], non-decreasing in k
    pub values: Array1<f64>,
    /// Strategy actually used
    pub strategy: SumStrategy,
}

impl CorrelationSum {
    /// Compute the correlation sum of a distance matrix on `n_thresholds`
    /// thresholds spanning (0, max distance].
    pub fn compute(
        dm: &Array2<f64>,
        n_thresholds: usize,
        strategy: SumStrategy,
        vectorize_limit: usize,
    ) -> Result<Self> {
        check_matrix(dm)?;
        let max_distance = dm.iter().cloned().fold(0.0, f64::max);
        let thresholds = ThresholdGrid::linear(max_distance, n_thresholds)?;
        let strategy = strategy.resolve(dm.nrows(), vectorize_limit);

        debug!(
            n_points = dm.nrows(),
            max_distance,
            n_thresholds,
            ?strategy,
            "accumulating correlation sum"
        );

        Ok(Self::on_grid(dm, thresholds, strategy))
    }

    /// Count on a prepared grid. `dm` is already checked and `strategy` resolved.
    fn on_grid(dm: &Array2<f64>, thresholds: ThresholdGrid, strategy: SumStrategy) -> Self {
        let counts = match strategy {
            SumStrategy::Iterative => count_iterative(dm, &thresholds),
            _ => count_vectorized(dm, &thresholds),
        };

        let total = (dm.nrows() * dm.ncols()) as f64;
        let values = counts.mapv(|c| c as f64 / total);

        Self {
            thresholds,
            values,
            strategy,
        }
    }

    /// Number of thresholds
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no thresholds
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn check_matrix(dm: &Array2<f64>) -> Result<()> {
    if dm.nrows() != dm.ncols() {
        return Err(FracDimError::invalid_input(format!(
            "distance matrix must be square, got {}x{}",
            dm.nrows(),
            dm.ncols()
        )));
    }
    if dm.nrows() < 2 {
        return Err(FracDimError::invalid_input(format!(
            "need at least 2 points to form a pair, got {}",
            dm.nrows()
        )));
    }
    if dm.iter().any(|d| !d.is_finite() || *d < 0.0) {
        return Err(FracDimError::invalid_input(
            "distance matrix contains negative or non-finite entries",
        ));
    }
    Ok(())
}

/// Bin each distance at the first threshold exceeding it, then accumulate.
///
/// Holds one counter per threshold rather than a comparison per
/// (pair, threshold), so it needs no more memory than the iterative path.
fn count_vectorized(dm: &Array2<f64>, thresholds: &ThresholdGrid) -> Array1<u64> {
    let n = thresholds.len();
    let mut bins = Array1::<u64>::zeros(n);

    for &d in dm.iter() {
        let k = thresholds.first_exceeding(d);
        if k < n {
            bins[k] += 1;
        }
    }

    let mut running = 0u64;
    bins.mapv_inplace(|b| {
        running += b;
        running
    });
    bins
}

/// Compare the whole matrix against one threshold at a time.
fn count_iterative(dm: &Array2<f64>, thresholds: &ThresholdGrid) -> Array1<u64> {
    let n = thresholds.len();
    let mut counts = Array1::<u64>::zeros(n);

    for (k, &eps) in thresholds.values().iter().enumerate() {
        counts[k] = dm.iter().filter(|&&d| d < eps).count() as u64;
        if k % 128 == 0 {
            trace!(step = k, of = n, "iterative correlation sum");
        }
    }

    counts
}
