//! Estimator configuration.

use crate::correlation::{SumStrategy, DEFAULT_VECTORIZE_LIMIT};
use crate::error::{FracDimError, Result};
use crate::scaling::DEFAULT_DERIVATIVE_OFFSET;

/// Number of thresholds in the correlation-sum grid.
pub const DEFAULT_N_THRESHOLDS: usize = 1024;
/// Half-width of the narrow window around the crossing index.
pub const DEFAULT_NARROW_HALF_WIDTH: usize = 3;
/// Half-width of the wide window, roughly √1024.
pub const DEFAULT_WIDE_HALF_WIDTH: usize = 32;

/// Configuration for the correlation-dimension estimator
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Number of thresholds ε
    pub n_thresholds: usize,
    /// Half-window offset of the centred log-log difference
    pub derivative_offset: usize,
    /// Narrow window half-width (diagnostic mean only)
    pub narrow_half_width: usize,
    /// Wide window half-width (dimension and window mean)
    pub wide_half_width: usize,
    /// Largest point count evaluated with the vectorized strategy under `Auto`
    pub vectorize_limit: usize,
    /// Correlation-sum evaluation strategy
    pub strategy: SumStrategy,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            n_thresholds: DEFAULT_N_THRESHOLDS,
            derivative_offset: DEFAULT_DERIVATIVE_OFFSET,
            narrow_half_width: DEFAULT_NARROW_HALF_WIDTH,
            wide_half_width: DEFAULT_WIDE_HALF_WIDTH,
            vectorize_limit: DEFAULT_VECTORIZE_LIMIT,
            strategy: SumStrategy::Auto,
        }
    }
}

impl EstimatorConfig {
    /// Same configuration with a forced strategy
    pub fn with_strategy(mut self, strategy: SumStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject configurations the pipeline cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.derivative_offset == 0 {
            return Err(FracDimError::invalid_input("derivative_offset must be at least 1"));
        }
        if self.narrow_half_width == 0 || self.wide_half_width == 0 {
            return Err(FracDimError::invalid_input("window half-widths must be at least 1"));
        }
        // The regression needs at least 3 slope samples
        let min_thresholds = self
            .derivative_offset
            .checked_mul(2)
            .and_then(|span| span.checked_add(3))
            .ok_or_else(|| {
                FracDimError::invalid_input(format!(
                    "derivative_offset = {} is too large",
                    self.derivative_offset
                ))
            })?;
        if self.n_thresholds < min_thresholds {
            return Err(FracDimError::invalid_input(format!(
                "n_thresholds = {} is below the minimum {} for derivative_offset = {}",
                self.n_thresholds, min_thresholds, self.derivative_offset
            )));
        }
        Ok(())
    }
}
