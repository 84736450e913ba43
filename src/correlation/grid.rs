//! Threshold grid for the correlation sum.

use ndarray::Array1;

use crate::error::{FracDimError, Result};

/// Strictly increasing, linearly spaced thresholds over (0, max].
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdGrid {
    values: Array1<f64>,
}

impl ThresholdGrid {
    /// Build `n` thresholds `max/n, 2·max/n, ..., max`.
    ///
    /// Equivalent to `n + 1` evenly spaced points on [0, max] with the
    /// leading zero dropped. The last threshold is exactly `max`.
    pub fn linear(max_distance: f64, n: usize) -> Result<Self> {
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(FracDimError::DegenerateInput { max_distance });
        }
        if n == 0 {
            return Err(FracDimError::invalid_input("threshold grid needs at least 1 value"));
        }

        let step = max_distance / n as f64;
        let values = Array1::from_iter((0..n).map(|k| {
            if k + 1 == n {
                max_distance
            } else {
                (k + 1) as f64 * step
            }
        }));

        Ok(Self { values })
    }

    /// Threshold values
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Number of thresholds
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the grid is empty (never true for a constructed grid)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest threshold
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Number of thresholds less than or equal to `d`.
    ///
    /// Equivalently, the index of the first threshold strictly greater
    /// than `d`, i.e. the first bin in which a pair at distance `d` counts.
    pub fn first_exceeding(&self, d: f64) -> usize {
        match self.values.as_slice() {
            Some(slice) => slice.partition_point(|&t| t <= d),
            None => self.values.iter().take_while(|&&t| t <= d).count(),
        }
    }
}
