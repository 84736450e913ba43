//! Centred log-log derivative of the correlation sum.
//!
//! With h the half-window offset:
//!
//!   νᵢ = (ln Cᵢ₊₂ₕ - ln Cᵢ) / (ln εᵢ₊₂ₕ - ln εᵢ)
//!
//! The slope νᵢ is attached to ln εᵢ₊ₕ, so both output arrays lose h
//! samples at each end.

use ndarray::{s, Array1};

use crate::correlation::CorrelationSum;
use crate::error::{FracDimError, Result};

/// Half-window offset of the centred difference.
pub const DEFAULT_DERIVATIVE_OFFSET: usize = 1;

/// Local log-log slopes aligned with their (trimmed) log-thresholds.
#[derive(Debug, Clone)]
pub struct LogDerivative {
    /// ln εᵢ₊ₕ
    pub log_thresholds: Array1<f64>,
    /// Centred slope of ln C against ln ε
    pub slopes: Array1<f64>,
}

impl LogDerivative {
    /// Differentiate a correlation sum with the given half-window offset.
    pub fn from_correlation_sum(cs: &CorrelationSum, offset: usize) -> Result<Self> {
        Self::from_arrays(cs.thresholds.values(), &cs.values, offset)
    }

    /// Differentiate `ln sums` against `ln thresholds`.
    ///
    /// Zero sums become -∞ after the log and propagate as non-finite
    /// slopes; they are not clamped here.
    pub fn from_arrays(
        thresholds: &Array1<f64>,
        sums: &Array1<f64>,
        offset: usize,
    ) -> Result<Self> {
        let n = thresholds.len();
        if sums.len() != n {
            return Err(FracDimError::invalid_input(format!(
                "{} thresholds but {} correlation sums",
                n,
                sums.len()
            )));
        }
        if offset == 0 {
            return Err(FracDimError::invalid_input("derivative offset must be at least 1"));
        }
        let span = match offset.checked_mul(2) {
            Some(span) if span < n => span,
            _ => {
                return Err(FracDimError::invalid_input(format!(
                    "{} samples are too few for a centred difference with offset {}",
                    n, offset
                )))
            }
        };

        let log_e = thresholds.mapv(f64::ln);
        let log_ne = sums.mapv(f64::ln);

        let d_log_e = &log_e.slice(s![span..]) - &log_e.slice(s![..n - span]);
        let d_log_ne = &log_ne.slice(s![span..]) - &log_ne.slice(s![..n - span]);

        Ok(Self {
            log_thresholds: log_e.slice(s![offset..n - offset]).to_owned(),
            slopes: d_log_ne / d_log_e,
        })
    }

    /// Number of slope samples
    pub fn len(&self) -> usize {
        self.slopes.len()
    }

    /// Whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.slopes.is_empty()
    }

    /// Whether every slope and log-threshold is finite
    pub fn is_finite(&self) -> bool {
        self.slopes.iter().chain(self.log_thresholds.iter()).all(|v| v.is_finite())
    }

    /// Largest slope over the whole curve
    pub fn max_slope(&self) -> f64 {
        self.slopes.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}
