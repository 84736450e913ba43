//! Closed-form quadratic least squares.
//!
//! Fits y = a·x² + b·x + c by solving the 3 × 3 normal equations
//!
//!   ┌ n    Σx   Σx² ┐ ┌ c ┐   ┌ Σy   ┐
//!   │ Σx   Σx²  Σx³ │ │ b │ = │ Σxy  │
//!   └ Σx²  Σx³  Σx⁴ ┘ └ a ┘   └ Σx²y ┘
//!
//! with Cramer's rule, expanding each determinant along its first row.
//! The sums are accumulated about x̄ and the coefficients shifted back
//! afterwards, which keeps the determinant independent of where the
//! samples sit on the x axis.

use ndarray::Array1;
use tracing::{debug, warn};

use crate::error::{FracDimError, Result};

/// Relative size below which the normal-equations determinant counts as zero.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Coefficients of y = quadratic·x² + linear·x + intercept
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    /// c
    pub intercept: f64,
    /// b
    pub linear: f64,
    /// a
    pub quadratic: f64,
}

impl QuadraticFit {
    /// Least-squares parabola through the paired samples.
    pub fn fit(x: &Array1<f64>, y: &Array1<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(FracDimError::invalid_input(format!(
                "regression arrays differ in length: {} vs {}",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 3 {
            return Err(FracDimError::singular_fit(format!(
                "need at least 3 samples, got {}",
                x.len()
            )));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            warn!("rejecting regression input with non-finite values");
            return Err(FracDimError::singular_fit("regression input contains non-finite values"));
        }

        // Power sums are taken about the mean of x, so shifting x (rescaling
        // the point cloud shifts ln ε) leaves the system unchanged.
        let n = x.len() as f64;
        let mean = x.sum() / n;
        let mut sx = 0.0;
        let mut sx2 = 0.0;
        let mut sx3 = 0.0;
        let mut sx4 = 0.0;
        let mut sy = 0.0;
        let mut sxy = 0.0;
        let mut sx2y = 0.0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let u = xi - mean;
            let u2 = u * u;
            sx += u;
            sx2 += u2;
            sx3 += u2 * u;
            sx4 += u2 * u2;
            sy += yi;
            sxy += u * yi;
            sx2y += u2 * yi;
        }

        // 2 × 2 minors shared by the determinant and the numerators
        let m_bc = sx2 * sx4 - sx3 * sx3;
        let m_ac = sx * sx4 - sx3 * sx2;
        let m_ab = sx * sx3 - sx2 * sx2;
        let m_nc = n * sx4 - sx2 * sx2;
        let m_nb = n * sx3 - sx * sx2;
        let m_na = n * sx2 - sx * sx;

        let det = n * m_bc - sx * m_ac + sx2 * m_ab;
        let scale = (n * sx2 * sx4).abs()
            + (n * sx3 * sx3).abs()
            + (sx * sx * sx4).abs()
            + (sx * sx3 * sx2).abs()
            + (sx2 * sx * sx3).abs()
            + (sx2 * sx2 * sx2).abs();

        if det == 0.0 || !det.is_finite() || det.abs() <= SINGULAR_TOLERANCE * scale {
            warn!(det, scale, "normal equations are singular");
            return Err(FracDimError::singular_fit(format!(
                "normal-equations determinant {} is zero",
                det
            )));
        }

        // y = a·u² + b'·u + c' with u = x - mean
        let c_u = (sy * m_bc - sxy * m_ac + sx2y * m_ab) / det;
        let b_u = -(sy * m_ac - sxy * m_nc + sx2y * m_nb) / det;
        let quadratic = (sy * m_ab - sxy * m_nb + sx2y * m_na) / det;

        let linear = b_u - 2.0 * quadratic * mean;
        let intercept = (quadratic * mean - b_u) * mean + c_u;

        debug!(intercept, linear, quadratic, "quadratic fit");

        Ok(Self {
            intercept,
            linear,
            quadratic,
        })
    }

    /// (c, b, a)
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.intercept, self.linear, self.quadratic)
    }

    /// Value of the parabola at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.quadratic * x + self.linear) * x + self.intercept
    }

    /// Vertex (centre, height) = (-b / 2a, c - b² / 4a)
    pub fn vertex(&self) -> Result<(f64, f64)> {
        let (c, b, a) = self.coefficients();
        if a == 0.0 || !a.is_finite() {
            return Err(FracDimError::singular_fit(format!(
                "quadratic coefficient {} has no vertex",
                a
            )));
        }

        let centre = -b / (2.0 * a);
        let height = c - b * b / (4.0 * a);
        if !centre.is_finite() || !height.is_finite() {
            return Err(FracDimError::singular_fit(format!(
                "vertex ({}, {}) is not finite",
                centre, height
            )));
        }

        Ok((centre, height))
    }
}
