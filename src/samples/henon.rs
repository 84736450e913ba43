//! Hénon Map: Strange Attractor with Fractal Dimension
//!
//! The Hénon map is the planar quadratic map
//!
//!   xₙ₊₁ = 1 - a·xₙ² + yₙ
//!   yₙ₊₁ = b·xₙ
//!
//! For the classical parameters a = 1.4, b = 0.3 orbits settle onto a
//! strange attractor with correlation dimension ν ≈ 1.21.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use crate::error::{FracDimError, Result};

/// Iterations discarded before recording an orbit
pub const DEFAULT_BURN_IN: usize = 100;

/// Hénon map with parameters (a, b)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HenonMap {
    pub a: f64,
    pub b: f64,
}

impl Default for HenonMap {
    fn default() -> Self {
        Self::classic()
    }
}

impl HenonMap {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// a = 1.4, b = 0.3
    pub fn classic() -> Self {
        Self::new(1.4, 0.3)
    }

    /// One application of the map
    pub fn step(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (1.0 - self.a * x * x + y, self.b * x)
    }

    /// Record `n` points of the orbit of `start` after `burn_in` iterations.
    ///
    /// Fails if the orbit escapes to infinity.
    pub fn orbit(&self, start: (f64, f64), n: usize, burn_in: usize) -> Result<Array2<f64>> {
        let mut state = start;
        for _ in 0..burn_in {
            state = self.step(state);
        }

        let mut points = Array2::<f64>::zeros((n, 2));
        for mut row in points.rows_mut() {
            state = self.step(state);
            if !state.0.is_finite() || !state.1.is_finite() {
                return Err(FracDimError::invalid_input(format!(
                    "Hénon orbit from {:?} diverged",
                    start
                )));
            }
            row[0] = state.0;
            row[1] = state.1;
        }

        Ok(points)
    }
}

/// `n` points on the classical Hénon attractor from a random start near the origin.
pub fn henon_attractor(n: usize, seed: u64) -> Result<Array2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let near_origin = Uniform::new(-0.1, 0.1)
        .map_err(|e| FracDimError::invalid_input(format!("bad sampling range: {}", e)))?;
    let start = (near_origin.sample(&mut rng), near_origin.sample(&mut rng));

    HenonMap::classic().orbit(start, n, DEFAULT_BURN_IN)
}
