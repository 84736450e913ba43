//! Uniform point clouds on simple manifolds.

use std::f64::consts::PI;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use crate::error::{FracDimError, Result};

fn uniform(low: f64, high: f64) -> Result<Uniform<f64>> {
    Uniform::new(low, high)
        .map_err(|e| FracDimError::invalid_input(format!("bad sampling range: {}", e)))
}

fn check_dimension(dim: usize) -> Result<()> {
    if dim == 0 {
        return Err(FracDimError::invalid_input("embedding dimension must be at least 1"));
    }
    Ok(())
}

/// `n` points uniform in the unit hypercube [0, 1)ᴰ.
pub fn uniform_cube(n: usize, dim: usize, seed: u64) -> Result<Array2<f64>> {
    check_dimension(dim)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let unit = uniform(0.0, 1.0)?;

    Ok(Array2::from_shape_fn((n, dim), |_| unit.sample(&mut rng)))
}

/// `n` points uniform on the main diagonal of the unit hypercube in ℝᴰ.
pub fn line_segment(n: usize, dim: usize, seed: u64) -> Result<Array2<f64>> {
    check_dimension(dim)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let unit = uniform(0.0, 1.0)?;

    let mut points = Array2::<f64>::zeros((n, dim));
    for mut row in points.rows_mut() {
        let t = unit.sample(&mut rng);
        row.fill(t);
    }
    Ok(points)
}

/// `n` points uniform on the unit circle in ℝ².
pub fn circle(n: usize, seed: u64) -> Result<Array2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let angle = uniform(0.0, 2.0 * PI)?;

    let mut points = Array2::<f64>::zeros((n, 2));
    for mut row in points.rows_mut() {
        let theta = angle.sample(&mut rng);
        row[0] = theta.cos();
        row[1] = theta.sin();
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape_and_range() {
        let points = uniform_cube(100, 3, 7).unwrap();
        assert_eq!(points.dim(), (100, 3));
        assert!(points.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_seeded_reproducible() {
        assert_eq!(uniform_cube(50, 2, 11).unwrap(), uniform_cube(50, 2, 11).unwrap());
        assert_ne!(uniform_cube(50, 2, 11).unwrap(), uniform_cube(50, 2, 12).unwrap());
    }

    #[test]
    fn test_line_is_collinear() {
        let points = line_segment(20, 4, 3).unwrap();
        for row in points.rows() {
            assert!(row.iter().all(|&v| v == row[0]));
        }
    }

    #[test]
    fn test_circle_radius() {
        let points = circle(64, 5).unwrap();
        for row in points.rows() {
            let r = (row[0] * row[0] + row[1] * row[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(uniform_cube(10, 0, 1).is_err());
        assert!(line_segment(10, 0, 1).is_err());
    }
}
