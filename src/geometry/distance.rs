//! Pairwise Distance Matrix Construction
//!
//! Distances are first computed in condensed form, the M(M-1)/2 entries
//! of the strict upper triangle in row-major order:
//!
//!   [d₀₁, d₀₂, ..., d₀ₘ₋₁, d₁₂, ..., dₘ₋₂ₘ₋₁]
//!
//! and then expanded into the full M × M matrix with `squareform`.

use ndarray::{Array1, Array2};
use tracing::debug;

use super::metric::{Euclidean, Metric};
use crate::error::{FracDimError, Result};

/// Check that a point set has at least two points, a positive dimension
/// and only finite coordinates.
pub fn validate_points(points: &Array2<f64>) -> Result<()> {
    let n = points.nrows();
    if n < 2 {
        return Err(FracDimError::invalid_input(format!(
            "need at least 2 points to form a pair, got {}",
            n
        )));
    }
    if points.ncols() == 0 {
        return Err(FracDimError::invalid_input("points have zero dimensions"));
    }
    if let Some(((i, d), v)) = points.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(FracDimError::invalid_input(format!(
            "non-finite coordinate {} at point {}, axis {}",
            v, i, d
        )));
    }
    Ok(())
}

/// Build an M × D point matrix from a slice of coordinate vectors.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n = rows.len();
    let dim = rows.first().map(|r| r.len()).unwrap_or(0);

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
        return Err(FracDimError::invalid_input(format!(
            "point {} has {} coordinates, expected {}",
            i,
            row.len(),
            dim
        )));
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((n, dim), flat)
        .map_err(|e| FracDimError::invalid_input(format!("cannot shape points: {}", e)))
}

/// Compute condensed pairwise distances under `metric`.
pub fn condensed_distances<M: Metric + ?Sized>(
    points: &Array2<f64>,
    metric: &M,
) -> Result<Array1<f64>> {
    validate_points(points)?;
    let n = points.nrows();

    let mut condensed = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        let pi = points.row(i);
        for j in i + 1..n {
            let dist = metric.distance(pi, points.row(j));
            if !dist.is_finite() || dist < 0.0 {
                return Err(FracDimError::invalid_input(format!(
                    "metric returned {} for points {} and {}",
                    dist, i, j
                )));
            }
            condensed.push(dist);
        }
    }

    Ok(Array1::from_vec(condensed))
}

/// Expand a condensed distance vector into the full symmetric n × n matrix.
pub fn squareform(condensed: &Array1<f64>, n: usize) -> Result<Array2<f64>> {
    let expected = n * n.saturating_sub(1) / 2;
    if condensed.len() != expected {
        return Err(FracDimError::invalid_input(format!(
            "condensed vector has {} entries, {} points need {}",
            condensed.len(),
            n,
            expected
        )));
    }

    let mut dm = Array2::<f64>::zeros((n, n));
    let mut k = 0;
    for i in 0..n {
        for j in i + 1..n {
            let dist = condensed[k];
            dm[[i, j]] = dist;
            dm[[j, i]] = dist;
            k += 1;
        }
    }

    Ok(dm)
}

/// Compute the Euclidean distance matrix of a point set.
pub fn pairwise_distances(points: &Array2<f64>) -> Result<Array2<f64>> {
    pairwise_distances_with(points, &Euclidean)
}

/// Compute the distance matrix of a point set under `metric`.
pub fn pairwise_distances_with<M: Metric + ?Sized>(
    points: &Array2<f64>,
    metric: &M,
) -> Result<Array2<f64>> {
    let condensed = condensed_distances(points, metric)?;
    debug!(
        n_points = points.nrows(),
        dimension = points.ncols(),
        n_pairs = condensed.len(),
        "computed condensed distances"
    );
    squareform(&condensed, points.nrows())
}

/// Largest entry of a distance matrix (0 for an empty matrix).
pub fn max_distance(dm: &Array2<f64>) -> f64 {
    dm.iter().cloned().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, ArrayView1};

    #[test]
    fn test_symmetric_zero_diagonal() {
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.5, 0.866],
            [2.0, -1.0]
        ];
        let dm = pairwise_distances(&points).unwrap();

        for i in 0..4 {
            assert_eq!(dm[[i, i]], 0.0);
            for j in 0..4 {
                assert_eq!(dm[[i, j]], dm[[j, i]]);
                assert!(dm[[i, j]] >= 0.0);
            }
        }
        assert!((dm[[0, 1]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_condensed_order() {
        let points = array![[0.0], [1.0], [3.0]];
        let condensed = condensed_distances(&points, &Euclidean).unwrap();
        assert_eq!(condensed, array![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_too_few_points() {
        let one = array![[1.0, 2.0]];
        assert!(matches!(pairwise_distances(&one), Err(FracDimError::InvalidInput(_))));

        let none = Array2::<f64>::zeros((0, 2));
        assert!(matches!(pairwise_distances(&none), Err(FracDimError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let points = array![[0.0, 0.0], [f64::NAN, 1.0]];
        assert!(matches!(pairwise_distances(&points), Err(FracDimError::InvalidInput(_))));

        let points = array![[0.0, f64::INFINITY], [1.0, 1.0]];
        assert!(matches!(pairwise_distances(&points), Err(FracDimError::InvalidInput(_))));
    }

    #[test]
    fn test_bad_metric_rejected() {
        let points = array![[0.0], [1.0]];
        let negative = |_: ArrayView1<f64>, _: ArrayView1<f64>| -> f64 { -1.0 };
        assert!(matches!(
            pairwise_distances_with(&points, &negative),
            Err(FracDimError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_squareform_length_mismatch() {
        let condensed = array![1.0, 2.0];
        assert!(squareform(&condensed, 3).is_err());
    }

    #[test]
    fn test_points_from_rows() {
        let points = points_from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        assert_eq!(points, array![[0.0, 1.0], [2.0, 3.0]]);

        assert!(points_from_rows(&[vec![0.0, 1.0], vec![2.0]]).is_err());
    }

    #[test]
    fn test_max_distance() {
        let points = array![[0.0, 0.0], [3.0, 4.0], [1.0, 1.0]];
        let dm = pairwise_distances(&points).unwrap();
        assert_eq!(max_distance(&dm), 5.0);
    }
}
