//! Distance metrics between two points.

use ndarray::ArrayView1;

/// A pairwise distance function.
///
/// Implemented for [`Euclidean`] and for any closure
/// `Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64`. Implementations should
/// return finite, non-negative values; anything else is rejected when the
/// distance matrix is built.
pub trait Metric {
    /// Distance between points `a` and `b`
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64;
}

/// Standard Euclidean (L2) distance
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        let mut dist_sq = 0.0;
        for (x, y) in a.iter().zip(b.iter()) {
            let diff = x - y;
            dist_sq += diff * diff;
        }
        dist_sq.sqrt()
    }
}

impl<F> Metric for F
where
    F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
{
    fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        self(a, b)
    }
}
