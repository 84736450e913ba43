//! End-to-end correlation-dimension estimation.

use ndarray::Array2;
use tracing::debug;

use super::config::EstimatorConfig;
use super::window::{crossing_index, Window};
use crate::correlation::CorrelationSum;
use crate::error::{FracDimError, Result};
use crate::geometry::{pairwise_distances_with, Euclidean, Metric};
use crate::scaling::{LogDerivative, QuadraticFit};

/// Result of a correlation-dimension estimate
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionEstimate {
    /// Maximum slope in the wide window (the dimension estimate)
    pub dimension: f64,
    /// Mean slope in the wide window
    pub window_mean: f64,
    /// Height of the fitted parabola's vertex
    pub vertex_height: f64,
    /// Maximum slope over the whole curve
    pub max_slope: f64,
    /// Mean slope in the narrow window (not part of `as_tuple`)
    pub narrow_mean: f64,
    /// First trimmed log-threshold index past the vertex
    pub crossing_index: usize,
    /// Fitted parabola
    pub fit: QuadraticFit,
}

impl DimensionEstimate {
    /// (dimension, [window mean, vertex height, max slope])
    pub fn as_tuple(&self) -> (f64, [f64; 3]) {
        (
            self.dimension,
            [self.window_mean, self.vertex_height, self.max_slope],
        )
    }
}

/// Stateless Grassberger-Procaccia estimator.
///
/// Every call recomputes all intermediate arrays from the input; nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct CorrelationDimension<M = Euclidean> {
    config: EstimatorConfig,
    metric: M,
}

impl Default for CorrelationDimension<Euclidean> {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrelationDimension<Euclidean> {
    /// Estimator with the default configuration and Euclidean distance
    pub fn new() -> Self {
        Self::with_config(EstimatorConfig::default())
    }

    /// Estimator with a custom configuration and Euclidean distance
    pub fn with_config(config: EstimatorConfig) -> Self {
        Self {
            config,
            metric: Euclidean,
        }
    }
}

impl<M: Metric> CorrelationDimension<M> {
    /// Replace the distance function.
    pub fn with_metric<N: Metric>(self, metric: N) -> CorrelationDimension<N> {
        CorrelationDimension {
            config: self.config,
            metric,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate the correlation dimension of an M × D point set.
    pub fn estimate(&self, points: &Array2<f64>) -> Result<DimensionEstimate> {
        self.config.validate()?;
        let dm = pairwise_distances_with(points, &self.metric)?;
        self.estimate_from_distances(&dm)
    }

    /// Estimate from a precomputed M × M distance matrix.
    pub fn estimate_from_distances(&self, dm: &Array2<f64>) -> Result<DimensionEstimate> {
        self.config.validate()?;
        let cs = self.correlation_sum(dm)?;
        let ld = LogDerivative::from_correlation_sum(&cs, self.config.derivative_offset)?;
        self.extract(&ld)
    }

    /// Correlation sum of a distance matrix under this configuration.
    pub fn correlation_sum(&self, dm: &Array2<f64>) -> Result<CorrelationSum> {
        CorrelationSum::compute(
            dm,
            self.config.n_thresholds,
            self.config.strategy,
            self.config.vectorize_limit,
        )
    }

    /// Fit the slope curve and read the dimension off the vertex region.
    pub fn extract(&self, ld: &LogDerivative) -> Result<DimensionEstimate> {
        let fit = QuadraticFit::fit(&ld.log_thresholds, &ld.slopes)?;
        let (centre, vertex_height) = fit.vertex()?;

        let len = ld.len();
        let idx = crossing_index(&ld.log_thresholds, centre);
        debug!(centre, vertex_height, crossing_index = idx, "located vertex");

        let wide = Window::around(idx, self.config.wide_half_width, len);
        let (dimension, window_mean) = match (wide.max(&ld.slopes), wide.mean(&ld.slopes)) {
            (Some(max), Some(mean)) => (max, mean),
            _ => {
                return Err(FracDimError::EmptyWindow {
                    crossing_index: idx,
                    half_width: self.config.wide_half_width,
                })
            }
        };

        let narrow = Window::around(idx, self.config.narrow_half_width, len);
        let narrow_mean = narrow.mean(&ld.slopes).ok_or(FracDimError::EmptyWindow {
            crossing_index: idx,
            half_width: self.config.narrow_half_width,
        })?;

        let estimate = DimensionEstimate {
            dimension,
            window_mean,
            vertex_height,
            max_slope: ld.max_slope(),
            narrow_mean,
            crossing_index: idx,
            fit,
        };
        debug!(
            dimension = estimate.dimension,
            window_mean = estimate.window_mean,
            narrow_mean = estimate.narrow_mean,
            max_slope = estimate.max_slope,
            "correlation dimension estimated"
        );

        Ok(estimate)
    }
}

/// Estimate with default settings, returning
/// `(dimension, [window mean, vertex height, max slope])`.
pub fn estimate_dimension(points: &Array2<f64>) -> Result<(f64, [f64; 3])> {
    CorrelationDimension::new()
        .estimate(points)
        .map(|e| e.as_tuple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::SumStrategy;
    use crate::samples::uniform_cube;
    use ndarray::{array, Array1, ArrayView1};

    #[test]
    fn test_too_few_points() {
        let est = CorrelationDimension::new();
        assert!(matches!(
            est.estimate(&array![[0.0, 0.0]]),
            Err(FracDimError::InvalidInput(_))
        ));
        assert!(matches!(
            est.estimate(&Array2::<f64>::zeros((0, 2))),
            Err(FracDimError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_identical_points() {
        let points = Array2::<f64>::from_elem((10, 3), 0.7);
        assert!(matches!(
            CorrelationDimension::new().estimate(&points),
            Err(FracDimError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_random_square_is_roughly_planar() {
        let points = uniform_cube(300, 2, 17).unwrap();
        let estimate = CorrelationDimension::new().estimate(&points).unwrap();

        assert!(estimate.dimension.is_finite());
        assert!(estimate.dimension > 1.4 && estimate.dimension < 2.9);
        assert!(estimate.max_slope >= estimate.dimension);
        assert!(estimate.window_mean <= estimate.dimension);
    }

    #[test]
    fn test_tuple_layout() {
        let points = uniform_cube(200, 2, 3).unwrap();
        let estimate = CorrelationDimension::new().estimate(&points).unwrap();
        let (dim, aux) = estimate.as_tuple();

        assert_eq!(dim, estimate.dimension);
        assert_eq!(aux, [estimate.window_mean, estimate.vertex_height, estimate.max_slope]);
        assert_eq!(estimate_dimension(&points).unwrap(), (dim, aux));
    }

    #[test]
    fn test_forced_strategies_agree() {
        let points = uniform_cube(150, 3, 5).unwrap();
        let vectorized = CorrelationDimension::with_config(
            EstimatorConfig::default().with_strategy(SumStrategy::Vectorized),
        )
        .estimate(&points)
        .unwrap();
        let iterative = CorrelationDimension::with_config(
            EstimatorConfig::default().with_strategy(SumStrategy::Iterative),
        )
        .estimate(&points)
        .unwrap();

        assert_eq!(vectorized, iterative);
    }

    #[test]
    fn test_custom_metric_used() {
        let points = uniform_cube(120, 2, 9).unwrap();
        let scaled = |a: ArrayView1<f64>, b: ArrayView1<f64>| -> f64 {
            2.0 * Euclidean.distance(a, b)
        };
        let plain = CorrelationDimension::new().estimate(&points).unwrap();
        let doubled = CorrelationDimension::new()
            .with_metric(scaled)
            .estimate(&points)
            .unwrap();

        // Uniform rescaling only shifts ln ε, so the slopes are unchanged
        assert!((plain.dimension - doubled.dimension).abs() < 1e-9);
        assert_eq!(plain.crossing_index, doubled.crossing_index);
    }

    #[test]
    fn test_huge_half_widths_do_not_panic() {
        let points = uniform_cube(100, 2, 4).unwrap();
        let config = EstimatorConfig { wide_half_width: usize::MAX, ..Default::default() };
        assert!(matches!(
            CorrelationDimension::with_config(config).estimate(&points),
            Err(FracDimError::EmptyWindow { half_width: usize::MAX, .. })
        ));

        let config = EstimatorConfig { narrow_half_width: usize::MAX, ..Default::default() };
        assert!(matches!(
            CorrelationDimension::with_config(config).estimate(&points),
            Err(FracDimError::EmptyWindow { half_width: usize::MAX, .. })
        ));
    }

    #[test]
    fn test_vertex_below_all_thresholds() {
        // Vertex at x = -10, left of every sample: the first sample crosses
        let log_thresholds = Array1::linspace(-5.0, 0.0, 100);
        let slopes = log_thresholds.mapv(|x| (x + 10.0) * (x + 10.0) / 50.0);
        let ld = LogDerivative { log_thresholds, slopes };

        let err = CorrelationDimension::new().extract(&ld).unwrap_err();
        assert_eq!(err, FracDimError::EmptyWindow { crossing_index: 0, half_width: 32 });
    }

    #[test]
    fn test_vertex_above_all_thresholds() {
        // Vertex at x = 10, right of every sample: no sample crosses, index 0
        let log_thresholds = Array1::linspace(-5.0, 0.0, 100);
        let slopes = log_thresholds.mapv(|x| (x - 10.0) * (x - 10.0) / 50.0);
        let ld = LogDerivative { log_thresholds, slopes };

        let err = CorrelationDimension::new().extract(&ld).unwrap_err();
        assert_eq!(err, FracDimError::EmptyWindow { crossing_index: 0, half_width: 32 });
    }

    #[test]
    fn test_small_crossing_index_reflects_window() {
        // Vertex just past the 5th sample: wide window is [27, 37)
        let log_thresholds = Array1::linspace(-5.0, 0.0, 101);
        let slopes = log_thresholds.mapv(|x| 1.0 - (x + 4.78) * (x + 4.78));
        let ld = LogDerivative { log_thresholds: log_thresholds.clone(), slopes: slopes.clone() };

        let estimate = CorrelationDimension::new().extract(&ld).unwrap();
        assert_eq!(estimate.crossing_index, 5);

        let window = slopes.slice(ndarray::s![27..37]);
        let expected = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(estimate.dimension, expected);
        assert_eq!(estimate.window_mean, window.mean().unwrap());
    }

    #[test]
    fn test_vertex_inside_curve() {
        // ν = 2 - (x + 2)², plateau at x = -2
        let log_thresholds = Array1::linspace(-6.0, 0.0, 200);
        let slopes = log_thresholds.mapv(|x| 2.0 - (x + 2.0) * (x + 2.0));
        let ld = LogDerivative { log_thresholds: log_thresholds.clone(), slopes };

        let estimate = CorrelationDimension::new().extract(&ld).unwrap();
        let expected_idx = crossing_index(&log_thresholds, -2.0);
        assert_eq!(estimate.crossing_index, expected_idx);
        assert!((estimate.vertex_height - 2.0).abs() < 1e-9);
        assert!(estimate.dimension <= 2.0 + 1e-12);
        assert!(estimate.dimension > 1.99);
        assert!(estimate.narrow_mean > estimate.window_mean);
    }
}
