//! Index windows around the vertex crossing.

use ndarray::{s, Array1, ArrayView1};

/// Index of the first log-threshold strictly above `centre`.
///
/// Returns 0 when no value exceeds `centre`, the same answer as when the
/// very first value does.
pub fn crossing_index(log_thresholds: &Array1<f64>, centre: f64) -> usize {
    log_thresholds.iter().position(|&x| x > centre).unwrap_or(0)
}

/// Half-open index range [start, end) around a crossing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Window `[|idx - half_width|, min(idx + half_width, len))`.
    ///
    /// Near the lower boundary the start is reflected rather than clamped
    /// to 0, so for `idx = 0` the window is `[half_width, half_width)`
    /// and holds nothing.
    pub fn around(idx: usize, half_width: usize, len: usize) -> Self {
        Self {
            start: idx.abs_diff(half_width),
            end: idx.saturating_add(half_width).min(len),
        }
    }

    /// Number of indices covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the window covers no index
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// View of `data` inside the window (empty when the window is)
    pub fn view<'a>(&self, data: &'a Array1<f64>) -> ArrayView1<'a, f64> {
        let end = self.end.min(data.len());
        let start = self.start.min(end);
        data.slice(s![start..end])
    }

    /// Mean of `data` over the window
    pub fn mean(&self, data: &Array1<f64>) -> Option<f64> {
        self.view(data).mean()
    }

    /// Maximum of `data` over the window
    pub fn max(&self, data: &Array1<f64>) -> Option<f64> {
        self.view(data).iter().cloned().reduce(f64::max)
    }
}
