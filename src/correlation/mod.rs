//! Correlation Module: Correlation Sums over a Threshold Grid
//!
//! For a distance matrix D of M points, the correlation sum at scale ε is
//! the fraction of ordered pairs (self-pairs included) closer than ε:
//!
//!   C(ε) = (1/M²) Σᵢ Σⱼ Θ(ε - dᵢⱼ)
//!
//! where Θ is the strict Heaviside step (dᵢⱼ < ε). C(ε) is evaluated on a
//! fixed grid of linearly spaced thresholds spanning (0, max dᵢⱼ].
//!
//! ## Two Strategies
//!
//! - `Vectorized`: one pass over the matrix, binning every distance by the
//!   first threshold that exceeds it, then a cumulative sum. Needs one
//!   counter per threshold, O(M² log K) time.
//!
//! - `Iterative`: one full matrix comparison per threshold, O(M² K) time,
//!   no storage beyond the output.
//!
//! Neither path materialises an M × M × K comparison tensor, so both have
//! the same memory footprint and the `Auto` switch at M = 1024 only trades
//! speed. Both count integer pair totals before normalising, so their
//! outputs are bit-identical.

mod grid;
mod sum;

pub use grid::ThresholdGrid;
pub use sum::{CorrelationSum, SumStrategy, DEFAULT_VECTORIZE_LIMIT};
