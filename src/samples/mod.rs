//! Samples Module: Reference Point Clouds with Known Dimension
//!
//! Seeded generators for point sets whose correlation dimension is known,
//! used to sanity-check the estimator:
//!
//! | Generator         | Embedding | ν      |
//! |-------------------|-----------|--------|
//! | `uniform_cube`    | ℝᴰ        | D      |
//! | `line_segment`    | ℝᴰ        | 1      |
//! | `circle`          | ℝ²        | 1      |
//! | `HenonMap`        | ℝ²        | ≈ 1.21 |

mod clouds;
mod henon;

pub use clouds::{circle, line_segment, uniform_cube};
pub use henon::{henon_attractor, HenonMap};
