//! Geometry Module: Point Sets and Pairwise Distances
//!
//! A point set X = {x₁, ..., x_M} ⊂ ℝᴰ is stored as an M × D matrix,
//! one point per row. The correlation sum only ever looks at pairwise
//! separations, so this module reduces the point set to its symmetric
//! distance matrix:
//!
//!   d_ij = ‖xᵢ - xⱼ‖
//!
//! The matrix is always built from the condensed (upper-triangle)
//! representation, which makes it symmetric with a zero diagonal by
//! construction regardless of the metric used.

mod distance;
mod metric;

pub use distance::{
    condensed_distances,
    max_distance,
    pairwise_distances,
    pairwise_distances_with,
    points_from_rows,
    squareform,
    validate_points,
};
pub use metric::{Euclidean, Metric};
