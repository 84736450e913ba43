//! Scaling Module: Log-Log Slopes and the Scaling-Region Fit
//!
//! In the scaling region the correlation sum behaves as a power law
//!
//!   C(ε) ∝ ε^ν
//!
//! so the local slope d ln C / d ln ε approximates the correlation
//! dimension ν. The slope curve is estimated by a centred finite
//! difference and then summarised by a least-squares parabola whose
//! vertex marks the plateau of the slope curve.

mod derivative;
mod quadratic;

pub use derivative::{LogDerivative, DEFAULT_DERIVATIVE_OFFSET};
pub use quadratic::QuadraticFit;
