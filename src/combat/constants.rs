//! Penetration curve constants
//!
//! The curve is a function of `x = attack / defense`. Three quadratic
//! segments join at the breakpoints below and saturate outside [0, 8].

/// Below this ratio penetration is flat
pub const LOW_RATIO: f64 = 0.125;
/// End of the rising (convex) segment
pub const MID_RATIO: f64 = 1.0;
/// End of the first concave segment
pub const KNEE_RATIO: f64 = 2.5;
/// Above this ratio penetration saturates
pub const HIGH_RATIO: f64 = 8.0;

/// Penetration (%) for any positive ratio below `LOW_RATIO`
pub const FLOOR_PERCENT: f64 = 10.0;
/// Penetration (%) at `KNEE_RATIO`
pub const KNEE_PERCENT: f64 = 70.0;
/// Penetration (%) at and above `HIGH_RATIO`
pub const CAP_PERCENT: f64 = 90.0;

/// Curvature of the segment on [LOW_RATIO, MID_RATIO)
pub const LOW_CURVE: f64 = 1920.0 / 49.0;
/// Curvature of the segment on [MID_RATIO, KNEE_RATIO)
pub const MID_CURVE: f64 = -40.0 / 3.0;
/// Curvature of the segment on [KNEE_RATIO, HIGH_RATIO]
pub const HIGH_CURVE: f64 = -80.0 / 121.0;
