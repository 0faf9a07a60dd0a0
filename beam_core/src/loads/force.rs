//! Point forces
//!
//! A concentrated force with its resolved magnitude, direction and moment
//! about the beam origin. All derived quantities are computed once at
//! construction; a force never changes afterwards.

use serde::Serialize;

use crate::errors::{require_finite, BeamResult};
use crate::geometry::Vec2;

/// A concentrated force acting on the beam
///
/// # Example
/// ```
/// use beam_core::loads::PointForce;
///
/// // 10 kN downward at x = 8
/// let f = PointForce::vertical(-10_000.0, 8.0);
/// assert_eq!(f.magnitude(), 10_000.0);
/// // Downward force right of the origin turns the beam clockwise (+)
/// assert_eq!(f.moment_about_origin(), 80_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointForce {
    components: Vec2,
    magnitude: f64,
    /// Radians from +x, `atan2(y, x)`
    direction: f64,
    position: Vec2,
    /// Clockwise-positive moment about the left end
    moment_about_origin: f64,
}

impl PointForce {
    /// Create a force from its components and point of application
    pub fn new(fx: f64, fy: f64, x: f64, y: f64) -> Self {
        let components = Vec2::new(fx, fy);
        let position = Vec2::new(x, y);
        PointForce {
            components,
            magnitude: components.norm(),
            direction: components.angle(),
            position,
            moment_about_origin: -fy * x,
        }
    }

    /// Vertical force on the beam axis (negative = downward)
    pub fn vertical(fy: f64, x: f64) -> Self {
        Self::new(0.0, fy, x, 0.0)
    }

    /// Horizontal force on the beam axis (negative = toward the origin)
    pub fn horizontal(fx: f64, x: f64) -> Self {
        Self::new(fx, 0.0, x, 0.0)
    }

    pub fn components(&self) -> Vec2 {
        self.components
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn moment_about_origin(&self) -> f64 {
        self.moment_about_origin
    }

    /// Whether the force is counted by equilibrium on a beam of this length.
    /// Forces past the right end are kept for display only.
    pub fn is_within(&self, length: f64) -> bool {
        self.position.x <= length
    }

    pub(crate) fn validate(&self, field: &str) -> BeamResult<()> {
        require_finite(format!("{}.fx", field), self.components.x)?;
        require_finite(format!("{}.fy", field), self.components.y)?;
        require_finite(format!("{}.x", field), self.position.x)?;
        require_finite(format!("{}.y", field), self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_derived_quantities() {
        let f = PointForce::new(3.0, -4.0, 2.0, 0.0);
        assert_eq!(f.magnitude(), 5.0);
        assert!((f.direction() - (-4.0f64).atan2(3.0)).abs() < 1e-12);
        assert_eq!(f.moment_about_origin(), 8.0);
    }

    #[test]
    fn test_upward_force_is_counterclockwise() {
        let f = PointForce::vertical(100.0, 5.0);
        assert_eq!(f.moment_about_origin(), -500.0);
        assert!((f.direction() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_force_has_no_moment() {
        let f = PointForce::horizontal(-250.0, 0.0);
        assert_eq!(f.moment_about_origin(), 0.0);
        assert_eq!(f.components().y, 0.0);
    }

    #[test]
    fn test_is_within() {
        let f = PointForce::vertical(-1.0, 10.0);
        assert!(f.is_within(10.0));
        assert!(!f.is_within(9.99));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let f = PointForce::new(0.0, f64::NAN, 1.0, 0.0);
        assert!(f.validate("forces[0]").is_err());
        assert!(PointForce::vertical(-5.0, 1.0).validate("forces[0]").is_ok());
    }
}
