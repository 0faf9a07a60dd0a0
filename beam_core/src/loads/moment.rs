//! Applied point moments

use serde::Serialize;

use crate::errors::{require_finite, BeamResult};
use crate::geometry::Vec2;

/// A concentrated couple applied to the beam. Positive = clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointMoment {
    magnitude: f64,
    position: Vec2,
}

impl PointMoment {
    pub fn new(magnitude: f64, x: f64, y: f64) -> Self {
        PointMoment {
            magnitude,
            position: Vec2::new(x, y),
        }
    }

    /// Moment on the beam axis
    pub fn at(magnitude: f64, x: f64) -> Self {
        Self::new(magnitude, x, 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_clockwise(&self) -> bool {
        self.magnitude > 0.0
    }

    /// Whether the moment is counted by equilibrium on a beam of this length
    pub fn is_within(&self, length: f64) -> bool {
        self.position.x <= length
    }

    pub(crate) fn validate(&self, field: &str) -> BeamResult<()> {
        require_finite(format!("{}.magnitude", field), self.magnitude)?;
        require_finite(format!("{}.x", field), self.position.x)?;
        require_finite(format!("{}.y", field), self.position.y)
    }
}
