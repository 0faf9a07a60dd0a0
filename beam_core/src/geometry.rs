//! # Geometry
//!
//! A lightweight 2D vector used for load positions and force components.
//!
//! ## Coordinate System
//!
//! - `x` runs along the beam from the left end (origin) to the right end
//! - `y` is positive upward
//! - Moments are positive clockwise
//!
//! Values are unitless: any consistent unit system works (N and m, lb and ft).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::geometry::Vec2;
//!
//! let a = Vec2::new(3.0, 4.0);
//! assert_eq!(a.norm(), 5.0);
//! assert!((Vec2::new(0.0, -1.0).angle() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// A point or vector in the beam plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the +x axis in radians, counterclockwise (`atan2(y, x)`)
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}
