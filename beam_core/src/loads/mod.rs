//! Load primitives
//!
//! The three kinds of load a beam can carry:
//!
//! - [`PointForce`] - concentrated force with resolved magnitude, direction
//!   and moment about the origin
//! - [`PointMoment`] - concentrated couple, clockwise positive
//! - [`DistributedLoad`] - intensity profile over a segment, see
//!   [`Distribution`]
//!
//! # Sign Convention
//!
//! - Force components: `x` positive to the right, `y` positive upward
//! - Moments: positive clockwise, taken about the left end of the beam
//! - Distributed intensity: signed like a force `y` component
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{Distribution, DistributedLoad, PointForce, PointMoment};
//!
//! let force = PointForce::vertical(-10_000.0, 8.0);
//! let couple = PointMoment::at(5000.0, 4.0);
//! let udl = DistributedLoad::between(Distribution::uniform(-2000.0), 0.0, 4.0);
//!
//! assert_eq!(force.moment_about_origin(), 80_000.0);
//! assert!(couple.is_clockwise());
//! assert_eq!(udl.position().x, 2.0);
//! ```

pub mod distributed;
pub mod force;
pub mod moment;

pub use distributed::{
    CustomDistribution,
    DistributedLoad,
    Distribution,
    LoadResultant,
    ResultantRule,
    SectionContribution,
    DEFAULT_INTEGRATION_STEPS,
};
pub use force::PointForce;
pub use moment::PointMoment;
