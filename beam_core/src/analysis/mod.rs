//! # Beam Analysis
//!
//! The statics solver proper:
//!
//! - [`resolver`] - sums the applied loads and synthesizes reactions
//! - [`internal_forces`] - shear `V(x)` and moment `M(x)` of the resolved beam
//! - [`report`] - serializable summary for front ends
//!
//! Resolution happens once and yields a read-only [`ResolvedBeam`]; the
//! internal-force functions are derived from that snapshot and never modify
//! it.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::analysis::resolve;
//! use beam_core::beam::{Beam, SupportType};
//! use beam_core::document::AnalysisSettings;
//! use beam_core::loads::{DistributedLoad, Distribution};
//!
//! let beam = Beam::new(SupportType::SimplySupported, 12.0, 1.0)
//!     .with_distributed(DistributedLoad::between(Distribution::uniform(-100.0), 0.0, 12.0));
//!
//! let resolved = resolve(beam, &AnalysisSettings::default()).unwrap();
//! let forces = resolved.internal_forces();
//!
//! // wL^2/8 at midspan
//! assert!((forces.moment_at(6.0) - 1800.0).abs() < 1e-9);
//! ```

pub mod internal_forces;
pub mod report;
pub mod resolver;

pub use internal_forces::{Diagram, Extrema, InternalForces};
pub use report::{AnalysisReport, DistributedSummary};
pub use resolver::{resolve, Reaction, ReactionKind, ResolvedBeam, Resultants};
