//! # beam_core - 2D Beam Statics Engine
//!
//! `beam_core` resolves an idealized 2D beam (simply supported or cantilever)
//! under point forces, distributed loads and applied moments. It produces the
//! support reactions and the shear-force `V(x)` and bending-moment `M(x)`
//! functions along the span.
//!
//! ## Design Philosophy
//!
//! - **One-shot**: a beam is built, resolved once, and read thereafter
//! - **No surprise mutation**: resolution consumes the beam and returns an
//!   immutable [`ResolvedBeam`] snapshot
//! - **JSON-First**: documents, reports and errors all serialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{resolve, AnalysisSettings, Beam, PointForce, SupportType};
//!
//! let beam = Beam::new(SupportType::SimplySupported, 10.0, 1.0)
//!     .with_force(PointForce::vertical(-10_000.0, 8.0));
//!
//! let resolved = resolve(beam, &AnalysisSettings::default()).unwrap();
//!
//! // Sagging moment under the load: R1 * 8 = 2000 * 8
//! assert!((resolved.moment_at(8.0) - 16_000.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Point forces, point moments, distributed loads
//! - [`beam`] - Beam model and support types
//! - [`analysis`] - Equilibrium resolver, internal forces, reports
//! - [`document`] - JSON beam documents and solver settings
//! - [`file_io`] - Atomic document and report files
//! - [`geometry`] - 2D vector type
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod document;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod loads;

// Re-export commonly used types at crate root for convenience
pub use analysis::{resolve, AnalysisReport, InternalForces, Reaction, ReactionKind, ResolvedBeam, Resultants};
pub use beam::{Beam, SupportFlags, SupportType};
pub use document::{AnalysisSettings, BeamDocument, BeamInput};
pub use errors::{BeamError, BeamResult};
pub use file_io::{load_document, save_document, save_report};
pub use loads::{DistributedLoad, Distribution, PointForce, PointMoment, ResultantRule};
