//! Equilibrium Resolution
//!
//! Sums the applied loads of a [`Beam`] and synthesizes the reactions that
//! bring it to static equilibrium (ΣFx = 0, ΣFy = 0, ΣM = 0).
//!
//! ## Reactions
//!
//! | Support          | Net moment       | Net Fx        | Net Fy (after R2) |
//! |------------------|------------------|---------------|-------------------|
//! | Simply supported | `R2` at `x = L`  | `R3` at `x = 0` | `R1` at `x = 0` |
//! | Cantilever       | fixed-end moment at `x = 0` | `R3` at `x = 0` | `R1` at `x = 0` |
//!
//! A sum that is already zero produces no reaction. Loads past the span are
//! left out of every sum but stay on the beam.
//!
//! ## Example
//! ```rust
//! use beam_core::analysis::{resolve, ReactionKind};
//! use beam_core::beam::{Beam, SupportType};
//! use beam_core::document::AnalysisSettings;
//! use beam_core::loads::PointForce;
//!
//! let beam = Beam::new(SupportType::SimplySupported, 10.0, 1.0)
//!     .with_force(PointForce::vertical(-10_000.0, 8.0));
//!
//! let resolved = resolve(beam, &AnalysisSettings::default()).unwrap();
//! let left = resolved.reaction(ReactionKind::LeftVertical).unwrap();
//! let right = resolved.reaction(ReactionKind::RightVertical).unwrap();
//! assert!((left.value - 2000.0).abs() < 1e-9);
//! assert!((right.value - 8000.0).abs() < 1e-9);
//! ```

use log::{debug, warn};
use serde::Serialize;

use super::internal_forces::InternalForces;
use crate::beam::{Beam, SupportType};
use crate::document::AnalysisSettings;
use crate::errors::{BeamError, BeamResult};
use crate::geometry::Vec2;
use crate::loads::{PointForce, PointMoment, ResultantRule};

/// Net force and moment of a set of loads
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Resultants {
    pub force_x: f64,
    pub force_y: f64,
    /// Clockwise-positive moment about the origin
    pub moment: f64,
}

impl Resultants {
    /// Sum every load of `beam` that takes part in equilibrium
    pub fn of(beam: &Beam, rule: ResultantRule) -> Self {
        let mut sums = Resultants::default();

        for force in beam.active_forces() {
            sums.moment += force.moment_about_origin();
            sums.force_y += force.components().y;
            sums.force_x += force.components().x;
        }

        for moment in beam.active_moments() {
            sums.moment += moment.magnitude();
        }

        for load in beam.active_distributed() {
            let resultant = load.resultant(rule);
            sums.force_y += resultant.force;
            sums.moment += resultant.moment_about_origin;
        }

        sums
    }

    pub fn is_finite(&self) -> bool {
        self.force_x.is_finite() && self.force_y.is_finite() && self.moment.is_finite()
    }

    /// All three sums within `tolerance` of zero
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        self.force_x.abs() <= tolerance
            && self.force_y.abs() <= tolerance
            && self.moment.abs() <= tolerance
    }
}

/// Which support reaction a synthesized load represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReactionKind {
    /// R1: vertical force at the left end
    LeftVertical,
    /// R2: vertical force at the right end (simply supported only)
    RightVertical,
    /// R3: horizontal force at the left end
    LeftHorizontal,
    /// Fixed-end moment at the left end (cantilever only)
    FixedEndMoment,
}

impl ReactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReactionKind::LeftVertical => "R1",
            ReactionKind::RightVertical => "R2",
            ReactionKind::LeftHorizontal => "R3",
            ReactionKind::FixedEndMoment => "M1",
        }
    }
}

/// A reaction synthesized by [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reaction {
    pub kind: ReactionKind,
    pub position: Vec2,
    /// Signed force component (y for vertical, x for horizontal) or
    /// clockwise-positive moment
    pub value: f64,
}

/// A beam in equilibrium: the original loads plus synthesized reactions.
///
/// Read-only. `V(x)` and `M(x)` are available through
/// [`internal_forces`](ResolvedBeam::internal_forces) and may be sampled from
/// any number of threads.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedBeam {
    beam: Beam,
    resultants: Resultants,
    reactions: Vec<Reaction>,
    resultant_rule: ResultantRule,
}

impl ResolvedBeam {
    /// The beam with reactions appended to its force and moment collections
    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    /// Sums of the applied loads before any reaction was added
    pub fn resultants(&self) -> Resultants {
        self.resultants
    }

    /// Synthesized reactions in the order they were appended
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn reaction(&self, kind: ReactionKind) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.kind == kind)
    }

    pub fn resultant_rule(&self) -> ResultantRule {
        self.resultant_rule
    }

    /// Sums over the finalized load set. Zero up to rounding.
    pub fn residuals(&self) -> Resultants {
        Resultants::of(&self.beam, self.resultant_rule)
    }

    /// Shear and moment functions of this beam
    pub fn internal_forces(&self) -> InternalForces<'_> {
        InternalForces::new(self)
    }

    /// `V(x)`
    pub fn shear_at(&self, x: f64) -> f64 {
        self.internal_forces().shear_at(x)
    }

    /// `M(x)`
    pub fn moment_at(&self, x: f64) -> f64 {
        self.internal_forces().moment_at(x)
    }
}

/// Bring `beam` to equilibrium.
///
/// Consumes the beam so the caller can't observe the reactions being
/// appended; the returned snapshot owns the finalized load set.
///
/// # Errors
/// [`BeamError::InvalidInput`](crate::errors::BeamError::InvalidInput) when
/// the beam or the settings hold values the solver cannot use. Nothing is
/// resolved in that case.
pub fn resolve(beam: Beam, settings: &AnalysisSettings) -> BeamResult<ResolvedBeam> {
    settings.validate()?;
    beam.validate()?;
    debug!("resolving {} beam, length {}", beam.support(), beam.length());

    log_skipped_loads(&beam);

    let rule = settings.resultant_rule;
    let tolerance = settings.zero_tolerance;
    let resultants = Resultants::of(&beam, rule);
    debug!(
        "resultants: Fx = {}, Fy = {}, M = {}",
        resultants.force_x, resultants.force_y, resultants.moment
    );
    // Custom intensities are only known once sampled
    if !resultants.is_finite() {
        return Err(BeamError::invalid_input(
            "resultants",
            format!("({}, {}, {})", resultants.force_x, resultants.force_y, resultants.moment),
            "Distributed load produced a non-finite resultant",
        ));
    }

    let length = beam.length();
    let support = beam.support();
    let mut force_y = resultants.force_y;
    let mut right_vertical = None;
    let mut fixed_moment = None;

    if resultants.moment.abs() > tolerance {
        match support {
            SupportType::SimplySupported => {
                // Upward R2 at L turns counterclockwise, cancelling a clockwise sum
                let r2 = PointForce::vertical(resultants.moment / length, length);
                force_y += r2.components().y;
                right_vertical = Some(r2);
            }
            SupportType::Cantilever => {
                fixed_moment = Some(PointMoment::at(-resultants.moment, 0.0));
            }
        }
    }

    let left_horizontal = (resultants.force_x.abs() > tolerance)
        .then(|| PointForce::horizontal(-resultants.force_x, 0.0));

    let left_vertical = (force_y.abs() > tolerance).then(|| PointForce::vertical(-force_y, 0.0));

    let mut beam = beam;
    let mut reactions = Vec::with_capacity(4);

    let forces = [
        (ReactionKind::LeftVertical, left_vertical),
        (ReactionKind::RightVertical, right_vertical),
        (ReactionKind::LeftHorizontal, left_horizontal),
    ];
    for (kind, force) in forces {
        if let Some(force) = force {
            let value = match kind {
                ReactionKind::LeftHorizontal => force.components().x,
                _ => force.components().y,
            };
            debug!("{} = {} at x = {}", kind.label(), value, force.position().x);
            reactions.push(Reaction {
                kind,
                position: force.position(),
                value,
            });
            beam.push_reaction_force(force);
        }
    }

    if let Some(moment) = fixed_moment {
        debug!("{} = {} at x = 0", ReactionKind::FixedEndMoment.label(), moment.magnitude());
        reactions.push(Reaction {
            kind: ReactionKind::FixedEndMoment,
            position: moment.position(),
            value: moment.magnitude(),
        });
        beam.push_reaction_moment(moment);
    }

    Ok(ResolvedBeam {
        beam,
        resultants,
        reactions,
        resultant_rule: rule,
    })
}

fn log_skipped_loads(beam: &Beam) {
    let length = beam.length();
    for (i, force) in beam.forces().iter().enumerate() {
        if !force.is_within(length) {
            warn!("forces[{}] at x = {} is past the span; display only", i, force.position().x);
        }
    }
    for (i, moment) in beam.moments().iter().enumerate() {
        if !moment.is_within(length) {
            warn!("moments[{}] at x = {} is past the span; display only", i, moment.position().x);
        }
    }
    for (i, load) in beam.distributed().iter().enumerate() {
        if !load.is_within(length) {
            warn!(
                "distributed[{}] spans [{}, {}] outside [0, {}]; display only",
                i,
                load.start(),
                load.end(),
                length
            );
        }
    }
}
