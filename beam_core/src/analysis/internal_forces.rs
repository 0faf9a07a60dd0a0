//! Shear and Bending Moment
//!
//! `V(x)` and `M(x)` of a resolved beam by superposition of every load at or
//! left of the section.
//!
//! ## Sign Convention
//! - Shear: sum of vertical forces left of the section, upward positive
//! - Moment: clockwise moment of the loads left of the section about the
//!   section, which makes sagging positive
//! - `dM/dx = V` between load points; on a resolved beam `V(L) = M(L) = 0`
//!
//! Only loads that took part in equilibrium are superposed, so display-only
//! loads past the span never bend the beam. Superposing every stored load
//! instead would leave `V(L)` and `M(L)` non-zero whenever a distributed load
//! hangs off the end, since the reactions never saw it.

use serde::Serialize;

use super::resolver::ResolvedBeam;
use crate::beam::Beam;
use crate::loads::ResultantRule;

/// Evaluator for `V(x)` and `M(x)`. Borrows the resolved beam; cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct InternalForces<'a> {
    beam: &'a Beam,
    rule: ResultantRule,
}

impl<'a> InternalForces<'a> {
    pub fn new(resolved: &'a ResolvedBeam) -> Self {
        InternalForces {
            beam: resolved.beam(),
            rule: resolved.resultant_rule(),
        }
    }

    /// Shear force at `x`, defined on `[0, length]`
    pub fn shear_at(&self, x: f64) -> f64 {
        let point: f64 = self
            .beam
            .active_forces()
            .filter(|f| f.position().x <= x)
            .map(|f| f.components().y)
            .sum();

        let distributed: f64 = self
            .beam
            .active_distributed()
            .filter_map(|d| d.contribution_at(x, self.rule))
            .map(|c| c.shear)
            .sum();

        point + distributed
    }

    /// Bending moment at `x`, defined on `[0, length]`
    pub fn moment_at(&self, x: f64) -> f64 {
        let point: f64 = self
            .beam
            .active_forces()
            .filter(|f| f.position().x <= x)
            .map(|f| f.components().y * (x - f.position().x))
            .sum();

        let distributed: f64 = self
            .beam
            .active_distributed()
            .filter_map(|d| d.contribution_at(x, self.rule))
            .map(|c| c.moment)
            .sum();

        let applied: f64 = self
            .beam
            .active_moments()
            .filter(|m| m.position().x <= x)
            .map(|m| m.magnitude())
            .sum();

        point + distributed + applied
    }

    /// `V` as a standalone function
    pub fn shear_fn(self) -> impl Fn(f64) -> f64 + Send + Sync + 'a {
        move |x| self.shear_at(x)
    }

    /// `M` as a standalone function
    pub fn moment_fn(self) -> impl Fn(f64) -> f64 + Send + Sync + 'a {
        move |x| self.moment_at(x)
    }

    /// Sample both functions along the span.
    ///
    /// Takes `sample_points` evenly spaced points (at least 2) plus each load
    /// position and distributed-load edge, with a point just either side so
    /// jumps show up in plots.
    pub fn diagram(&self, sample_points: usize) -> Diagram {
        let positions = self.sample_positions(sample_points.max(2));

        let shear: Vec<(f64, f64)> = positions.iter().map(|&x| (x, self.shear_at(x))).collect();
        let moment: Vec<(f64, f64)> = positions.iter().map(|&x| (x, self.moment_at(x))).collect();
        let extrema = Extrema::scan(&shear, &moment);

        Diagram {
            shear,
            moment,
            extrema,
        }
    }

    fn sample_positions(&self, sample_points: usize) -> Vec<f64> {
        let length = self.beam.length();
        let mut positions: Vec<f64> = (0..sample_points)
            .map(|i| length * i as f64 / (sample_points - 1) as f64)
            .collect();

        let critical = self
            .beam
            .active_forces()
            .map(|f| f.position().x)
            .chain(self.beam.active_moments().map(|m| m.position().x))
            .chain(
                self.beam
                    .active_distributed()
                    .flat_map(|d| [d.start(), d.end()]),
            );

        let epsilon = length * 0.001;
        for pos in critical {
            if pos > epsilon && pos < length - epsilon {
                positions.extend([pos - epsilon, pos, pos + epsilon]);
            }
        }

        positions.sort_by(f64::total_cmp);
        positions.dedup_by(|a, b| (*a - *b).abs() < epsilon / 2.0);
        positions
    }
}

/// Sampled `V` and `M` as `(x, value)` pairs, sorted by `x`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub shear: Vec<(f64, f64)>,
    pub moment: Vec<(f64, f64)>,
    pub extrema: Extrema,
}

/// Peaks found in a [`Diagram`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Extrema {
    /// Shear with the largest magnitude (signed)
    pub peak_shear: f64,
    pub peak_shear_position: f64,
    pub max_moment: f64,
    pub max_moment_position: f64,
    pub min_moment: f64,
    pub min_moment_position: f64,
}

impl Extrema {
    fn scan(shear: &[(f64, f64)], moment: &[(f64, f64)]) -> Self {
        let mut extrema = Extrema::default();

        if let Some(&(x, v)) = shear.iter().max_by(|a, b| a.1.abs().total_cmp(&b.1.abs())) {
            extrema.peak_shear = v;
            extrema.peak_shear_position = x;
        }
        if let Some(&(x, m)) = moment.iter().max_by(|a, b| a.1.total_cmp(&b.1)) {
            extrema.max_moment = m;
            extrema.max_moment_position = x;
        }
        if let Some(&(x, m)) = moment.iter().min_by(|a, b| a.1.total_cmp(&b.1)) {
            extrema.min_moment = m;
            extrema.min_moment_position = x;
        }

        extrema
    }
}
