//! Analysis report
//!
//! A JSON-friendly summary of a resolved beam for front ends: reactions,
//! sums, finalized loads and the sampled diagrams.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::internal_forces::Diagram;
use super::resolver::{Reaction, ResolvedBeam, Resultants};
use crate::beam::SupportType;
use crate::loads::{LoadResultant, PointForce, PointMoment, ResultantRule};

/// Display data for one distributed load
#[derive(Debug, Clone, Serialize)]
pub struct DistributedSummary {
    pub kind: &'static str,
    pub label: String,
    pub start: f64,
    pub end: f64,
    /// Whether the load counted toward equilibrium
    pub active: bool,
    pub resultant: LoadResultant,
}

/// Everything a renderer or reviewer needs from one analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub label: String,
    pub generated: DateTime<Utc>,
    pub support: SupportType,
    pub length: f64,
    pub height: f64,
    pub resultant_rule: ResultantRule,
    /// Applied-load sums before reactions
    pub resultants: Resultants,
    pub reactions: Vec<Reaction>,
    /// Sums after reactions; zero up to rounding
    pub residuals: Resultants,
    /// Applied forces followed by reaction forces
    pub forces: Vec<PointForce>,
    pub moments: Vec<PointMoment>,
    pub distributed: Vec<DistributedSummary>,
    pub diagram: Diagram,
}

impl AnalysisReport {
    pub fn from_resolved(label: impl Into<String>, resolved: &ResolvedBeam, sample_points: usize) -> Self {
        let beam = resolved.beam();
        let rule = resolved.resultant_rule();

        let distributed = beam
            .distributed()
            .iter()
            .map(|d| DistributedSummary {
                kind: d.distribution().kind(),
                label: d.distribution().label(),
                start: d.start(),
                end: d.end(),
                active: d.is_within(beam.length()),
                resultant: d.resultant(rule),
            })
            .collect();

        AnalysisReport {
            label: label.into(),
            generated: Utc::now(),
            support: beam.support(),
            length: beam.length(),
            height: beam.height(),
            resultant_rule: rule,
            resultants: resolved.resultants(),
            reactions: resolved.reactions().to_vec(),
            residuals: resolved.residuals(),
            forces: beam.forces().to_vec(),
            moments: beam.moments().to_vec(),
            distributed,
            diagram: resolved.internal_forces().diagram(sample_points),
        }
    }
}
