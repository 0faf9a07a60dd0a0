//! # Beam Documents
//!
//! The `BeamDocument` struct is the on-disk form of one analysis: metadata,
//! solver settings and the beam description. Documents are human-readable
//! JSON and may be written by hand; everything except the beam length has a
//! default.
//!
//! ## Structure
//!
//! ```text
//! BeamDocument
//! ├── meta: DocumentMetadata (version, id, label, timestamps)
//! ├── settings: AnalysisSettings (resultant rule, sampling, tolerance)
//! └── beam: BeamInput (support flags, geometry, loads)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::document::BeamDocument;
//!
//! let json = r#"{
//!     "meta": { "label": "Cantilever demo" },
//!     "beam": {
//!         "support": { "cantilever": true },
//!         "length": 600.0,
//!         "forces": [ { "fy": -100.0, "x": 600.0 } ],
//!         "moments": [ { "magnitude": 5000.0, "x": 400.0 } ]
//!     }
//! }"#;
//!
//! let doc: BeamDocument = serde_json::from_str(json).unwrap();
//! let resolved = doc.analyze().unwrap();
//! assert_eq!(resolved.reactions().len(), 2);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{resolve, AnalysisReport, ResolvedBeam};
use crate::beam::{Beam, SupportFlags, SupportType};
use crate::errors::{BeamError, BeamResult};
use crate::loads::{DistributedLoad, Distribution, PointForce, PointMoment, ResultantRule};

/// Current schema version for beam documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Upper bound on [`AnalysisSettings::sample_points`]
pub const MAX_SAMPLE_POINTS: usize = 100_000;

/// Root document container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDocument {
    #[serde(default)]
    pub meta: DocumentMetadata,

    #[serde(default)]
    pub settings: AnalysisSettings,

    pub beam: BeamInput,
}

impl BeamDocument {
    /// Create a document with default settings
    pub fn new(label: impl Into<String>, beam: BeamInput) -> Self {
        BeamDocument {
            meta: DocumentMetadata::new(label),
            settings: AnalysisSettings::default(),
            beam,
        }
    }

    /// Build the beam and resolve it with this document's settings.
    ///
    /// Support flags are checked first, so an ambiguous support type fails
    /// before any other validation or summation.
    pub fn analyze(&self) -> BeamResult<ResolvedBeam> {
        let beam = self.beam.to_beam()?;
        resolve(beam, &self.settings)
    }

    /// Analyze and summarize for front ends
    pub fn report(&self) -> BeamResult<AnalysisReport> {
        let resolved = self.analyze()?;
        Ok(AnalysisReport::from_resolved(
            self.meta.label.clone(),
            &resolved,
            self.settings.sample_points,
        ))
    }
}

/// Document metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Schema version (for migration compatibility)
    #[serde(default = "schema_version")]
    pub version: String,

    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// User label for the beam (e.g. "B-1")
    #[serde(default)]
    pub label: String,

    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
}

impl DocumentMetadata {
    pub fn new(label: impl Into<String>) -> Self {
        let now = Utc::now();
        DocumentMetadata {
            version: SCHEMA_VERSION.to_string(),
            id: Uuid::new_v4(),
            label: label.into(),
            created: now,
            modified: now,
        }
    }
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        DocumentMetadata::new("")
    }
}

fn schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// How distributed loads become resultant forces
    pub resultant_rule: ResultantRule,

    /// Evenly spaced samples per diagram (critical points come on top)
    pub sample_points: usize,

    /// Sums at or below this magnitude are treated as zero when deciding
    /// whether a reaction is needed
    pub zero_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            resultant_rule: ResultantRule::FarEndSample,
            sample_points: 101,
            zero_tolerance: 0.0,
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> BeamResult<()> {
        self.resultant_rule.validate()?;
        if self.sample_points < 2 {
            return Err(BeamError::invalid_input(
                "sample_points",
                self.sample_points.to_string(),
                "Diagrams need at least 2 samples",
            ));
        }
        if self.sample_points > MAX_SAMPLE_POINTS {
            return Err(BeamError::invalid_input(
                "sample_points",
                self.sample_points.to_string(),
                format!("Diagrams are capped at {} samples", MAX_SAMPLE_POINTS),
            ));
        }
        if !(self.zero_tolerance >= 0.0) || !self.zero_tolerance.is_finite() {
            return Err(BeamError::invalid_input(
                "zero_tolerance",
                self.zero_tolerance.to_string(),
                "Tolerance must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Beam description as written in documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamInput {
    #[serde(default)]
    pub support: SupportFlags,

    pub length: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default)]
    pub forces: Vec<ForceInput>,

    #[serde(default)]
    pub distributed: Vec<DistributedInput>,

    #[serde(default)]
    pub moments: Vec<MomentInput>,
}

fn default_height() -> f64 {
    1.0
}

impl BeamInput {
    /// An unloaded beam description
    pub fn new(support: SupportType, length: f64, height: f64) -> Self {
        BeamInput {
            support: support.into(),
            length,
            height,
            forces: Vec::new(),
            distributed: Vec::new(),
            moments: Vec::new(),
        }
    }

    /// Convert into a [`Beam`].
    ///
    /// # Errors
    /// [`BeamError::InvalidBeamType`] when the support flags do not name
    /// exactly one support type.
    pub fn to_beam(&self) -> BeamResult<Beam> {
        let beam = Beam::from_flags(self.support, self.length, self.height)?;
        let beam = self.forces.iter().fold(beam, |b, f| b.with_force(f.to_load()));
        let beam = self
            .distributed
            .iter()
            .fold(beam, |b, d| b.with_distributed(d.to_load()));
        Ok(self.moments.iter().fold(beam, |b, m| b.with_moment(m.to_load())))
    }
}

/// A point force entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceInput {
    #[serde(default)]
    pub fx: f64,
    #[serde(default)]
    pub fy: f64,
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl ForceInput {
    pub fn to_load(&self) -> PointForce {
        PointForce::new(self.fx, self.fy, self.x, self.y)
    }
}

/// A distributed load entry. `x` is the segment center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedInput {
    pub distribution: Distribution,
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub length: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl DistributedInput {
    pub fn to_load(&self) -> DistributedLoad {
        DistributedLoad::new(self.distribution.clone(), self.x, self.y, self.length)
    }
}

/// An applied moment entry, clockwise positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentInput {
    pub magnitude: f64,
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl MomentInput {
    pub fn to_load(&self) -> PointMoment {
        PointMoment::new(self.magnitude, self.x, self.y)
    }
}
