//! Distributed loads
//!
//! A distributed load is a segment of the beam carrying an intensity
//! (force per unit length) that may vary along the segment. The segment is
//! described by its center and length; the intensity function takes the
//! local offset `s` measured from the segment start (`0..=length`).
//!
//! ## Resultants
//!
//! Two rules turn an intensity into a resultant force:
//!
//! - [`ResultantRule::FarEndSample`] samples the intensity at the far end of
//!   the (partial) segment and multiplies by its length, acting at the
//!   segment midpoint. Exact for uniform loads only.
//! - [`ResultantRule::Integrated`] integrates the intensity and its first
//!   moment with composite Simpson's rule.
//!
//! The resolver and the internal-force evaluator always use the same rule so
//! that reactions and diagrams agree.

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{require_finite, BeamError, BeamResult};
use crate::geometry::Vec2;

/// Default panel count for [`ResultantRule::Integrated`]
pub const DEFAULT_INTEGRATION_STEPS: usize = 64;

/// Upper bound on [`ResultantRule::Integrated`] panels
pub const MAX_INTEGRATION_STEPS: usize = 1_000_000;

/// How a distributed intensity is reduced to a resultant force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ResultantRule {
    /// `w(len) * len` acting at the segment midpoint
    #[default]
    FarEndSample,
    /// Composite Simpson's rule with `steps` panels
    Integrated { steps: usize },
}

impl ResultantRule {
    /// Simpson integration with the default panel count
    pub fn integrated() -> Self {
        ResultantRule::Integrated {
            steps: DEFAULT_INTEGRATION_STEPS,
        }
    }

    pub(crate) fn validate(&self) -> BeamResult<()> {
        match self {
            ResultantRule::Integrated { steps } if *steps < 2 => Err(BeamError::invalid_input(
                "resultant_rule.steps",
                steps.to_string(),
                "Integration needs at least 2 panels",
            )),
            ResultantRule::Integrated { steps } if *steps > MAX_INTEGRATION_STEPS => {
                Err(BeamError::invalid_input(
                    "resultant_rule.steps",
                    steps.to_string(),
                    format!("Integration is capped at {} panels", MAX_INTEGRATION_STEPS),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Intensity profile along a distributed load segment.
///
/// Negative intensity acts downward, like a negative force component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    /// Constant intensity
    Uniform { intensity: f64 },

    /// Linear from `start` (at s = 0) to `end` (at s = length)
    Linear { start: f64, end: f64 },

    /// `c0 + c1*s + c2*s^2 + ...`
    Polynomial { coefficients: Vec<f64> },

    /// Arbitrary function of the local offset. Not readable from documents.
    #[serde(skip_deserializing)]
    Custom(CustomDistribution),
}

impl Distribution {
    pub fn uniform(intensity: f64) -> Self {
        Distribution::Uniform { intensity }
    }

    pub fn linear(start: f64, end: f64) -> Self {
        Distribution::Linear { start, end }
    }

    pub fn polynomial(coefficients: impl Into<Vec<f64>>) -> Self {
        Distribution::Polynomial {
            coefficients: coefficients.into(),
        }
    }

    /// Wrap a closure. `label` is what renderers show next to the load.
    pub fn custom<F>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Distribution::Custom(CustomDistribution {
            label: label.into(),
            func: Arc::new(func),
        })
    }

    /// Intensity at local offset `s` on a segment of length `span`
    pub fn intensity(&self, s: f64, span: f64) -> f64 {
        match self {
            Distribution::Uniform { intensity } => *intensity,
            Distribution::Linear { start, end } => {
                if span > 0.0 {
                    start + (end - start) * s / span
                } else {
                    *start
                }
            }
            Distribution::Polynomial { coefficients } => {
                coefficients.iter().rev().fold(0.0, |acc, c| acc * s + c)
            }
            Distribution::Custom(custom) => (custom.func)(s),
        }
    }

    /// Short tag for the profile shape
    pub fn kind(&self) -> &'static str {
        match self {
            Distribution::Uniform { .. } => "uniform",
            Distribution::Linear { .. } => "linear",
            Distribution::Polynomial { .. } => "polynomial",
            Distribution::Custom(_) => "custom",
        }
    }

    /// Display label: the value for uniform loads, `f(x)` for anything varying
    pub fn label(&self) -> String {
        match self {
            Distribution::Uniform { intensity } => format!("{} N/m", intensity),
            Distribution::Custom(custom) => custom.label.clone(),
            _ => "f(x) N/m".to_string(),
        }
    }

    fn validate(&self, field: &str) -> BeamResult<()> {
        match self {
            Distribution::Uniform { intensity } => {
                require_finite(format!("{}.intensity", field), *intensity)
            }
            Distribution::Linear { start, end } => {
                require_finite(format!("{}.start", field), *start)?;
                require_finite(format!("{}.end", field), *end)
            }
            Distribution::Polynomial { coefficients } => {
                for (i, c) in coefficients.iter().enumerate() {
                    require_finite(format!("{}.coefficients[{}]", field, i), *c)?;
                }
                Ok(())
            }
            Distribution::Custom(_) => Ok(()),
        }
    }
}

/// A closure-backed intensity profile with a display label
#[derive(Clone)]
pub struct CustomDistribution {
    label: String,
    func: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl CustomDistribution {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for CustomDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDistribution")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Serialize for CustomDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CustomDistribution", 1)?;
        state.serialize_field("label", &self.label)?;
        state.end()
    }
}

/// Net effect of a whole distributed load
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LoadResultant {
    /// Net force (y direction)
    pub force: f64,
    /// Clockwise-positive moment about the origin
    pub moment_about_origin: f64,
}

/// Contribution of the loaded part left of a section
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionContribution {
    pub shear: f64,
    /// Clockwise-positive moment about the section
    pub moment: f64,
}

/// A load spread over a segment of the beam
///
/// # Example
/// ```
/// use beam_core::loads::{DistributedLoad, Distribution, ResultantRule};
///
/// // -20 kN/m over 4 m centered at x = 2
/// let w = DistributedLoad::new(Distribution::uniform(-20_000.0), 2.0, 0.0, 4.0);
/// assert_eq!(w.start(), 0.0);
/// assert_eq!(w.end(), 4.0);
///
/// let r = w.resultant(ResultantRule::FarEndSample);
/// assert_eq!(r.force, -80_000.0);
/// assert_eq!(r.moment_about_origin, 160_000.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct DistributedLoad {
    distribution: Distribution,
    /// Center of the segment
    position: Vec2,
    length: f64,
}

impl DistributedLoad {
    pub fn new(distribution: Distribution, x: f64, y: f64, length: f64) -> Self {
        DistributedLoad {
            distribution,
            position: Vec2::new(x, y),
            length,
        }
    }

    /// Segment from `start` to `end` on the beam axis
    pub fn between(distribution: Distribution, start: f64, end: f64) -> Self {
        Self::new(distribution, (start + end) / 2.0, 0.0, end - start)
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn start(&self) -> f64 {
        self.position.x - self.length / 2.0
    }

    pub fn end(&self) -> f64 {
        self.position.x + self.length / 2.0
    }

    /// Intensity at local offset `s` from the segment start
    pub fn intensity(&self, s: f64) -> f64 {
        self.distribution.intensity(s, self.length)
    }

    /// Whether the whole segment lies on a beam of this length. Segments
    /// hanging off either end are display only.
    pub fn is_within(&self, beam_length: f64) -> bool {
        self.start() >= 0.0 && self.end() <= beam_length
    }

    /// Resultant force and its moment about the origin
    pub fn resultant(&self, rule: ResultantRule) -> LoadResultant {
        match rule {
            ResultantRule::FarEndSample => {
                let force = self.intensity(self.length) * self.length;
                LoadResultant {
                    force,
                    moment_about_origin: -self.position.x * force,
                }
            }
            ResultantRule::Integrated { steps } => {
                let start = self.start();
                let force = simpson(|s| self.intensity(s), 0.0, self.length, steps);
                let first_moment =
                    simpson(|s| self.intensity(s) * (start + s), 0.0, self.length, steps);
                LoadResultant {
                    force,
                    moment_about_origin: -first_moment,
                }
            }
        }
    }

    /// Shear and moment at section `x` from the part of this load left of
    /// `x`. `None` when the segment starts right of the section.
    pub fn contribution_at(&self, x: f64, rule: ResultantRule) -> Option<SectionContribution> {
        let start = self.start();
        if start > x {
            return None;
        }
        let dx = (x - start).min(self.length);

        let contribution = match rule {
            ResultantRule::FarEndSample => {
                let shear = self.intensity(dx) * dx;
                SectionContribution {
                    shear,
                    moment: shear * (x - (start + dx / 2.0)),
                }
            }
            ResultantRule::Integrated { steps } => SectionContribution {
                shear: simpson(|s| self.intensity(s), 0.0, dx, steps),
                moment: simpson(|s| self.intensity(s) * (x - start - s), 0.0, dx, steps),
            },
        };
        Some(contribution)
    }

    pub(crate) fn validate(&self, field: &str) -> BeamResult<()> {
        require_finite(format!("{}.x", field), self.position.x)?;
        require_finite(format!("{}.y", field), self.position.y)?;
        require_finite(format!("{}.length", field), self.length)?;
        if self.length <= 0.0 {
            return Err(BeamError::invalid_input(
                format!("{}.length", field),
                self.length.to_string(),
                "Distributed load length must be positive",
            ));
        }
        self.distribution.validate(&format!("{}.distribution", field))
    }
}

/// Composite Simpson's rule over `[a, b]`; odd panel counts round up.
fn simpson(f: impl Fn(f64) -> f64, a: f64, b: f64, steps: usize) -> f64 {
    if b <= a {
        return 0.0;
    }
    let n = steps.clamp(2, MAX_INTEGRATION_STEPS).saturating_add(1) & !1;
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + h * i as f64)
        })
        .sum();
    (f(a) + f(b) + interior) * h / 3.0
}
