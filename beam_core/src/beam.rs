//! # Beam Model
//!
//! A [`Beam`] is a straight member of a given length with one support
//! arrangement and three ordered load collections. It is the subject of
//! analysis: build it with the `with_*` methods, then hand it to
//! [`resolve`](crate::analysis::resolve), which consumes it and returns an
//! immutable snapshot with the reactions appended.
//!
//! ## Supports
//!
//! - **Simply supported**: pin at `x = 0`, roller at `x = length`. Vertical
//!   reactions at both ends, horizontal reaction at the pin.
//! - **Cantilever**: fixed at `x = 0`. Vertical, horizontal and moment
//!   reactions at the fixed end.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{Beam, SupportType};
//! use beam_core::loads::PointForce;
//!
//! let beam = Beam::new(SupportType::SimplySupported, 10.0, 1.0)
//!     .with_force(PointForce::vertical(-10_000.0, 8.0));
//!
//! assert_eq!(beam.forces().len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, BeamError, BeamResult};
use crate::loads::{DistributedLoad, PointForce, PointMoment};

/// Support arrangement. Exactly one is active per beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportType {
    SimplySupported,
    Cantilever,
}

impl SupportType {
    /// Resolve raw flags into a support type.
    ///
    /// # Errors
    /// [`BeamError::InvalidBeamType`] when both or neither flag is set.
    ///
    /// ```
    /// use beam_core::beam::{SupportFlags, SupportType};
    ///
    /// let flags = SupportFlags { simply_supported: false, cantilever: true };
    /// assert_eq!(SupportType::from_flags(flags).unwrap(), SupportType::Cantilever);
    ///
    /// let both = SupportFlags { simply_supported: true, cantilever: true };
    /// assert!(SupportType::from_flags(both).is_err());
    /// ```
    pub fn from_flags(flags: SupportFlags) -> BeamResult<Self> {
        match (flags.simply_supported, flags.cantilever) {
            (true, false) => Ok(SupportType::SimplySupported),
            (false, true) => Ok(SupportType::Cantilever),
            (ss, c) => Err(BeamError::invalid_beam_type(ss, c)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::SimplySupported => "Simply supported",
            SupportType::Cantilever => "Cantilever",
        }
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Support selection as it arrives from documents and callers: one flag per
/// support type. Converted with [`SupportType::from_flags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportFlags {
    #[serde(default)]
    pub simply_supported: bool,
    #[serde(default)]
    pub cantilever: bool,
}

impl Default for SupportFlags {
    /// Simply supported
    fn default() -> Self {
        SupportFlags {
            simply_supported: true,
            cantilever: false,
        }
    }
}

impl From<SupportType> for SupportFlags {
    fn from(support: SupportType) -> Self {
        SupportFlags {
            simply_supported: support == SupportType::SimplySupported,
            cantilever: support == SupportType::Cantilever,
        }
    }
}

/// A loaded beam
#[derive(Debug, Clone, Serialize)]
pub struct Beam {
    support: SupportType,
    /// Span
    length: f64,
    /// Section depth, used for drawing offsets only
    height: f64,
    forces: Vec<PointForce>,
    distributed: Vec<DistributedLoad>,
    moments: Vec<PointMoment>,
}

impl Beam {
    /// Create an unloaded beam
    pub fn new(support: SupportType, length: f64, height: f64) -> Self {
        Beam {
            support,
            length,
            height,
            forces: Vec::new(),
            distributed: Vec::new(),
            moments: Vec::new(),
        }
    }

    /// Create an unloaded beam from raw support flags
    pub fn from_flags(flags: SupportFlags, length: f64, height: f64) -> BeamResult<Self> {
        Ok(Self::new(SupportType::from_flags(flags)?, length, height))
    }

    pub fn with_force(mut self, force: PointForce) -> Self {
        self.forces.push(force);
        self
    }

    pub fn with_distributed(mut self, load: DistributedLoad) -> Self {
        self.distributed.push(load);
        self
    }

    pub fn with_moment(mut self, moment: PointMoment) -> Self {
        self.moments.push(moment);
        self
    }

    pub fn support(&self) -> SupportType {
        self.support
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn forces(&self) -> &[PointForce] {
        &self.forces
    }

    pub fn distributed(&self) -> &[DistributedLoad] {
        &self.distributed
    }

    pub fn moments(&self) -> &[PointMoment] {
        &self.moments
    }

    /// Point forces that take part in equilibrium
    pub fn active_forces(&self) -> impl Iterator<Item = &PointForce> + '_ {
        self.forces.iter().filter(move |f| f.is_within(self.length))
    }

    /// Point moments that take part in equilibrium
    pub fn active_moments(&self) -> impl Iterator<Item = &PointMoment> + '_ {
        self.moments.iter().filter(move |m| m.is_within(self.length))
    }

    /// Distributed loads lying entirely on the span
    pub fn active_distributed(&self) -> impl Iterator<Item = &DistributedLoad> + '_ {
        self.distributed.iter().filter(move |d| d.is_within(self.length))
    }

    /// Check geometry and every load for values the solver cannot use
    pub fn validate(&self) -> BeamResult<()> {
        require_finite("length", self.length)?;
        if self.length <= 0.0 {
            return Err(BeamError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }
        require_finite("height", self.height)?;
        if self.height < 0.0 {
            return Err(BeamError::invalid_input(
                "height",
                self.height.to_string(),
                "Beam height cannot be negative",
            ));
        }
        for (i, force) in self.forces.iter().enumerate() {
            force.validate(&format!("forces[{}]", i))?;
        }
        for (i, load) in self.distributed.iter().enumerate() {
            load.validate(&format!("distributed[{}]", i))?;
        }
        for (i, moment) in self.moments.iter().enumerate() {
            moment.validate(&format!("moments[{}]", i))?;
        }
        Ok(())
    }

    pub(crate) fn push_reaction_force(&mut self, force: PointForce) {
        self.forces.push(force);
    }

    pub(crate) fn push_reaction_moment(&mut self, moment: PointMoment) {
        self.moments.push(moment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Distribution;

    #[test]
    fn test_from_flags() {
        let ss = SupportFlags::from(SupportType::SimplySupported);
        assert_eq!(SupportType::from_flags(ss).unwrap(), SupportType::SimplySupported);

        let neither = SupportFlags {
            simply_supported: false,
            cantilever: false,
        };
        let err = SupportType::from_flags(neither).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_BEAM_TYPE");
    }

    #[test]
    fn test_default_flags_are_simply_supported() {
        // Missing keys read as unset, so an empty object is rejected later
        let flags: SupportFlags = serde_json::from_str("{}").unwrap();
        assert!(SupportType::from_flags(flags).is_err());
        assert_eq!(
            SupportType::from_flags(SupportFlags::default()).unwrap(),
            SupportType::SimplySupported
        );
    }

    #[test]
    fn test_active_filters_keep_storage() {
        let beam = Beam::new(SupportType::Cantilever, 5.0, 0.5)
            .with_force(PointForce::vertical(-1.0, 4.0))
            .with_force(PointForce::vertical(-1.0, 6.0))
            .with_moment(PointMoment::at(1.0, 7.0))
            .with_distributed(DistributedLoad::between(Distribution::uniform(-1.0), 4.0, 6.0));

        assert_eq!(beam.forces().len(), 2);
        assert_eq!(beam.active_forces().count(), 1);
        assert_eq!(beam.active_moments().count(), 0);
        assert_eq!(beam.distributed().len(), 1);
        assert_eq!(beam.active_distributed().count(), 0);
    }

    #[test]
    fn test_validate_geometry() {
        assert!(Beam::new(SupportType::Cantilever, 0.0, 1.0).validate().is_err());
        assert!(Beam::new(SupportType::Cantilever, 3.0, -1.0).validate().is_err());
        assert!(Beam::new(SupportType::Cantilever, f64::NAN, 1.0).validate().is_err());
        assert!(Beam::new(SupportType::Cantilever, 3.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_names_bad_load() {
        let beam = Beam::new(SupportType::SimplySupported, 10.0, 1.0)
            .with_force(PointForce::vertical(-1.0, 2.0))
            .with_force(PointForce::vertical(f64::INFINITY, 3.0));

        match beam.validate() {
            Err(BeamError::InvalidInput { field, .. }) => assert_eq!(field, "forces[1].fy"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
