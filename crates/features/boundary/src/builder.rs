use crate::error::BoundaryError;
use crate::profile::{DefaultsProfile, Policy};
use crate::record::BoundaryCondition;
use crate::refinement::RefinementLevels;
use fcase_domain::patch::PatchKind;
use fcase_domain::slots::{FieldMask, FieldSlot};
use fcase_fields::{Field, FieldSpec};
use tracing::{debug, warn};

/// Collects caller input for one record and coerces it against a [`DefaultsProfile`].
///
/// Nothing is validated until [`BoundaryConditionBuilder::build`].
#[derive(Debug, Clone)]
#[must_use = "The builder does nothing until `build` is called."]
pub struct BoundaryConditionBuilder {
    profile: DefaultsProfile,
    kind: Option<PatchKind>,
    refinement: Option<Vec<String>>,
    fields: [Option<FieldSpec>; 8],
}

impl BoundaryConditionBuilder {
    pub fn new(profile: DefaultsProfile) -> Self {
        Self { profile, kind: None, refinement: None, fields: Default::default() }
    }

    /// Patch kind. Only the base archetype honors it.
    pub const fn kind(mut self, kind: PatchKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Minimum and maximum refinement levels, as two integer-like items.
    pub fn refinement_levels<I>(mut self, levels: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.refinement = Some(levels.into_iter().map(|level| level.to_string()).collect());
        self
    }

    /// Sets the input of `slot`, replacing an earlier one. [`FieldSpec::Omitted`] clears it.
    pub fn field(mut self, slot: FieldSlot, spec: impl Into<FieldSpec>) -> Self {
        let spec = spec.into();
        self.fields[slot.index()] = (!spec.is_omitted()).then_some(spec);
        self
    }

    /// `T`
    pub fn temperature(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::Temperature, spec)
    }

    /// `U`
    pub fn velocity(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::Velocity, spec)
    }

    /// `p`
    pub fn pressure(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::Pressure, spec)
    }

    /// `k`
    pub fn turbulent_kinetic_energy(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::TurbulentKineticEnergy, spec)
    }

    /// `epsilon`
    pub fn dissipation_rate(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::DissipationRate, spec)
    }

    /// `nut`
    pub fn turbulent_viscosity(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::TurbulentViscosity, spec)
    }

    /// `alphat`
    pub fn thermal_diffusivity(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::ThermalDiffusivity, spec)
    }

    /// `p_rgh`
    pub fn dynamic_pressure(self, spec: impl Into<FieldSpec>) -> Self {
        self.field(FieldSlot::DynamicPressure, spec)
    }

    /// Slots given a caller value so far.
    #[must_use]
    pub fn supplied(&self) -> FieldMask {
        FieldSlot::ALL.into_iter().filter(|slot| self.fields[slot.index()].is_some()).collect()
    }

    #[must_use]
    pub const fn profile(&self) -> &DefaultsProfile {
        &self.profile
    }

    /// Coerces every input and produces the record.
    ///
    /// Omitted slots take the profile default. Input for a forced slot, kind or refinement
    /// is discarded with a warning.
    ///
    /// # Errors
    /// * [`BoundaryError::InvalidFieldSpec`] when a slot input is not a valid field.
    /// * [`BoundaryError::InvalidRefinementLevel`] when the refinement levels are malformed.
    pub fn build(self) -> Result<BoundaryCondition, BoundaryError> {
        let archetype = self.profile.archetype();

        let kind = match (self.profile.kind(), self.kind) {
            (Policy::Default(_), Some(kind)) => kind,
            (Policy::Forced(fixed), Some(kind)) => {
                if kind != *fixed {
                    warn!(%archetype, requested = %kind, used = %fixed, "Ignoring patch kind");
                }
                *fixed
            },
            (policy, None) => *policy.value(),
        };

        let refinement_levels = match (self.profile.refinement(), self.refinement) {
            (Policy::Default(_), Some(levels)) => RefinementLevels::normalize(levels)?,
            (Policy::Forced(fixed), Some(levels)) => {
                warn!(%archetype, requested = ?levels, used = %fixed, "Ignoring refinement levels");
                *fixed
            },
            (policy, None) => *policy.value(),
        };

        let mut fields: [Field; 8] =
            std::array::from_fn(|index| self.profile.slot(FieldSlot::ALL[index]).value().clone());
        for (slot, spec) in FieldSlot::ALL.into_iter().zip(self.fields) {
            let Some(spec) = spec else { continue };
            match self.profile.slot(slot) {
                Policy::Forced(_) => {
                    warn!(%archetype, %slot, input = %spec.describe(), "Ignoring value for a fixed field");
                },
                Policy::Default(_) => fields[slot.index()] = coerce(slot, spec)?,
            }
        }

        let record = BoundaryCondition::from_parts(archetype, kind, refinement_levels, fields);
        debug!(%archetype, %kind, refinement = %refinement_levels, "Boundary condition built");
        Ok(record)
    }
}

pub(crate) fn coerce(slot: FieldSlot, spec: FieldSpec) -> Result<Field, BoundaryError> {
    let input = spec.describe();
    spec.resolve().map_err(|source| BoundaryError::InvalidFieldSpec { slot, input, source, context: None })
}
