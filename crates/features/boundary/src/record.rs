use crate::archetype::Archetype;
use crate::builder::{BoundaryConditionBuilder, coerce};
use crate::error::BoundaryError;
use crate::profile::DefaultsProfile;
use crate::refinement::RefinementLevels;
use fcase_domain::abl::AblConditions;
use fcase_domain::patch::PatchKind;
use fcase_domain::slots::FieldSlot;
use fcase_fields::{Field, FieldSpec};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Capability marker for values usable wherever a boundary condition is expected.
pub trait BoundaryConditionLike {
    fn is_boundary_condition(&self) -> bool {
        true
    }
}

/// Boundary condition of one mesh patch: kind, refinement levels and eight coerced fields.
///
/// Built through [`BoundaryConditionBuilder`]; immutable afterwards. Use
/// [`BoundaryCondition::with_field`] to derive a record with one slot replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    archetype: Archetype,
    kind: PatchKind,
    refinement_levels: RefinementLevels,
    fields: [Field; 8],
}

impl BoundaryCondition {
    pub(crate) const fn from_parts(
        archetype: Archetype,
        kind: PatchKind,
        refinement_levels: RefinementLevels,
        fields: [Field; 8],
    ) -> Self {
        Self { archetype, kind, refinement_levels, fields }
    }

    /// Builder for any archetype.
    pub fn archetype(archetype: Archetype, abl: &AblConditions) -> BoundaryConditionBuilder {
        BoundaryConditionBuilder::new(DefaultsProfile::for_archetype(archetype, abl))
    }

    /// Builder for a plain record; every omitted field is zeroGradient.
    pub fn custom() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::Custom)
    }

    /// Bounding box walls: zeroGradient everywhere, refinement `(1, 1)`.
    pub fn bounding_box() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::BoundingBox)
    }

    /// Empty patches of 2D cases.
    pub fn empty() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::Empty)
    }

    pub fn indoor_wall() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::IndoorWall)
    }

    pub fn fixed_inlet() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::FixedInlet)
    }

    pub fn fixed_outlet() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::FixedOutlet)
    }

    pub fn wind_tunnel_wall() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::WindTunnelWall)
    }

    /// Rough ground whose `nut` uses the ABL roughness length.
    pub fn wind_tunnel_ground(abl: &AblConditions) -> BoundaryConditionBuilder {
        Self::archetype(Archetype::WindTunnelGround, abl)
    }

    /// Inlet whose `U`, `k` and `epsilon` follow the ABL profile.
    pub fn wind_tunnel_inlet(abl: &AblConditions) -> BoundaryConditionBuilder {
        Self::archetype(Archetype::WindTunnelInlet, abl)
    }

    pub fn wind_tunnel_outlet() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::WindTunnelOutlet)
    }

    pub fn wind_tunnel_top_and_sides() -> BoundaryConditionBuilder {
        Self::without_abl(Archetype::WindTunnelTopAndSides)
    }

    fn without_abl(archetype: Archetype) -> BoundaryConditionBuilder {
        Self::archetype(archetype, &AblConditions::default())
    }

    /// The archetype whose defaults produced this record.
    #[must_use]
    pub const fn origin(&self) -> Archetype {
        self.archetype
    }

    #[must_use]
    pub const fn kind(&self) -> PatchKind {
        self.kind
    }

    #[must_use]
    pub const fn refinement_levels(&self) -> RefinementLevels {
        self.refinement_levels
    }

    #[must_use]
    pub const fn field(&self, slot: FieldSlot) -> &Field {
        &self.fields[slot.index()]
    }

    /// Slots with their fields, in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldSlot, &Field)> {
        FieldSlot::ALL.into_iter().zip(&self.fields)
    }

    #[must_use]
    pub const fn temperature(&self) -> &Field {
        self.field(FieldSlot::Temperature)
    }

    #[must_use]
    pub const fn velocity(&self) -> &Field {
        self.field(FieldSlot::Velocity)
    }

    #[must_use]
    pub const fn pressure(&self) -> &Field {
        self.field(FieldSlot::Pressure)
    }

    #[must_use]
    pub const fn turbulent_kinetic_energy(&self) -> &Field {
        self.field(FieldSlot::TurbulentKineticEnergy)
    }

    #[must_use]
    pub const fn dissipation_rate(&self) -> &Field {
        self.field(FieldSlot::DissipationRate)
    }

    #[must_use]
    pub const fn turbulent_viscosity(&self) -> &Field {
        self.field(FieldSlot::TurbulentViscosity)
    }

    #[must_use]
    pub const fn thermal_diffusivity(&self) -> &Field {
        self.field(FieldSlot::ThermalDiffusivity)
    }

    #[must_use]
    pub const fn dynamic_pressure(&self) -> &Field {
        self.field(FieldSlot::DynamicPressure)
    }

    /// A copy with `slot` replaced by the coerced `spec`.
    ///
    /// Archetype policies apply at construction only; any slot can be reassigned here.
    ///
    /// # Errors
    /// [`BoundaryError::InvalidFieldSpec`] when `spec` is not a valid field.
    pub fn with_field(&self, slot: FieldSlot, spec: impl Into<FieldSpec>) -> Result<Self, BoundaryError> {
        let field = coerce(slot, spec.into())?;
        let mut record = self.clone();
        record.fields[slot.index()] = field;
        Ok(record)
    }

    /// Deep, independent copy.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl BoundaryConditionLike for BoundaryCondition {}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (title, kind, levels) = (self.archetype.title(), self.kind, self.refinement_levels);
        match self.archetype {
            Archetype::FixedInlet => {
                write!(f, "{title}: {kind}\nvelocity {}\nrefLevels {levels}", self.velocity())
            },
            Archetype::WindTunnelInlet => match self.velocity().boundary_layer() {
                Some(abl) => write!(f, "{title}: {kind}\nvelocity {}\nrefLevels {levels}", abl.u_ref),
                None => write!(f, "{title}: {kind}\nvelocity {}\nrefLevels {levels}", self.velocity()),
            },
            Archetype::FixedOutlet | Archetype::WindTunnelOutlet => {
                write!(f, "{title}: {kind}\npressure {}\nrefLevels {levels}", self.pressure())
            },
            Archetype::WindTunnelTopAndSides => write!(f, "{title}: {kind}\nrefLevels {levels}"),
            _ => write!(f, "{title}: {kind}; refLevels {levels}"),
        }
    }
}

/// `{"archetype": .., "type": .., "refLevels": [min, max], "T": {..}, ..}`
impl Serialize for BoundaryCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.fields.len()))?;
        map.serialize_entry("archetype", &self.archetype)?;
        map.serialize_entry("type", &self.kind)?;
        map.serialize_entry("refLevels", &self.refinement_levels)?;
        for (slot, field) in self.fields() {
            map.serialize_entry(slot.name(), field)?;
        }
        map.end()
    }
}
