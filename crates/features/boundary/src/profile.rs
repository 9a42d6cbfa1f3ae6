use crate::archetype::Archetype;
use crate::refinement::RefinementLevels;
use fcase_domain::abl::AblConditions;
use fcase_domain::patch::PatchKind;
use fcase_domain::slots::{FieldMask, FieldSlot};
use fcase_fields::{Field, FieldValue};
use tracing::debug;

/// How a caller value and a profile value combine.
#[derive(Debug, Clone, PartialEq)]
pub enum Policy<T> {
    /// The caller's value wins; this one fills in when it is omitted.
    Default(T),
    /// This value is always used; caller input is discarded.
    Forced(T),
}

impl<T> Policy<T> {
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Default(value) | Self::Forced(value) => value,
        }
    }

    #[must_use]
    pub const fn is_forced(&self) -> bool {
        matches!(self, Self::Forced(_))
    }
}

/// Defaults substituted by one [`Archetype`] for omitted (or forced) inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsProfile {
    archetype: Archetype,
    kind: Policy<PatchKind>,
    refinement: Policy<RefinementLevels>,
    slots: [Policy<Field>; 8],
}

impl DefaultsProfile {
    /// Builds the profile of `archetype`. Only the wind-tunnel ground and inlet read `abl`.
    #[must_use]
    pub fn for_archetype(archetype: Archetype, abl: &AblConditions) -> Self {
        use Policy::{Default as D, Forced as F};

        let zg = || D(Field::ZeroGradient);
        let calculated_zero = || Field::calculated(0.0);
        let zero_velocity = || D(Field::fixed_value(FieldValue::uniform("(0 0 0)")));

        // Slot order: T, U, p, k, epsilon, nut, alphat, p_rgh.
        let (kind, refinement, slots) = match archetype {
            Archetype::Custom => {
                (D(PatchKind::Patch), D(RefinementLevels::UNSET), std::array::from_fn(|_| zg()))
            },
            Archetype::BoundingBox => (
                F(PatchKind::Wall),
                F(RefinementLevels::UNSET),
                std::array::from_fn(|_| F(Field::ZeroGradient)),
            ),
            Archetype::Empty => {
                (F(PatchKind::Wall), F(RefinementLevels::UNSET), std::array::from_fn(|_| F(Field::Empty)))
            },
            Archetype::IndoorWall => (F(PatchKind::Wall), D(RefinementLevels::UNSET), [
                zg(),
                zero_velocity(),
                zg(),
                D(Field::kqr_wall_function(FieldValue::uniform("0.1"))),
                D(Field::epsilon_wall_function(FieldValue::uniform("0.01"))),
                D(Field::nutk_wall_function(FieldValue::uniform("0.01"))),
                D(Field::alphat_jayatilleke_wall_function(0.0, 0.85)),
                D(Field::fixed_flux_pressure(0.0, "rhok")),
            ]),
            Archetype::FixedInlet => (F(PatchKind::Patch), D(RefinementLevels::UNSET), [
                zg(),
                zero_velocity(),
                zg(),
                D(Field::fixed_value(FieldValue::uniform("0.1"))),
                D(Field::fixed_value(FieldValue::uniform("0.01"))),
                F(calculated_zero()),
                F(Field::ZeroGradient),
                F(Field::ZeroGradient),
            ]),
            Archetype::FixedOutlet => (F(PatchKind::Patch), D(RefinementLevels::UNSET), [
                zg(),
                zg(),
                D(Field::fixed_value(FieldValue::uniform("0"))),
                zg(),
                zg(),
                F(calculated_zero()),
                F(Field::ZeroGradient),
                F(Field::ZeroGradient),
            ]),
            Archetype::WindTunnelWall => (F(PatchKind::Wall), D(RefinementLevels::UNSET), [
                zg(),
                zero_velocity(),
                zg(),
                D(Field::kqr_wall_function(Field::internal_field())),
                D(Field::epsilon_wall_function(Field::internal_field())),
                D(Field::nutk_wall_function(FieldValue::uniform("0.0"))),
                zg(),
                zg(),
            ]),
            Archetype::WindTunnelGround => (F(PatchKind::Wall), D(RefinementLevels::UNSET), [
                zg(),
                zero_velocity(),
                zg(),
                zg(),
                zg(),
                F(Field::nutk_atm_rough_wall_function(abl, 0.0)),
                zg(),
                zg(),
            ]),
            Archetype::WindTunnelInlet => {
                debug!(
                    u_ref = abl.u_ref,
                    z0 = abl.z0,
                    friction_velocity = abl.friction_velocity(),
                    "Deriving wind tunnel inlet from ABL conditions"
                );
                (F(PatchKind::Patch), D(RefinementLevels::UNSET), [
                    zg(),
                    F(Field::atm_inlet_velocity(abl)),
                    zg(),
                    F(Field::atm_inlet_k(abl)),
                    F(Field::atm_inlet_epsilon(abl)),
                    D(calculated_zero()),
                    zg(),
                    zg(),
                ])
            },
            Archetype::WindTunnelOutlet => (F(PatchKind::Patch), D(RefinementLevels::UNSET), [
                zg(),
                D(Field::inlet_outlet(FieldValue::uniform("(0 0 0)"), Field::internal_field())),
                D(Field::fixed_value(FieldValue::raw("$pressure"))),
                D(Field::inlet_outlet(FieldValue::uniform("$turbulentKE"), Field::internal_field())),
                D(Field::inlet_outlet(FieldValue::uniform("$turbulentEpsilon"), Field::internal_field())),
                D(calculated_zero()),
                zg(),
                zg(),
            ]),
            Archetype::WindTunnelTopAndSides => (F(PatchKind::Patch), D(RefinementLevels::UNSET), [
                zg(),
                D(Field::Slip),
                D(Field::Slip),
                D(Field::Slip),
                D(Field::Slip),
                F(calculated_zero()),
                zg(),
                zg(),
            ]),
        };

        Self { archetype, kind, refinement, slots }
    }

    #[must_use]
    pub const fn archetype(&self) -> Archetype {
        self.archetype
    }

    #[must_use]
    pub const fn kind(&self) -> &Policy<PatchKind> {
        &self.kind
    }

    #[must_use]
    pub const fn refinement(&self) -> &Policy<RefinementLevels> {
        &self.refinement
    }

    #[must_use]
    pub const fn slot(&self, slot: FieldSlot) -> &Policy<Field> {
        &self.slots[slot.index()]
    }

    /// Slots whose caller input is ignored.
    #[must_use]
    pub fn forced_mask(&self) -> FieldMask {
        FieldSlot::ALL.into_iter().filter(|slot| self.slot(*slot).is_forced()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(archetype: Archetype) -> DefaultsProfile {
        DefaultsProfile::for_archetype(archetype, &AblConditions::default())
    }

    #[test]
    fn forced_masks() {
        assert_eq!(profile(Archetype::Custom).forced_mask(), FieldMask::empty());
        assert_eq!(profile(Archetype::BoundingBox).forced_mask(), FieldMask::ALL);
        assert_eq!(profile(Archetype::Empty).forced_mask(), FieldMask::ALL);
        assert_eq!(
            profile(Archetype::FixedInlet).forced_mask(),
            FieldMask::TURBULENT_VISCOSITY | FieldMask::THERMAL_DIFFUSIVITY | FieldMask::DYNAMIC_PRESSURE
        );
        assert_eq!(
            profile(Archetype::WindTunnelInlet).forced_mask(),
            FieldMask::VELOCITY | FieldMask::TURBULENT_KINETIC_ENERGY | FieldMask::DISSIPATION_RATE
        );
        assert_eq!(profile(Archetype::WindTunnelGround).forced_mask(), FieldMask::TURBULENT_VISCOSITY);
    }

    #[test]
    fn only_custom_takes_the_caller_kind() {
        assert!(!profile(Archetype::Custom).kind().is_forced());
        assert_eq!(profile(Archetype::IndoorWall).kind(), &Policy::Forced(PatchKind::Wall));
        assert!(profile(Archetype::BoundingBox).refinement().is_forced());
        assert!(!profile(Archetype::IndoorWall).refinement().is_forced());
    }
}
