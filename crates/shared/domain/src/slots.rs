use crate::constants::{
    DISSIPATION_RATE, DYNAMIC_PRESSURE, PRESSURE, TEMPERATURE, THERMAL_DIFFUSIVITY,
    TURBULENT_KINETIC_ENERGY, TURBULENT_VISCOSITY, VELOCITY,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the eight field slots a boundary condition carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldSlot {
    Temperature,
    Velocity,
    Pressure,
    TurbulentKineticEnergy,
    DissipationRate,
    TurbulentViscosity,
    ThermalDiffusivity,
    DynamicPressure,
}

impl FieldSlot {
    /// All slots in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Temperature,
        Self::Velocity,
        Self::Pressure,
        Self::TurbulentKineticEnergy,
        Self::DissipationRate,
        Self::TurbulentViscosity,
        Self::ThermalDiffusivity,
        Self::DynamicPressure,
    ];

    /// OpenFOAM field name (`U`, `p_rgh`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => TEMPERATURE,
            Self::Velocity => VELOCITY,
            Self::Pressure => PRESSURE,
            Self::TurbulentKineticEnergy => TURBULENT_KINETIC_ENERGY,
            Self::DissipationRate => DISSIPATION_RATE,
            Self::TurbulentViscosity => TURBULENT_VISCOSITY,
            Self::ThermalDiffusivity => THERMAL_DIFFUSIVITY,
            Self::DynamicPressure => DYNAMIC_PRESSURE,
        }
    }

    /// Position in [`FieldSlot::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn mask(self) -> FieldMask {
        FieldMask::from_bits_retain(1 << self.index())
    }
}

impl fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not one of the eight OpenFOAM field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlot(pub String);

impl fmt::Display for UnknownSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field slot '{}'", self.0)
    }
}

impl std::error::Error for UnknownSlot {}

impl FromStr for FieldSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|slot| slot.name() == s).ok_or_else(|| UnknownSlot(s.to_owned()))
    }
}

impl Serialize for FieldSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FieldSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

bitflags! {
    /// A set of field slots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct FieldMask: u8 {
        const TEMPERATURE = 1 << 0;
        const VELOCITY = 1 << 1;
        const PRESSURE = 1 << 2;
        const TURBULENT_KINETIC_ENERGY = 1 << 3;
        const DISSIPATION_RATE = 1 << 4;
        const TURBULENT_VISCOSITY = 1 << 5;
        const THERMAL_DIFFUSIVITY = 1 << 6;
        const DYNAMIC_PRESSURE = 1 << 7;

        const ALL = u8::MAX;
    }
}

impl FieldMask {
    /// Member slots in canonical order.
    pub fn slots(self) -> impl Iterator<Item = FieldSlot> {
        FieldSlot::ALL.into_iter().filter(move |slot| self.contains(slot.mask()))
    }
}

impl From<FieldSlot> for FieldMask {
    fn from(slot: FieldSlot) -> Self {
        slot.mask()
    }
}

impl FromIterator<FieldSlot> for FieldMask {
    fn from_iter<I: IntoIterator<Item = FieldSlot>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |mask, slot| mask | slot.mask())
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.slots().map(FieldSlot::name).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_masks_line_up_with_named_flags() {
        assert_eq!(FieldSlot::Temperature.mask(), FieldMask::TEMPERATURE);
        assert_eq!(FieldSlot::Velocity.mask(), FieldMask::VELOCITY);
        assert_eq!(FieldSlot::DynamicPressure.mask(), FieldMask::DYNAMIC_PRESSURE);
        assert_eq!(FieldSlot::ALL.into_iter().collect::<FieldMask>(), FieldMask::ALL);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for slot in FieldSlot::ALL {
            assert_eq!(slot.name().parse::<FieldSlot>(), Ok(slot));
        }
        assert!("velocity".parse::<FieldSlot>().is_err());
    }

    #[test]
    fn mask_displays_member_names() {
        let turbulence = FieldMask::TURBULENT_KINETIC_ENERGY | FieldMask::DISSIPATION_RATE;
        assert_eq!(turbulence.to_string(), "[k, epsilon]");
        assert_eq!(FieldMask::empty().to_string(), "[]");
    }
}
