use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Boundary condition flavors. Each one maps to a [`crate::DefaultsProfile`].
///
/// String forms are kebab-case (`indoor-wall`, `wind-tunnel-inlet`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// Plain record, everything zeroGradient unless given.
    #[default]
    Custom,
    BoundingBox,
    Empty,
    IndoorWall,
    FixedInlet,
    FixedOutlet,
    WindTunnelWall,
    WindTunnelGround,
    WindTunnelInlet,
    WindTunnelOutlet,
    WindTunnelTopAndSides,
}

impl Archetype {
    /// Name used in the textual representation of records.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Custom => "BoundaryCondition",
            Self::BoundingBox => "BoundingBox",
            Self::Empty => "Empty",
            Self::IndoorWall => "IndoorWall",
            Self::FixedInlet => "FixedInlet",
            Self::FixedOutlet => "FixedOutlet",
            Self::WindTunnelWall => "WindTunnelWall",
            Self::WindTunnelGround => "WindTunnelGround",
            Self::WindTunnelInlet => "WindTunnelInlet",
            Self::WindTunnelOutlet => "WindTunnelOutlet",
            Self::WindTunnelTopAndSides => "WindTunnelTopAndSides",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kebab_case_names_round_trip() {
        assert_eq!(Archetype::WindTunnelTopAndSides.to_string(), "wind-tunnel-top-and-sides");
        for archetype in Archetype::iter() {
            assert_eq!(archetype.to_string().parse::<Archetype>(), Ok(archetype));
        }
        assert!("IndoorWall".parse::<Archetype>().is_err());
        assert_eq!(Archetype::iter().count(), 11);
    }

    #[test]
    fn serde_uses_the_same_names() {
        let json = serde_json::to_string(&Archetype::FixedInlet).unwrap();
        assert_eq!(json, "\"fixed-inlet\"");
        let back: Archetype = serde_json::from_str("\"bounding-box\"").unwrap();
        assert_eq!(back, Archetype::BoundingBox);
    }
}
