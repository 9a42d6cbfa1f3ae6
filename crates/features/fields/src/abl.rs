use crate::field::Field;
use crate::value::{FieldValue, lenient};
use fcase_domain::abl::AblConditions;
use fcase_domain::vector::Vector3;
use serde::{Deserialize, Serialize};

/// Parameters shared by the `atmBoundaryLayerInlet*` field types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmBoundaryLayer {
    #[serde(rename = "Uref", with = "lenient")]
    pub u_ref: f64,
    #[serde(rename = "Zref", with = "lenient")]
    pub z_ref: f64,
    #[serde(rename = "zDir")]
    pub z_dir: Vector3,
    #[serde(rename = "flowDir")]
    pub flow_dir: Vector3,
    pub z0: FieldValue,
    #[serde(rename = "zGround")]
    pub z_ground: FieldValue,
}

impl AtmBoundaryLayer {
    #[must_use]
    pub fn from_conditions(abl: &AblConditions) -> Self {
        Self {
            u_ref: abl.u_ref,
            z_ref: abl.z_ref,
            z_dir: abl.z_dir,
            flow_dir: abl.flow_dir,
            z0: FieldValue::from(abl.z0),
            z_ground: FieldValue::from(abl.z_ground),
        }
    }

    pub(crate) fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Uref", self.u_ref.to_string()),
            ("Zref", self.z_ref.to_string()),
            ("zDir", self.z_dir.to_string()),
            ("flowDir", self.flow_dir.to_string()),
            ("z0", self.z0.to_string()),
            ("zGround", self.z_ground.to_string()),
        ]
    }
}

impl From<&AblConditions> for AtmBoundaryLayer {
    fn from(abl: &AblConditions) -> Self {
        Self::from_conditions(abl)
    }
}

impl Field {
    #[must_use]
    pub fn atm_inlet_velocity(abl: &AblConditions) -> Self {
        Self::AtmBoundaryLayerInletVelocity(abl.into())
    }

    #[must_use]
    pub fn atm_inlet_k(abl: &AblConditions) -> Self {
        Self::AtmBoundaryLayerInletK(abl.into())
    }

    #[must_use]
    pub fn atm_inlet_epsilon(abl: &AblConditions) -> Self {
        Self::AtmBoundaryLayerInletEpsilon(abl.into())
    }

    /// Rough-wall turbulent viscosity using the ABL roughness length as a uniform `z0`.
    #[must_use]
    pub fn nutk_atm_rough_wall_function(abl: &AblConditions, value: impl Into<FieldValue>) -> Self {
        Self::NutkAtmRoughWallFunction { z0: FieldValue::from(abl.z0), value: value.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_conditions_into_openfoam_entries() {
        let abl = AblConditions::default().with_reference_velocity(12.5);
        let field = Field::atm_inlet_velocity(&abl);
        assert_eq!(
            field.to_string(),
            "{ type atmBoundaryLayerInletVelocity; Uref 12.5; Zref 10; zDir (0 0 1); \
             flowDir (1 0 0); z0 uniform 0.1; zGround uniform 0; }"
        );
        assert_eq!(field.boundary_layer().map(|b| b.u_ref), Some(12.5));
    }

    #[test]
    fn rough_wall_takes_roughness_length() {
        let abl = AblConditions { z0: 0.03, ..AblConditions::default() };
        let field = Field::nutk_atm_rough_wall_function(&abl, 0.0);
        assert_eq!(field, Field::NutkAtmRoughWallFunction {
            z0: FieldValue::uniform("0.03"),
            value: FieldValue::uniform("0"),
        });
    }
}
