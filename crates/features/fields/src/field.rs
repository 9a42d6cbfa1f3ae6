use crate::abl::AtmBoundaryLayer;
use crate::error::FieldError;
use crate::parse;
use crate::value::{FieldValue, lenient};
use fcase_domain::constants::INTERNAL_FIELD;
use fcase_domain::vector::Vector3;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// An OpenFOAM boundary field expression.
///
/// Serialized with an internal `type` tag using the OpenFOAM type names, so
/// `{"type": "fixedValue", "value": "uniform 0"}` is a valid mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Field {
    #[default]
    ZeroGradient,
    Empty,
    Slip,
    FixedValue {
        value: FieldValue,
    },
    Calculated {
        value: FieldValue,
    },
    InletOutlet {
        #[serde(rename = "inletValue")]
        inlet_value: FieldValue,
        value: FieldValue,
    },
    KqRWallFunction {
        value: FieldValue,
    },
    EpsilonWallFunction {
        value: FieldValue,
    },
    NutkWallFunction {
        value: FieldValue,
    },
    NutkAtmRoughWallFunction {
        z0: FieldValue,
        value: FieldValue,
    },
    AlphatJayatillekeWallFunction {
        value: FieldValue,
        #[serde(rename = "Prt", with = "lenient")]
        prt: f64,
    },
    FixedFluxPressure {
        value: FieldValue,
        rho: String,
    },
    AtmBoundaryLayerInletVelocity(AtmBoundaryLayer),
    AtmBoundaryLayerInletK(AtmBoundaryLayer),
    AtmBoundaryLayerInletEpsilon(AtmBoundaryLayer),
}

impl Field {
    #[must_use]
    pub fn fixed_value(value: impl Into<FieldValue>) -> Self {
        Self::FixedValue { value: value.into() }
    }

    #[must_use]
    pub fn calculated(value: impl Into<FieldValue>) -> Self {
        Self::Calculated { value: value.into() }
    }

    #[must_use]
    pub fn inlet_outlet(inlet_value: impl Into<FieldValue>, value: impl Into<FieldValue>) -> Self {
        Self::InletOutlet { inlet_value: inlet_value.into(), value: value.into() }
    }

    #[must_use]
    pub fn kqr_wall_function(value: impl Into<FieldValue>) -> Self {
        Self::KqRWallFunction { value: value.into() }
    }

    #[must_use]
    pub fn epsilon_wall_function(value: impl Into<FieldValue>) -> Self {
        Self::EpsilonWallFunction { value: value.into() }
    }

    #[must_use]
    pub fn nutk_wall_function(value: impl Into<FieldValue>) -> Self {
        Self::NutkWallFunction { value: value.into() }
    }

    #[must_use]
    pub fn alphat_jayatilleke_wall_function(value: impl Into<FieldValue>, prt: f64) -> Self {
        Self::AlphatJayatillekeWallFunction { value: value.into(), prt }
    }

    #[must_use]
    pub fn fixed_flux_pressure(value: impl Into<FieldValue>, rho: impl Into<String>) -> Self {
        Self::FixedFluxPressure { value: value.into(), rho: rho.into() }
    }

    /// `$internalField`, the usual initial value of wall functions.
    #[must_use]
    pub fn internal_field() -> FieldValue {
        FieldValue::raw(INTERNAL_FIELD)
    }

    /// Builds a field from a key-value mapping whose `type` key selects the variant.
    ///
    /// # Errors
    /// [`FieldError::Mapping`] when the type is unknown or a parameter is missing or malformed.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self, FieldError> {
        serde_json::from_value(Value::Object(mapping.clone())).map_err(|source| {
            FieldError::Mapping { input: Value::Object(mapping.clone()).to_string(), source, context: None }
        })
    }

    /// Builds a field from its textual form.
    ///
    /// Accepted forms:
    /// * a finite number, `0.1`, read as a uniform `fixedValue`;
    /// * a vector, `(1 0 0)`, read as a uniform `fixedValue`;
    /// * a bare type name, `zeroGradient`;
    /// * a dictionary body, `{ type fixedValue; value uniform 0; }` (braces optional).
    ///
    /// # Errors
    /// [`FieldError::Parse`] for anything else, [`FieldError::Mapping`] when a dictionary body
    /// names an unknown type or misses a parameter.
    pub fn from_scalar(text: &str) -> Result<Self, FieldError> {
        parse::field(text)
    }

    /// OpenFOAM type name, as written after `type`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::ZeroGradient => "zeroGradient",
            Self::Empty => "empty",
            Self::Slip => "slip",
            Self::FixedValue { .. } => "fixedValue",
            Self::Calculated { .. } => "calculated",
            Self::InletOutlet { .. } => "inletOutlet",
            Self::KqRWallFunction { .. } => "kqRWallFunction",
            Self::EpsilonWallFunction { .. } => "epsilonWallFunction",
            Self::NutkWallFunction { .. } => "nutkWallFunction",
            Self::NutkAtmRoughWallFunction { .. } => "nutkAtmRoughWallFunction",
            Self::AlphatJayatillekeWallFunction { .. } => "alphatJayatillekeWallFunction",
            Self::FixedFluxPressure { .. } => "fixedFluxPressure",
            Self::AtmBoundaryLayerInletVelocity(_) => "atmBoundaryLayerInletVelocity",
            Self::AtmBoundaryLayerInletK(_) => "atmBoundaryLayerInletK",
            Self::AtmBoundaryLayerInletEpsilon(_) => "atmBoundaryLayerInletEpsilon",
        }
    }

    /// The `value` entry, if this type has one.
    #[must_use]
    pub const fn value(&self) -> Option<&FieldValue> {
        match self {
            Self::FixedValue { value }
            | Self::Calculated { value }
            | Self::InletOutlet { value, .. }
            | Self::KqRWallFunction { value }
            | Self::EpsilonWallFunction { value }
            | Self::NutkWallFunction { value }
            | Self::NutkAtmRoughWallFunction { value, .. }
            | Self::AlphatJayatillekeWallFunction { value, .. }
            | Self::FixedFluxPressure { value, .. } => Some(value),
            Self::ZeroGradient
            | Self::Empty
            | Self::Slip
            | Self::AtmBoundaryLayerInletVelocity(_)
            | Self::AtmBoundaryLayerInletK(_)
            | Self::AtmBoundaryLayerInletEpsilon(_) => None,
        }
    }

    /// Atmospheric boundary layer parameters of the `atmBoundaryLayerInlet*` types.
    #[must_use]
    pub const fn boundary_layer(&self) -> Option<&AtmBoundaryLayer> {
        match self {
            Self::AtmBoundaryLayerInletVelocity(abl)
            | Self::AtmBoundaryLayerInletK(abl)
            | Self::AtmBoundaryLayerInletEpsilon(abl) => Some(abl),
            _ => None,
        }
    }

    /// Entries following `type`, in OpenFOAM order.
    fn parameters(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ZeroGradient | Self::Empty | Self::Slip => Vec::new(),
            Self::FixedValue { value }
            | Self::Calculated { value }
            | Self::KqRWallFunction { value }
            | Self::EpsilonWallFunction { value }
            | Self::NutkWallFunction { value } => vec![("value", value.to_string())],
            Self::InletOutlet { inlet_value, value } => {
                vec![("inletValue", inlet_value.to_string()), ("value", value.to_string())]
            },
            Self::NutkAtmRoughWallFunction { z0, value } => {
                vec![("z0", z0.to_string()), ("value", value.to_string())]
            },
            Self::AlphatJayatillekeWallFunction { value, prt } => {
                vec![("Prt", prt.to_string()), ("value", value.to_string())]
            },
            Self::FixedFluxPressure { value, rho } => {
                vec![("rho", rho.clone()), ("value", value.to_string())]
            },
            Self::AtmBoundaryLayerInletVelocity(abl)
            | Self::AtmBoundaryLayerInletK(abl)
            | Self::AtmBoundaryLayerInletEpsilon(abl) => abl.parameters(),
        }
    }
}

impl From<Vector3> for Field {
    fn from(value: Vector3) -> Self {
        Self::fixed_value(value)
    }
}

/// One-line dictionary body, e.g. `{ type fixedValue; value uniform (0 0 0); }`.
///
/// [`Field::from_scalar`] reads this form back.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ type {};", self.type_name())?;
        for (key, value) in self.parameters() {
            write!(f, " {key} {value};")?;
        }
        f.write_str(" }")
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_scalar(s)
    }
}
