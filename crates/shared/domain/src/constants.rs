//! OpenFOAM spellings used across the workspace.

// Field file names, in canonical slot order.
pub const TEMPERATURE: &str = "T";
pub const VELOCITY: &str = "U";
pub const PRESSURE: &str = "p";
pub const TURBULENT_KINETIC_ENERGY: &str = "k";
pub const DISSIPATION_RATE: &str = "epsilon";
pub const TURBULENT_VISCOSITY: &str = "nut";
pub const THERMAL_DIFFUSIVITY: &str = "alphat";
pub const DYNAMIC_PRESSURE: &str = "p_rgh";

// Patch types.
pub const PATCH: &str = "patch";
pub const WALL: &str = "wall";

// Value expression keywords.
pub const UNIFORM: &str = "uniform";
pub const NONUNIFORM: &str = "nonuniform";
pub const INTERNAL_FIELD: &str = "$internalField";
