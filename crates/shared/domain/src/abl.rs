//! Atmospheric boundary layer parameters for wind-tunnel inlets.
//!
//! The profile itself (log-law velocity, k and epsilon) is evaluated by the solver from these
//! parameters; this module only carries them.

use crate::vector::Vector3;
use serde::{Deserialize, Serialize};

/// von Kármán constant used by OpenFOAM's `atmBoundaryLayer` conditions.
pub const KAPPA: f64 = 0.41;

/// Reference height for wind measurements (m).
pub const Z_REFERENCE: f64 = 10.0;
/// Default aerodynamic roughness length (m), open terrain with low obstacles.
pub const Z0_DEFAULT: f64 = 0.1;

/// Parameter set of a neutral atmospheric boundary layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AblConditions {
    /// Reference velocity at `z_ref` (m/s).
    #[serde(alias = "Uref")]
    pub u_ref: f64,
    /// Reference height (m).
    #[serde(alias = "Zref")]
    pub z_ref: f64,
    /// Surface roughness length (m).
    pub z0: f64,
    /// Ground elevation (m).
    #[serde(alias = "zGround")]
    pub z_ground: f64,
    /// Flow direction.
    #[serde(alias = "flowDir")]
    pub flow_dir: Vector3,
    /// Vertical direction.
    #[serde(alias = "zDir")]
    pub z_dir: Vector3,
}

impl Default for AblConditions {
    fn default() -> Self {
        Self {
            u_ref: 10.0,
            z_ref: Z_REFERENCE,
            z0: Z0_DEFAULT,
            z_ground: 0.0,
            flow_dir: Vector3::X,
            z_dir: Vector3::Z,
        }
    }
}

impl AblConditions {
    /// Same parameters with a different reference velocity.
    #[must_use]
    pub const fn with_reference_velocity(mut self, u_ref: f64) -> Self {
        self.u_ref = u_ref;
        self
    }

    /// Friction velocity `u* = κ·Uref / ln((Zref + z0) / z0)`.
    #[must_use]
    pub fn friction_velocity(&self) -> f64 {
        KAPPA * self.u_ref / ((self.z_ref + self.z0) / self.z0).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friction_velocity_scales_with_reference_velocity() {
        let slow = AblConditions::default();
        let fast = slow.clone().with_reference_velocity(20.0);
        assert!((fast.friction_velocity() - 2.0 * slow.friction_velocity()).abs() < 1e-12);
        assert!(slow.friction_velocity() > 0.0);
    }
}
