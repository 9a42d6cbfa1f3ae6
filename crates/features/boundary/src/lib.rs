//! # Boundary Conditions
//!
//! Typed boundary conditions for OpenFOAM cases. A record bundles the patch kind, the mesh
//! refinement levels and eight field slots (`T`, `U`, `p`, `k`, `epsilon`, `nut`, `alphat`,
//! `p_rgh`), each holding a coerced [`fcase_fields::Field`].
//!
//! ## Architecture
//!
//! 1.  **Archetypes ([`Archetype`]):** walls, inlets, outlets and wind-tunnel surfaces.
//! 2.  **Profiles ([`DefaultsProfile`]):** per-archetype data saying, for every slot, whether the
//!     caller's value wins over a default or is replaced by a forced value.
//! 3.  **Builder ([`BoundaryConditionBuilder`]):** collects loosely typed input ([`FieldSpec`])
//!     and coerces it once against a profile. Records are immutable afterwards.
//! 4.  **Registry ([`BoundaryRegistry`]):** named patches built from declarative [`PatchSpec`]s.
//!
//! ## Example
//!
//! ```rust
//! # use fcase_boundary::*;
//! let wall = BoundaryCondition::indoor_wall()
//!     .refinement_levels(["2", "3"])
//!     .velocity("(0 0 0)")
//!     .build()
//!     .unwrap();
//! assert_eq!(wall.to_string(), "IndoorWall: wall; refLevels (2, 3)");
//! ```

mod archetype;
mod builder;
mod error;
mod profile;
mod record;
mod refinement;
mod registry;

pub use crate::archetype::Archetype;
pub use crate::builder::BoundaryConditionBuilder;
pub use crate::error::{BoundaryError, BoundaryErrorExt};
pub use crate::profile::{DefaultsProfile, Policy};
pub use crate::record::{BoundaryCondition, BoundaryConditionLike};
pub use crate::refinement::RefinementLevels;
pub use crate::registry::{BoundaryRegistry, PatchSpec};
pub use fcase_fields::FieldSpec;
