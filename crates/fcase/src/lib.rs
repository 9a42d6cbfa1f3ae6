//! Facade crate for `FoamCase` features and shared modules.
//! Re-exports domain/kernel primitives and the boundary-condition slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - `use fcase::prelude::*;` for the everyday types.
//! - [`case::CaseFile::load`] reads a whole case (ABL conditions, logging, patches) and
//!   [`case::CaseFile::registry`] builds its boundary conditions.

pub use fcase_boundary as boundary;
pub use fcase_domain as domain;
pub use fcase_fields as fields;
pub use fcase_kernel as kernel;

pub mod case;

pub mod prelude {
    pub use crate::case::{CaseError, CaseFile};
    pub use fcase_boundary::{
        Archetype, BoundaryCondition, BoundaryConditionBuilder, BoundaryConditionLike, BoundaryError,
        BoundaryRegistry, PatchSpec, RefinementLevels,
    };
    pub use fcase_domain::abl::AblConditions;
    pub use fcase_domain::config::CaseConfig;
    pub use fcase_domain::patch::PatchKind;
    pub use fcase_domain::slots::{FieldMask, FieldSlot};
    pub use fcase_domain::vector::Vector3;
    pub use fcase_fields::{Field, FieldError, FieldSpec, FieldValue};
}
