//! # Boundary Fields
//!
//! Typed OpenFOAM boundary field expressions (`zeroGradient`, `fixedValue`, wall functions,
//! atmospheric boundary layer inlets, ...) and the coercion of loosely typed input into them.
//!
//! ## Input forms
//!
//! A field can be created from:
//!
//! 1.  **A [`Field`] value** built with its constructors.
//! 2.  **A mapping** (`{"type": "fixedValue", "value": "uniform 0"}`) whose keys are OpenFOAM
//!     entry names ([`Field::from_mapping`]).
//! 3.  **Text** (`0.1`, `(1 0 0)`, `zeroGradient`, `{ type slip; }`) via [`Field::from_scalar`].
//!
//! [`FieldSpec`] wraps all three so callers can hand over whatever they have and coerce it once.
//!
//! ## Textual form
//!
//! `Display` writes a one-line dictionary body, e.g. `{ type fixedValue; value uniform 0; }`,
//! which [`Field::from_scalar`] reads back.

mod abl;
mod error;
mod field;
mod parse;
mod spec;
mod value;

pub use crate::abl::AtmBoundaryLayer;
pub use crate::error::{FieldError, FieldErrorExt};
pub use crate::field::Field;
pub use crate::spec::FieldSpec;
pub use crate::value::FieldValue;
