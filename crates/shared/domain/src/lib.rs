//! # Domain Models
//!
//! Pure types shared by the `FoamCase` crates, with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or heavy logic, just data and simple parsing helpers.

pub mod abl;
pub mod config;
pub mod constants;
pub mod patch;
pub mod slots;
pub mod vector;
