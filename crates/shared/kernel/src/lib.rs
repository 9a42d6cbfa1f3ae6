//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts the layered configuration loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use fcase_kernel::config::load_config;
//! use fcase_kernel::domain::config::CaseConfig;
//!
//! let cfg: CaseConfig = load_config(Some("case.toml")).unwrap_or_default();
//! println!("reference velocity {}", cfg.abl.u_ref);
//! ```
pub mod config;

pub use fcase_domain as domain;
