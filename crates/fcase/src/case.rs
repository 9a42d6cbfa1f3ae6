use fcase_boundary::{BoundaryError, BoundaryRegistry, PatchSpec};
use fcase_domain::config::CaseConfig;
use fcase_kernel::config::{ConfigError, load_config};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

#[fcase_derive::fcase_error]
pub enum CaseError {
    #[error("Case configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Boundary condition error{}: {source}", format_context(.context))]
    Boundary { source: BoundaryError, context: Option<Cow<'static, str>> },
}

/// A case file: case-wide settings plus the patch list.
///
/// ```toml
/// [abl]
/// u_ref = 12.0
///
/// [[patches]]
/// name = "inlet"
/// archetype = "wind-tunnel-inlet"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseFile {
    #[serde(flatten)]
    pub config: CaseConfig,
    #[serde(default)]
    pub patches: Vec<PatchSpec>,
}

impl CaseFile {
    /// Loads a case file with `FCASE__` environment overrides.
    ///
    /// # Errors
    /// [`CaseError::Config`] when the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CaseError> {
        let case: Self = load_config(Some(path.as_ref()))?;
        info!(patches = case.patches.len(), u_ref = case.config.abl.u_ref, "Case loaded");
        Ok(case)
    }

    /// Builds the boundary conditions of every patch.
    ///
    /// # Errors
    /// [`CaseError::Boundary`] with the first patch that fails.
    pub fn registry(&self) -> Result<BoundaryRegistry, CaseError> {
        Ok(BoundaryRegistry::from_specs(&self.patches, &self.config.abl)?)
    }
}
