use crate::abl::AblConditions;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Case-wide settings shared by every patch.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaseConfigInner {
    pub abl: AblConditions,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct CaseConfig {
    #[serde(flatten, default)]
    inner: Arc<CaseConfigInner>,
}

impl Deref for CaseConfig {
    type Target = CaseConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CaseConfig {
    fn deref_mut(&mut self) -> &mut CaseConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where and how tools write their logs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    /// JSON lines for file output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), dir: None, json: false }
    }
}
