use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides, e.g. `FCASE__ABL__U_REF=12`.
pub const ENV_PREFIX: &str = "FCASE";

/// Custom error type for config loading.
#[fcase_derive::fcase_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// Layering:
/// 1. **Base File**: the given path (`case` in the working directory when omitted). The format
///    follows the extension (`.toml`, `.json`, `.yaml`, ...).
/// 2. **Environment Overrides**: variables prefixed with `FCASE__`, nested with double
///    underscores (`FCASE__ABL__U_REF` maps to `abl.u_ref`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use fcase_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     patches: Vec<String>,
/// }
///
/// let cfg: Settings = load_config(Some("cases/wind_tunnel.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("case"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context(format!("Failed to read {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
