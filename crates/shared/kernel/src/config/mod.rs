use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "heritage";
/// Prefix of environment overrides, e.g. `HERITAGE__WINDOW__WIDTH`.
pub const ENV_PREFIX: &str = "HERITAGE";

#[heritage_derive::heritage_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration tree from an optional file overlaid by environment variables.
///
/// 1. **File**: `path`, or `heritage` in the working directory. The extension may be
///    omitted (`heritage.toml`, `heritage.json`, ... are probed). A missing file is
///    not an error; `T` is expected to fill the gaps with `#[serde(default)]`.
/// 2. **Environment**: variables prefixed with `HERITAGE__`, nested with `__`
///    (`HERITAGE__LOGGING__LEVEL` maps to `logging.level`). Values are parsed, so
///    `HERITAGE__WINDOW__WIDTH=1024` and `HERITAGE__LOGGING__JSON=true` fill
///    numeric and boolean fields.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file exists but cannot be parsed, or when
/// the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use heritage_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct Settings {
///     width: u32,
/// }
///
/// let cfg: Settings = load_config(Some("does/not/exist")).unwrap_or_default();
/// assert_eq!(cfg.width, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, None)
}

/// Same as [`load_config`], but reads the overlay from `vars` instead of the
/// process environment. Keys keep their `HERITAGE__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, K, V>(
    path: Option<impl AsRef<Path>>,
    vars: impl IntoIterator<Item = (K, V)>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    K: Into<String>,
    V: Into<String>,
{
    let vars: Map<String, String> = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    load(path, Some(vars))
}

fn load<T>(path: Option<impl AsRef<Path>>, vars: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(vars),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
