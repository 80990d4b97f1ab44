//! Filter engine configuration.
//!
//! [`FilterConfig`] can be built in code or loaded from
//! `config/filterkit.toml` and environment variables with
//! [`FilterConfig::load()`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/filterkit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    /// Turn one-element collections into equality clauses
    #[serde(default = "default_collapse_single_element")]
    pub collapse_single_element: bool,
    /// Treat ranges without bounds as errors in strict mode instead of no-ops
    #[serde(default)]
    pub reject_empty_ranges: bool,
    /// Log skipped properties at `warn` instead of `debug`
    #[serde(default)]
    pub warn_on_skip: bool,
}

fn default_collapse_single_element() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            collapse_single_element: default_collapse_single_element(),
            reject_empty_ranges: false,
            warn_on_skip: false,
        }
    }
}

impl FilterConfig {
    /// Load the `[filter]` section from `config/filterkit.toml`, overridden by
    /// `FILTERKIT_FILTER__*` environment variables.
    ///
    /// A missing file or section yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix("FILTERKIT").separator("__"));

        match Self::from_builder(builder) {
            Ok(cfg) => Ok(cfg),
            Err(err) => {
                // The file existed but was unreadable: warn and retry with env only
                if std::path::Path::new(CONFIG_FILE).exists() {
                    log::warn!("failed to load {CONFIG_FILE}, falling back to env: {err}");
                }
                Self::from_builder(
                    Config::builder().add_source(Environment::with_prefix("FILTERKIT").separator("__")),
                )
                .map_err(|env_err| {
                    ConfigError::Message(format!(
                        "Failed to load filter configuration from file and env: {err}, then env-only error: {env_err}"
                    ))
                })
            }
        }
    }

    pub(crate) fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder.build()?;
        match settings.get::<FilterConfig>("filter") {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Filter configuration could not be loaded: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<FilterConfig, ConfigError> {
        FilterConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_defaults() {
        let cfg = FilterConfig::default();
        assert!(cfg.collapse_single_element);
        assert!(!cfg.reject_empty_ranges);
        assert!(!cfg.warn_on_skip);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        assert_eq!(from_toml("[other]\nkey = 1\n").unwrap(), FilterConfig::default());
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let cfg = from_toml("[filter]\nreject_empty_ranges = true\n").unwrap();
        assert!(cfg.reject_empty_ranges);
        assert!(cfg.collapse_single_element);
    }

    #[test]
    fn test_invalid_value_is_error() {
        assert!(from_toml("[filter]\ncollapse_single_element = \"sometimes\"\n").is_err());
    }
}
