use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the response interpreter
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Treat every 2xx status like 200 instead of failing with
    /// `UnexpectedStatus`
    #[serde(default)]
    pub accept_any_success: bool,
}

impl InterpreterConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SEARCH__ prefix
    /// 2. recipe_search.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SEARCH__ACCEPT_ANY_SUCCESS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from `recipe_search.toml` and `RECIPE_SEARCH__*`
/// environment variables. Both sources are optional.
pub fn load_config() -> Result<InterpreterConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("recipe_search").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_SEARCH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<InterpreterConfig, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_default_is_strict() {
        assert!(!InterpreterConfig::default().accept_any_success);
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config, InterpreterConfig::default());
    }

    #[test]
    fn test_accept_any_success_from_toml() {
        let config = from_toml("accept_any_success = true").unwrap();
        assert!(config.accept_any_success);
    }

    #[test]
    fn test_load_config_without_file() {
        // No recipe_search.toml in the test working directory
        let result = load_config();
        assert!(result.is_ok());
    }
}
