//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SKILL_ROUTER` prefix and nested values use double underscores as separators.
//! An optional `skill-router.toml` (or `.yaml`) in the working directory is read
//! first; environment variables override it.
//!
//! # Example
//!
//! ```no_run
//! use skill_router::config::AppConfig;
//!
//! let config = AppConfig::load()
//!     .and_then(AppConfig::validated)
//!     .expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.bind_address());
//! ```

mod error;
mod features;
mod server;
mod skill;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, LogFormat, ServerConfig};
pub use skill::SkillConfig;

use serde::Deserialize;
use std::path::Path;

/// Base name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "skill-router";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration serving the bundled content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Skill behavior and content sources
    #[serde(default)]
    pub skill: SkillConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from the optional config file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `skill-router.{toml,yaml,json}` from the working directory if present
    /// 3. Reads environment variables with `SKILL_ROUTER` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SKILL_ROUTER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SKILL_ROUTER__SKILL__FACT_INTENT=FunFactIntent` -> `skill.fact_intent = FunFactIntent`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::load_with_file(Path::new(CONFIG_FILE_NAME))
    }

    /// Same as [`AppConfig::load`] with an explicit config file (extension
    /// optional). The file may be absent. `.env` is not read.
    pub fn load_with_file(file: &Path) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(file).required(false))
            .add_source(
                config::Environment::default()
                    .prefix("SKILL_ROUTER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Port, bind address and timeout bounds
    /// - Non-empty default language
    /// - Well-formed fallback locale
    /// - Content paths when bundled content is disabled
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.skill.validate(self.features.bundled_content)?;
        Ok(())
    }

    /// Validate and hand the configuration back, for chaining after `load`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` wrapping the first invalid value.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "SKILL_ROUTER__SERVER__PORT",
        "SKILL_ROUTER__SERVER__ENVIRONMENT",
        "SKILL_ROUTER__SERVER__LOG_FORMAT",
        "SKILL_ROUTER__SKILL__FACT_INTENT",
        "SKILL_ROUTER__SKILL__FALLBACK_LOCALE",
        "SKILL_ROUTER__FEATURES__VERBOSE_ERRORS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load() -> Result<AppConfig, ConfigError> {
        AppConfig::load_with_file(Path::new("does-not-exist/skill-router"))
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.skill.fact_intent, "CuriosidadIntent");
        assert!(config.features.bundled_content);
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKILL_ROUTER__SERVER__PORT", "3000");
        env::set_var("SKILL_ROUTER__SERVER__LOG_FORMAT", "json");
        env::set_var("SKILL_ROUTER__SKILL__FACT_INTENT", "FunFactIntent");
        env::set_var("SKILL_ROUTER__FEATURES__VERBOSE_ERRORS", "true");
        let result = load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.skill.fact_intent, "FunFactIntent");
        assert!(config.features.verbose_errors);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKILL_ROUTER__SERVER__ENVIRONMENT", "production");
        let result = load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_fallback_locale_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKILL_ROUTER__SKILL__FALLBACK_LOCALE", "-US");
        let result = load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFallbackLocale(_))
        ));
        assert!(matches!(
            config.validated(),
            Err(ConfigError::ValidationFailed(ValidationError::InvalidFallbackLocale(_)))
        ));
    }

    #[test]
    fn test_file_values_are_overridden_by_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\nhost = \"127.0.0.1\"\n\n[skill]\nuser_agent = \"custom/agent\""
        )
        .unwrap();

        env::set_var("SKILL_ROUTER__SERVER__PORT", "9100");
        let result = AppConfig::load_with_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.skill.user_agent(), Some("custom/agent"));
    }
}
