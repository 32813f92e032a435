use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{
    Config, DEFAULT_PERIODS_PER_YEAR, DiagnosticsSettings, Logging, StrategySettings,
};
pub use telemetry::init_tracing;

/// Prefix of the environment variables that override file values,
/// e.g. `ALPHALAB__DIAGNOSTICS__PERIODS_PER_YEAR=52`.
pub const ENV_PREFIX: &str = "ALPHALAB";
const ENV_SEPARATOR: &str = "__";

/// Loads the application configuration from a TOML file.
///
/// Environment variables prefixed with `ALPHALAB__` are layered on top of the
/// file, and the merged result is validated before it is returned.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    build_config(path.as_ref(), None)
}

fn build_config(
    path: &Path,
    env_source: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env_source),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::CoveragePolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_toml(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_full_file() {
        let file = write_toml(
            r#"
            [logging]
            level = "debug"
            json = true

            [strategies]
            default_universe = ["AAPL", "GOOGL"]
            coverage = { fill_missing = 0.0 }

            [diagnostics]
            periods_per_year = 52
            risk_free_rate = 0.02
            "#,
        );

        let config = build_config(file.path(), Some(config::Map::new())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        let universe = config.strategies.default_universe.unwrap();
        assert_eq!(universe.as_slice(), ["AAPL", "GOOGL"]);
        assert_eq!(config.strategies.coverage, CoveragePolicy::FillMissing(0.0));
        assert_eq!(config.diagnostics.periods_per_year, 52);
        assert!((config.diagnostics.risk_free_rate - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_toml("[logging]\nlevel = \"warn\"\n");

        let config = build_config(file.path(), Some(config::Map::new())).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.strategies.default_universe.is_none());
        assert_eq!(config.strategies.coverage, CoveragePolicy::Strict);
        assert_eq!(config.diagnostics, DiagnosticsSettings::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = write_toml("[diagnostics]\nperiods_per_year = 252\n");
        let mut env = config::Map::new();
        env.insert(
            "ALPHALAB__DIAGNOSTICS__PERIODS_PER_YEAR".to_string(),
            "12".to_string(),
        );

        let config = build_config(file.path(), Some(env)).unwrap();
        assert_eq!(config.diagnostics.periods_per_year, 12);
    }

    #[test]
    fn test_rejects_zero_periods() {
        let file = write_toml("[diagnostics]\nperiods_per_year = 0\n");

        let err = build_config(file.path(), Some(config::Map::new())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_unparseable_log_level() {
        let file = write_toml("[logging]\nlevel = \"==\"\n");

        let err = build_config(file.path(), Some(config::Map::new())).unwrap_err();
        match err {
            ConfigError::ValidationError(message) => assert!(message.contains("==")),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_finite_risk_free_rate() {
        let file = write_toml("[diagnostics]\nrisk_free_rate = inf\n");

        let err = build_config(file.path(), Some(config::Map::new())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_duplicate_universe() {
        let file = write_toml("[strategies]\ndefault_universe = [\"AAPL\", \"AAPL\"]\n");

        let err = build_config(file.path(), Some(config::Map::new())).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = load_config("/nonexistent/alphalab.toml").unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
