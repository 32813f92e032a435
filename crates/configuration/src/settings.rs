use crate::error::ConfigError;
use core_types::{CoveragePolicy, Universe};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// The annualisation factor for daily bars.
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 252;

/// The root configuration structure for the entire application.
///
/// Every section may be omitted from the file, in which case its defaults apply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
    pub strategies: StrategySettings,
    pub diagnostics: DiagnosticsSettings,
}

impl Config {
    /// Checks the values that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()?;
        self.diagnostics.validate()?;
        Ok(())
    }
}

/// Controls how tracing output is filtered and where it is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// An `EnvFilter` directive such as `"info"` or `"strategies=debug"`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
    /// When set, logs go to a daily rolling file in this directory instead of stderr.
    pub directory: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}

impl Logging {
    fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            ConfigError::ValidationError(format!("invalid log level '{}': {}", self.level, e))
        })?;
        Ok(())
    }
}

/// Defaults handed to strategies built through the factory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    /// The universe used when a strategy is run without an explicit one.
    pub default_universe: Option<Universe>,
    pub coverage: CoveragePolicy,
}

/// Parameters for the signal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagnosticsSettings {
    /// Number of return observations per year, used to annualise ratios.
    pub periods_per_year: u32,
    /// Annual risk-free rate, e.g. 0.05 for 5%.
    pub risk_free_rate: f64,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            risk_free_rate: 0.0,
        }
    }
}

impl DiagnosticsSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.periods_per_year == 0 {
            return Err(ConfigError::ValidationError(
                "diagnostics.periods_per_year must be greater than zero".to_string(),
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::ValidationError(
                "diagnostics.risk_free_rate must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}
