use std::env;

use crate::error::AppError;
use crate::framework::DEFAULT_FRAMEWORK;

/// Default number of evidence pages generated per analysis.
pub const DEFAULT_PAGES: usize = 100;
/// Default number of independent debate cycles per analysis.
pub const DEFAULT_CYCLES: usize = 100;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// Analysis defaults (overridable per-run via the CLI)
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub pages: usize,
    pub cycles: usize,
    pub framework: String,
    /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let analysis = AnalysisConfig {
            pages: env::var("VERIDICT_PAGES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAGES),
            cycles: env::var("VERIDICT_CYCLES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CYCLES),
            framework: env::var("VERIDICT_FRAMEWORK")
                .unwrap_or_else(|_| DEFAULT_FRAMEWORK.to_string()),
            seed: env::var("VERIDICT_SEED").ok().and_then(|s| s.parse().ok()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let config = Config { analysis, logging };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero page or cycle counts; both must be positive for an
    /// analysis to produce a meaningful mean and spread.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.analysis.pages == 0 {
            return Err(AppError::config("VERIDICT_PAGES must be positive"));
        }
        if self.analysis.cycles == 0 {
            return Err(AppError::config("VERIDICT_CYCLES must be positive"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            analysis: AnalysisConfig {
                pages: DEFAULT_PAGES,
                cycles: DEFAULT_CYCLES,
                framework: DEFAULT_FRAMEWORK.to_string(),
                seed: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.pages, DEFAULT_PAGES);
        assert_eq!(config.analysis.cycles, DEFAULT_CYCLES);
        assert_eq!(config.analysis.framework, DEFAULT_FRAMEWORK);
        assert!(config.analysis.seed.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let mut config = Config::default();
        config.analysis.pages = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.analysis.cycles = 0;
        assert!(config.validate().is_err());
    }
}
