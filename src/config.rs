use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Threshold applied when a request does not carry one
    #[serde(default = "default_min_score")]
    pub default_min_score: u8,
    /// Upper bound on the number of ranked results returned
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_min_score: default_min_score(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_score() -> u8 { crate::core::DEFAULT_MIN_SCORE }
fn default_max_results() -> usize { 20 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_timing_weight")]
    pub timing: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            lifestyle: default_lifestyle_weight(),
            budget: default_budget_weight(),
            location: default_location_weight(),
            timing: default_timing_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        ScoringWeights {
            lifestyle: config.lifestyle,
            budget: config.budget,
            location: config.location,
            timing: config.timing,
        }
        .sanitized()
    }
}

fn default_lifestyle_weight() -> f64 { 40.0 }
fn default_budget_weight() -> f64 { 25.0 }
fn default_location_weight() -> f64 { 20.0 }
fn default_timing_weight() -> f64 { 15.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMIE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMIE__MATCHING__MAX_RESULTS -> matching.max_results
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ROOMIE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.lifestyle, 40.0);
        assert_eq!(weights.budget, 25.0);
        assert_eq!(weights.location, 20.0);
        assert_eq!(weights.timing, 15.0);
        assert_eq!(ScoringWeights::from(weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_min_score, 60);
        assert_eq!(matching.max_results, 20);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let toml = r#"
            [matching]
            max_results = 5

            [scoring.weights]
            timing = 30.0
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.matching.max_results, 5);
        assert_eq!(settings.matching.default_min_score, 60);
        assert_eq!(settings.scoring.weights.timing, 30.0);
        assert_eq!(settings.scoring.weights.lifestyle, 40.0);
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_negative_weight_clamped() {
        let weights = WeightsConfig {
            budget: -10.0,
            ..WeightsConfig::default()
        };
        assert_eq!(ScoringWeights::from(weights).budget, 0.0);
    }
}
