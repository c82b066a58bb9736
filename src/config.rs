use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::Recommender;
use crate::models::ScoringWeights;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid scoring configuration: {0}")]
    InvalidScoring(String),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_max_payload_bytes() -> usize { 4 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    #[serde(default = "default_experience_cap")]
    pub experience_cap_projects: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            min_score: default_min_score(),
            experience_cap_projects: default_experience_cap(),
        }
    }
}

fn default_min_score() -> u32 { 30 }
fn default_experience_cap() -> u32 { 20 }

impl ScoringSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let w = &self.weights;
        let all = [
            ("skills", w.skills),
            ("rating", w.rating),
            ("completeness", w.completeness),
            ("experience", w.experience),
        ];

        if let Some((name, value)) = all.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(SettingsError::InvalidScoring(format!(
                "weight {} must be a non-negative number, got {}",
                name, value
            )));
        }

        if all.iter().map(|(_, v)| v).sum::<f64>() <= 0.0 {
            return Err(SettingsError::InvalidScoring(
                "at least one weight must be positive".to_string(),
            ));
        }

        if self.experience_cap_projects == 0 {
            return Err(SettingsError::InvalidScoring(
                "experience_cap_projects must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the recommender these settings describe
    pub fn recommender(&self) -> Result<Recommender, SettingsError> {
        self.validate()?;

        Ok(Recommender::new(ScoringWeights::from(&self.weights))
            .with_min_score(self.min_score)
            .with_experience_cap(self.experience_cap_projects))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_completeness_weight")]
    pub completeness: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            rating: default_rating_weight(),
            completeness: default_completeness_weight(),
            experience: default_experience_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            rating: config.rating,
            completeness: config.completeness,
            experience: config.experience,
        }
    }
}

fn default_skills_weight() -> f64 { 40.0 }
fn default_rating_weight() -> f64 { 25.0 }
fn default_completeness_weight() -> f64 { 20.0 }
fn default_experience_weight() -> f64 { 15.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    /// Upper bound for a caller-supplied `limit`
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// Largest freelancer list accepted in one request
    #[serde(default = "default_max_freelancers")]
    pub max_freelancers: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
            max_freelancers: default_max_freelancers(),
        }
    }
}

fn default_max_limit() -> usize { 100 }
fn default_max_freelancers() -> usize { 5000 }

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
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RECOMMENDER__)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RECOMMENDER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.scoring.validate()?;
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RECOMMENDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
