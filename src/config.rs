use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use smartrecipe_recipe::ScoringStrategy;
use std::env;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub recipes: RecipesConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipesConfig {
    /// JSON dataset to load; the bundled dataset is used when unset
    #[serde(default)]
    pub path: Option<String>,
    /// Default scoring for generate requests that do not pick one
    #[serde(default = "default_scoring")]
    pub scoring: String,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            path: None,
            scoring: default_scoring(),
        }
    }
}

impl RecipesConfig {
    pub fn scoring_strategy(&self) -> Result<ScoringStrategy, String> {
        ScoringStrategy::from_str(&self.scoring)
            .map_err(|_| format!("Unknown scoring strategy: {}", self.scoring))
    }
}

fn default_scoring() -> String {
    ScoringStrategy::Percentage.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `PORT` environment variable
    /// 2. Environment variables (SMARTRECIPE__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("recipes.scoring", default_scoring())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SMARTRECIPE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        self.recipes.scoring_strategy()?;
        if !matches!(self.observability.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Log format must be 'pretty' or 'json', got '{}'",
                self.observability.format
            ));
        }
        Ok(())
    }
}
