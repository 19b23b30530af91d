use super::errors::ConfigError;
use super::models::ProviderConfig;
use std::path::Path;

impl ProviderConfig {
    /// Loads configuration from a TOML file. A missing file is an error and
    /// nothing is written in its place.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !tokio::fs::try_exists(path).await? {
            tracing::warn!("Configuration file not found: {}", path.display());
            return Err(ConfigError::ConfigNotFound(path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML with the same keys the host passes to `init`
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content)?;
        let raw = serde_json::to_value(table)?;
        Ok(Self::from_value(&raw))
    }
}
