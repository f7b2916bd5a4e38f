//! Configuration management

use crate::core::{Appliance, Error, Result};
use crate::registry::ApplianceRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("appliance-cost").join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from `path`, writing the defaults there if it does not exist yet
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            log::info!("Wrote default configuration to {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the startup registry from the seeded appliances
    pub fn seed_registry(&self) -> ApplianceRegistry {
        self.seed.appliances.iter().cloned().collect()
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "pt"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tariff text shown in the price field at startup.
    /// Kept as text so it goes through the same parsing as user input.
    #[serde(default = "default_tariff")]
    pub default_tariff: String,
    /// Currency symbol prefixed to displayed costs
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_tariff() -> String { "0.85".to_string() }
fn default_currency_symbol() -> String { "R$".to_string() }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_tariff: default_tariff(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Appliances loaded into the registry at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_appliances")]
    pub appliances: Vec<Appliance>,
}

fn default_seed_appliances() -> Vec<Appliance> {
    vec![
        Appliance::with_default_image("Ventilador", 120, 5),
        Appliance::with_default_image("Geladeira", 300, 24),
    ]
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            appliances: default_seed_appliances(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.pricing.default_tariff, "0.85");
        assert_eq!(config.pricing.currency_symbol, "R$");
        assert_eq!(config.seed.appliances.len(), 2);
        assert_eq!(config.seed.appliances[0].name(), "Ventilador");
        assert_eq!(config.seed.appliances[1].name(), "Geladeira");
    }

    #[test]
    fn test_load_from_missing_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.seed.appliances.len(), 2);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.seed.appliances, config.seed.appliances);
        assert_eq!(reloaded.pricing.default_tariff, "0.85");
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[pricing]
currency_symbol = "$"

[[seed.appliances]]
name = "TV"
power_watts = 90
daily_usage_hours = 4
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.pricing.default_tariff, "0.85");
        assert_eq!(config.pricing.currency_symbol, "$");
        assert_eq!(config.seed.appliances, vec![Appliance::with_default_image("TV", 90, 4)]);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pricing = [not toml").unwrap();

        match Config::load_from(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("Failed to parse config")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_seed_registry_keeps_order() {
        let registry = Config::default().seed_registry();
        let names: Vec<_> = registry.appliances().map(|a| a.name().to_string()).collect();
        assert_eq!(names, vec!["Ventilador", "Geladeira"]);
    }
}
