use super::{scenario::ScenarioConfig, traits::ConfigSection};
use crate::error::FinboardError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `FINBOARD_SCENARIO__SPEND_UNIT_COST`
pub const ENV_PREFIX: &str = "FINBOARD";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scenario: ScenarioConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FinboardError> {
        self.scenario
            .validate()
            .map_err(Self::in_section::<ScenarioConfig>)?;
        Ok(())
    }

    fn in_section<S: ConfigSection>(err: FinboardError) -> FinboardError {
        match err {
            FinboardError::Configuration(msg) => {
                FinboardError::Configuration(format!("[{}] {}", S::section_name(), msg))
            }
            other => other,
        }
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, applying `FINBOARD_*` environment overrides on top.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FinboardError> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| FinboardError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| FinboardError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());

        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FinboardError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| FinboardError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| FinboardError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, FinboardError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| FinboardError::Configuration("Config lock poisoned".to_string()))
    }

    /// Apply `f` to a copy; the stored config only changes if the result validates.
    pub fn update<F>(&self, f: F) -> Result<(), FinboardError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write_lock()?;
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, FinboardError> {
        self.config
            .write()
            .map_err(|_| FinboardError::Configuration("Config lock poisoned".to_string()))
    }
}
