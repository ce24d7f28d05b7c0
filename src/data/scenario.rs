use crate::config::ScenarioConfig;
use crate::error::{FinboardError, Result};
use crate::types::ScenarioAdjustments;
use std::path::Path;

impl ScenarioAdjustments {
    /// Enforce the bounds the dashboard controls apply to the spend slider.
    pub fn validate(&self, config: &ScenarioConfig) -> Result<()> {
        let spend = self.media_buyer_spend;
        if !spend.is_finite() {
            return Err(FinboardError::Validation(
                "Media buyer spend must be a finite number".to_string()
            ));
        }
        if spend < config.min_spend || spend > config.max_spend {
            return Err(FinboardError::Validation(format!(
                "Media buyer spend {} outside [{}, {}]",
                spend, config.min_spend, config.max_spend
            )));
        }
        Ok(())
    }
}

/// Reads scenario knobs from a TOML file, e.g.
///
/// ```toml
/// media_buyer_spend = 1.5
/// payment_terms = "accelerated"
/// expenses = "reduced"
/// ```
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn from_toml_str(contents: &str, config: &ScenarioConfig) -> Result<ScenarioAdjustments> {
        let adjustments: ScenarioAdjustments = toml::from_str(contents)?;
        adjustments.validate(config)?;
        Ok(adjustments)
    }

    pub fn load<P: AsRef<Path>>(path: P, config: &ScenarioConfig) -> Result<ScenarioAdjustments> {
        let contents = std::fs::read_to_string(&path)?;
        let adjustments = Self::from_toml_str(&contents, config)?;
        log::info!(
            "Loaded scenario from {}: spend x{}, terms {:?}, expenses {:?}",
            path.as_ref().display(),
            adjustments.media_buyer_spend,
            adjustments.payment_terms,
            adjustments.expenses
        );
        Ok(adjustments)
    }
}
