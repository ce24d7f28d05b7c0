use super::traits::ConfigSection;
use crate::error::FinboardError;
use serde::{Deserialize, Serialize};

/// Constants behind the scenario projection.
///
/// The unit costs are placeholder figures pending confirmation with finance;
/// the defaults reproduce the dashboard's current arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Cash consumed per unit of media buyer spend multiplier
    pub spend_unit_cost: f64,
    /// Daily burn per unit of spend multiplier, used for runway
    pub runway_unit_cost: f64,
    pub min_spend: f64,
    pub max_spend: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spend_unit_cost: 3000.0,
            runway_unit_cost: 100.0,
            min_spend: 0.5,
            max_spend: 2.0,
        }
    }
}

impl ConfigSection for ScenarioConfig {
    fn section_name() -> &'static str {
        "scenario"
    }

    fn validate(&self) -> Result<(), FinboardError> {
        if !self.spend_unit_cost.is_finite() || self.spend_unit_cost < 0.0 {
            return Err(FinboardError::Configuration(
                "Spend unit cost must be a non-negative number".to_string()
            ));
        }
        if !self.runway_unit_cost.is_finite() || self.runway_unit_cost < 0.0 {
            return Err(FinboardError::Configuration(
                "Runway unit cost must be a non-negative number".to_string()
            ));
        }
        let bounds_ok = self.min_spend > 0.0
            && self.min_spend <= self.max_spend
            && self.max_spend.is_finite();
        if !bounds_ok {
            return Err(FinboardError::Configuration(format!(
                "Spend bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.min_spend, self.max_spend
            )));
        }
        Ok(())
    }
}
