// src/engines/metrics/scenario.rs
use crate::config::ScenarioConfig;
use crate::types::*;

/// Projects cash, risk and runway for a set of scenario knobs.
#[derive(Debug, Clone)]
pub struct ScenarioProjector {
    spend_unit_cost: f64,
    runway_unit_cost: f64,
}

impl Default for ScenarioProjector {
    fn default() -> Self {
        Self::new(&ScenarioConfig::default())
    }
}

impl ScenarioProjector {
    pub fn new(config: &ScenarioConfig) -> Self {
        Self {
            spend_unit_cost: config.spend_unit_cost,
            runway_unit_cost: config.runway_unit_cost,
        }
    }

    /// Returns `None` while the scenario is not computable (no adjustments yet).
    /// A missing snapshot counts as zero cash.
    pub fn derive(
        &self,
        snapshot: Option<&FinancialSnapshot>,
        adjustments: Option<&ScenarioAdjustments>,
    ) -> Option<DerivedMetrics> {
        let adjustments = adjustments?;
        let total_cash = snapshot.map(|s| s.total_cash).unwrap_or(0.0);
        let spend = adjustments.media_buyer_spend;

        let cash_balance = total_cash - spend * self.spend_unit_cost;
        let risk_level = RiskLevel::from_cash_balance(cash_balance);

        // Zero (or NaN) burn falls back to a divisor of one
        let mut divisor = spend * self.runway_unit_cost;
        if divisor == 0.0 || divisor.is_nan() {
            divisor = 1.0;
        }
        let runway = (cash_balance / divisor).floor() as i64;

        Some(DerivedMetrics {
            cash_balance,
            risk_level,
            risk_indicator: risk_level.indicator().to_string(),
            runway,
            runway_comparison: format!("{} days", runway),
        })
    }
}
