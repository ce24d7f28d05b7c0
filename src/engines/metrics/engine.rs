// src/engines/metrics/engine.rs
use crate::config::ScenarioConfig;
use crate::engines::metrics::{Ratios, ScenarioProjector};
use crate::types::*;

pub struct MetricsEngine {
    projector: ScenarioProjector,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(&ScenarioConfig::default())
    }
}

impl MetricsEngine {
    pub fn new(config: &ScenarioConfig) -> Self {
        Self {
            projector: ScenarioProjector::new(config),
        }
    }

    pub fn derive_scenario(
        &self,
        snapshot: Option<&FinancialSnapshot>,
        adjustments: Option<&ScenarioAdjustments>,
    ) -> Option<DerivedMetrics> {
        self.projector.derive(snapshot, adjustments)
    }

    pub fn report(
        &self,
        snapshot: Option<&FinancialSnapshot>,
        adjustments: Option<&ScenarioAdjustments>,
    ) -> DashboardReport {
        let scenario = self.derive_scenario(snapshot, adjustments);
        if scenario.is_none() {
            log::debug!("Scenario not computable: no adjustments supplied");
        }

        let revenue = snapshot.and_then(|s| s.revenue);
        let previous_revenue = snapshot.and_then(|s| s.previous_revenue);
        let expenses = snapshot.and_then(|s| s.expenses);
        let investment = snapshot.and_then(|s| s.investment);

        let revenue_change =
            revenue.and_then(|current| Ratios::percentage_change(current, previous_revenue));
        let profit_margin = Ratios::profit_margin(revenue, expenses.unwrap_or(0.0));

        // Explicit profit wins; otherwise derive it when both sides are known
        let profit = snapshot
            .and_then(|s| s.profit)
            .or_else(|| revenue.zip(expenses).map(|(r, e)| r - e))
            .unwrap_or(0.0);
        let roi = Ratios::roi(profit, investment);

        DashboardReport {
            scenario,
            revenue_change,
            profit_margin,
            roi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_without_snapshot() {
        let engine = MetricsEngine::default();
        let report = engine.report(None, Some(&ScenarioAdjustments::default()));

        let scenario = report.scenario.unwrap();
        assert_eq!(scenario.cash_balance, -3000.0);
        assert_eq!(scenario.risk_level, RiskLevel::High);
        assert_eq!(report.revenue_change, None);
        assert_eq!(report.profit_margin, 0.0);
        assert_eq!(report.roi, 0.0);
    }

    #[test]
    fn test_report_derives_profit_for_roi() {
        let snapshot = FinancialSnapshot {
            total_cash: 50000.0,
            revenue: Some(12000.0),
            previous_revenue: Some(10000.0),
            expenses: Some(9000.0),
            investment: Some(6000.0),
            ..Default::default()
        };
        let report = MetricsEngine::default().report(Some(&snapshot), None);

        assert!(report.scenario.is_none());
        assert_eq!(report.revenue_change, Some(20.0));
        assert_eq!(report.profit_margin, 25.0);
        // (12000 - 9000) / 6000
        assert_eq!(report.roi, 50.0);
    }

    #[test]
    fn test_report_prefers_explicit_profit() {
        let snapshot = FinancialSnapshot {
            revenue: Some(12000.0),
            expenses: Some(9000.0),
            profit: Some(1500.0),
            investment: Some(3000.0),
            ..Default::default()
        };
        let report = MetricsEngine::default().report(Some(&snapshot), None);
        assert_eq!(report.roi, 50.0);
    }
}
