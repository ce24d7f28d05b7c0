use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time financial figures read from a spreadsheet export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub total_cash: f64,
    pub revenue: Option<f64>,
    pub previous_revenue: Option<f64>,
    pub expenses: Option<f64>,
    pub profit: Option<f64>,
    pub investment: Option<f64>,
    pub as_of: Option<NaiveDate>,
}

impl FinancialSnapshot {
    pub fn with_cash(total_cash: f64) -> Self {
        Self {
            total_cash,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTerms {
    #[default]
    Current,
    Accelerated,
    Extended,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpensePosture {
    #[default]
    Current,
    Increased,
    Reduced,
}

/// Scenario knobs. Spend is a multiplier on the baseline media buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioAdjustments {
    pub media_buyer_spend: f64,
    pub payment_terms: PaymentTerms,
    pub expenses: ExpensePosture,
}

impl Default for ScenarioAdjustments {
    fn default() -> Self {
        Self {
            media_buyer_spend: 1.0,
            payment_terms: PaymentTerms::Current,
            expenses: ExpensePosture::Current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn from_cash_balance(cash_balance: f64) -> Self {
        if cash_balance < 0.0 {
            Self::High
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
        }
    }

    /// Status badge shown next to the level
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Low => "🟢",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicators projected for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub cash_balance: f64,
    pub risk_level: RiskLevel,
    pub risk_indicator: String,
    pub runway: i64,
    pub runway_comparison: String,
}

/// Everything the dashboard renders for one snapshot/scenario pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub scenario: Option<DerivedMetrics>,
    pub revenue_change: Option<f64>,
    pub profit_margin: f64,
    pub roi: f64,
}

impl DashboardReport {
    /// JSON document published for the dashboard
    pub fn to_json(
        &self,
        as_of: Option<NaiveDate>,
        generated_at: DateTime<Utc>,
        compact: bool,
    ) -> Result<String> {
        let output = serde_json::json!({
            "generated_at": generated_at.to_rfc3339(),
            "as_of": as_of,
            "report": self,
        });
        let rendered = if compact {
            serde_json::to_string(&output)?
        } else {
            serde_json::to_string_pretty(&output)?
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_json_shape() {
        let report = DashboardReport {
            scenario: None,
            revenue_change: Some(20.0),
            profit_margin: 25.0,
            roi: 0.0,
        };
        let generated_at = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
        let rendered = report
            .to_json(NaiveDate::from_ymd_opt(2024, 3, 31), generated_at, true)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["as_of"], "2024-03-31");
        assert_eq!(value["generated_at"], "2024-04-01T09:00:00+00:00");
        assert_eq!(value["report"]["profit_margin"], 25.0);
        assert!(value["report"]["scenario"].is_null());
        assert!(!rendered.contains('\n'));
    }
}
