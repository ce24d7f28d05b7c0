// src/engines/metrics/ratios.rs

/// Percentage-style KPI helpers. Zero or absent denominators yield a sentinel
/// instead of a division fault.
pub struct Ratios;

impl Ratios {
    /// Period-over-period change in percent, `None` when there is no base to compare.
    pub fn percentage_change(current: f64, previous: Option<f64>) -> Option<f64> {
        match previous {
            Some(previous) if previous != 0.0 => Some((current - previous) / previous * 100.0),
            _ => None,
        }
    }

    pub fn profit_margin(revenue: Option<f64>, expenses: f64) -> f64 {
        match revenue {
            Some(revenue) if revenue != 0.0 => (revenue - expenses) / revenue * 100.0,
            _ => 0.0,
        }
    }

    pub fn roi(profit: f64, investment: Option<f64>) -> f64 {
        match investment {
            Some(investment) if investment != 0.0 => profit / investment * 100.0,
            _ => 0.0,
        }
    }
}
