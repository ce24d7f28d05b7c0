use finboard::types::{ExpensePosture, FinancialSnapshot, PaymentTerms, RiskLevel, ScenarioAdjustments};
use finboard::{MetricsEngine, Ratios, ScenarioProjector};

fn adjustments(media_buyer_spend: f64) -> ScenarioAdjustments {
    ScenarioAdjustments {
        media_buyer_spend,
        payment_terms: PaymentTerms::Current,
        expenses: ExpensePosture::Current,
    }
}

#[test]
fn test_healthy_scenario() {
    let snapshot = FinancialSnapshot::with_cash(10000.0);
    let metrics = ScenarioProjector::default()
        .derive(Some(&snapshot), Some(&adjustments(1.0)))
        .unwrap();

    // 10000 - 1.0 * 3000 = 7000; 7000 / 100 = 70
    assert_eq!(metrics.cash_balance, 7000.0);
    assert_eq!(metrics.risk_level, RiskLevel::Low);
    assert_eq!(metrics.risk_level.to_string(), "Low");
    assert_eq!(metrics.runway, 70);
    assert_eq!(metrics.runway_comparison, "70 days");
}

#[test]
fn test_overspent_scenario_is_high_risk() {
    let snapshot = FinancialSnapshot::with_cash(1000.0);
    let metrics = ScenarioProjector::default()
        .derive(Some(&snapshot), Some(&adjustments(2.0)))
        .unwrap();

    // 1000 - 2.0 * 3000 = -5000; -5000 / 200 = -25
    assert_eq!(metrics.cash_balance, -5000.0);
    assert_eq!(metrics.risk_level, RiskLevel::High);
    assert_eq!(metrics.risk_indicator, RiskLevel::High.indicator());
    assert_ne!(RiskLevel::High.indicator(), RiskLevel::Low.indicator());
    assert_eq!(metrics.runway, -25);
}

#[test]
fn test_missing_adjustments_not_computable() {
    let snapshot = FinancialSnapshot::with_cash(10000.0);
    let projector = ScenarioProjector::default();

    assert!(projector.derive(Some(&snapshot), None).is_none());
    assert!(projector.derive(None, None).is_none());
}

#[test]
fn test_missing_snapshot_counts_as_zero_cash() {
    let metrics = ScenarioProjector::default()
        .derive(None, Some(&adjustments(0.5)))
        .unwrap();

    assert_eq!(metrics.cash_balance, -1500.0);
    assert_eq!(metrics.runway, -30);
}

#[test]
fn test_payment_terms_and_expenses_do_not_move_projection() {
    let snapshot = FinancialSnapshot::with_cash(10000.0);
    let projector = ScenarioProjector::default();
    let baseline = projector.derive(Some(&snapshot), Some(&adjustments(1.0)));

    let shifted = ScenarioAdjustments {
        media_buyer_spend: 1.0,
        payment_terms: PaymentTerms::Extended,
        expenses: ExpensePosture::Increased,
    };
    assert_eq!(projector.derive(Some(&snapshot), Some(&shifted)), baseline);
}

#[test]
fn test_ratio_sentinels() {
    for current in [-10.0, 0.0, 42.0] {
        assert_eq!(Ratios::percentage_change(current, Some(0.0)), None);
        assert_eq!(Ratios::percentage_change(current, None), None);
    }
    for expenses in [0.0, 100.0] {
        assert_eq!(Ratios::profit_margin(Some(0.0), expenses), 0.0);
        assert_eq!(Ratios::profit_margin(None, expenses), 0.0);
    }
    assert_eq!(Ratios::roi(100.0, Some(0.0)), 0.0);
    assert_eq!(Ratios::roi(100.0, None), 0.0);
}

#[test]
fn test_ratio_formulas() {
    let (current, previous) = (135.0, 120.0);
    assert_eq!(
        Ratios::percentage_change(current, Some(previous)),
        Some((current - previous) / previous * 100.0)
    );
    assert_eq!(Ratios::profit_margin(Some(400.0), 300.0), 25.0);
    assert_eq!(Ratios::roi(750.0, Some(3000.0)), 25.0);
}

#[test]
fn test_repeated_calls_are_identical() {
    let engine = MetricsEngine::default();
    let snapshot = FinancialSnapshot {
        total_cash: 8000.0,
        revenue: Some(5000.0),
        previous_revenue: Some(4000.0),
        expenses: Some(3500.0),
        investment: Some(1000.0),
        ..Default::default()
    };
    let knobs = adjustments(1.25);

    let first = engine.report(Some(&snapshot), Some(&knobs));
    // Interleave an unrelated call
    let _ = engine.report(None, Some(&adjustments(2.0)));
    let second = engine.report(Some(&snapshot), Some(&knobs));

    assert_eq!(first, second);
}
