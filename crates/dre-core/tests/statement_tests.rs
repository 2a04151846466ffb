use dre_core::catalog::{Product, ProductCatalog};
use dre_core::scenarios::sensitivity::{self, ScenarioShift};
use dre_core::statement::income::{self, StatementInput};
use dre_core::statement::report;
use dre_core::statement::tax_regime::{self, TaxRegime};
use dre_core::statement::validation;
use dre_core::DreError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn margherita() -> StatementInput {
    // The default simulation: pizza costing 15.50, sold at 100% markup
    StatementInput {
        product_name: "Margherita".to_string(),
        unit_cost: dec!(15.50),
        markup_pct: dec!(100),
        quantity: 100,
        tax_sales_pct: dec!(8.5),
        cancellations_pct: dec!(2),
        returns_pct: dec!(1),
        platform_fee_pct: dec!(12),
        rent_utilities: dec!(3000),
        salaries: dec!(5000),
        marketing: dec!(500),
        other_expenses: dec!(500),
        financial_expenses: dec!(200),
        irpj_pct: dec!(15),
        csll_pct: dec!(9),
    }
}

// ===========================================================================
// Full statement walk-through
// ===========================================================================

#[test]
fn test_full_statement_breakdown() {
    let result = income::calculate_statement(&margherita());
    let s = &result.result;

    assert_eq!(s.sale_price, dec!(31.00));
    assert_eq!(s.gross_revenue, dec!(3100.00));
    assert_eq!(s.tax_sales_value, dec!(263.50));
    assert_eq!(s.cancellations_value, dec!(62.00));
    assert_eq!(s.returns_value, dec!(31.00));
    assert_eq!(s.platform_fee_value, dec!(372.00));
    assert_eq!(s.total_deductions, dec!(728.50));
    assert_eq!(s.net_revenue, dec!(2371.50));
    assert_eq!(s.total_cost, dec!(1550.00));
    assert_eq!(s.gross_profit, dec!(821.50));
    assert_eq!(s.total_operating_expenses, dec!(9000.00));
    assert_eq!(s.operational_result, dec!(-8178.50));
    assert_eq!(s.profit_before_tax, dec!(-8378.50));
    assert_eq!(s.irpj_value, dec!(0));
    assert_eq!(s.csll_value, dec!(0));
    assert_eq!(s.net_profit, dec!(-8378.50));
    assert_eq!(s.contribution_margin_per_unit, dec!(8.215));
    assert_eq!(s.fixed_costs, dec!(9200.00));
    assert_eq!(s.breakeven_units, dec!(1120));
}

#[test]
fn test_net_revenue_never_negative() {
    // Push every deduction to its cap: 400% of gross revenue
    let mut input = margherita();
    input.tax_sales_pct = dec!(100);
    input.cancellations_pct = dec!(100);
    input.returns_pct = dec!(100);
    input.platform_fee_pct = dec!(100);
    let result = income::calculate_statement(&input);
    assert!(result.result.net_revenue >= dec!(0));
    assert_eq!(result.result.net_revenue, dec!(0));
}

#[test]
fn test_zero_gross_revenue_zeroes_every_share() {
    let mut input = margherita();
    input.unit_cost = dec!(0);
    let result = income::calculate_statement(&input);
    let rs = &result.result.revenue_share;

    for share in [
        rs.tax_sales,
        rs.cancellations,
        rs.returns,
        rs.platform_fee,
        rs.net_revenue,
        rs.total_cost,
        rs.gross_profit,
        rs.operating_expenses,
        rs.operational_result,
        rs.financial_expenses,
        rs.profit_before_tax,
        rs.income_tax,
        rs.net_profit,
    ] {
        assert_eq!(share, dec!(0));
    }
    assert_eq!(result.result.net_margin, dec!(0));
    assert_eq!(result.result.gross_margin, dec!(0));
    assert_eq!(result.result.operational_margin, dec!(0));
}

#[test]
fn test_loss_passes_through_untaxed() {
    let result = income::calculate_statement(&margherita());
    let s = &result.result;
    assert!(s.profit_before_tax < dec!(0));
    assert_eq!(s.irpj_value, dec!(0));
    assert_eq!(s.csll_value, dec!(0));
    assert_eq!(s.net_profit, s.profit_before_tax);
}

#[test]
fn test_unreachable_breakeven_reports_zero() {
    let mut input = margherita();
    input.markup_pct = dec!(0);
    input.platform_fee_pct = dec!(50);
    // selling at cost while paying 50% platform fees: every unit loses money
    let result = income::calculate_statement(&input);
    assert!(result.result.contribution_margin_per_unit < dec!(0));
    assert_eq!(result.result.breakeven_units, dec!(0));
}

#[test]
fn test_calculation_is_idempotent() {
    let input = margherita();
    let first = income::calculate_statement(&input);
    let second = income::calculate_statement(&input);
    assert_eq!(first.result, second.result);
}

// ===========================================================================
// Scenario comparator purity
// ===========================================================================

#[test]
fn test_scenarios_never_mutate_the_baseline() {
    let base = margherita();
    let pristine = base.clone();
    let before = income::calculate_statement(&base);

    for _ in 0..10 {
        let _ = sensitivity::analyze_sensitivity(&base, &sensitivity::standard_shifts());
    }

    assert_eq!(base, pristine);
    let after = income::calculate_statement(&base);
    assert_eq!(before.result, after.result);
}

#[test]
fn test_standard_scenario_deltas() {
    let result = sensitivity::analyze_sensitivity(&margherita(), &sensitivity::standard_shifts());
    let out = &result.result;
    assert_eq!(out.baseline_net_profit, dec!(-8378.50));

    assert_eq!(out.scenarios[0].name, "Markup +10%");
    assert_eq!(out.scenarios[0].delta, dec!(118.575));
    assert_eq!(out.scenarios[1].delta, dec!(164.30));
    assert_eq!(out.scenarios[2].delta, dec!(-82.15));
    assert_eq!(out.scenarios[3].delta, dec!(1350.00));
}

#[test]
fn test_custom_shift_from_json() {
    let shift: ScenarioShift = serde_json::from_str(
        r#"{ "name": "Double volume", "quantity_change_pct": "100" }"#,
    )
    .unwrap();
    let shifted = sensitivity::apply_shift(&margherita(), &shift);
    assert_eq!(shifted.quantity, 200);
}

// ===========================================================================
// Validation and regimes
// ===========================================================================

#[test]
fn test_validation_rejects_out_of_range_parameters() {
    let mut input = margherita();
    input.quantity = 0;
    input.platform_fee_pct = dec!(120);
    input.rent_utilities = dec!(20_000_000);

    let errors = validation::validate(&input);
    assert_eq!(errors.len(), 3);

    match validation::ensure_valid(&input) {
        Err(DreError::Validation { messages }) => assert_eq!(messages.len(), 3),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_regime_preset_changes_the_statement() {
    let mut input = margherita();
    input.quantity = 2000; // profitable volume so profit taxes apply

    let custom = income::calculate_statement(&input).result;

    tax_regime::apply_regime(&mut input, TaxRegime::Simples);
    let simples = income::calculate_statement(&input).result;

    // Simples drops sales tax from 8.5% to 6% and removes profit taxes
    assert!(simples.tax_sales_value < custom.tax_sales_value);
    assert_eq!(simples.irpj_value, dec!(0));
    assert!(simples.net_profit > custom.net_profit);
}

// ===========================================================================
// Catalog resolution and report export
// ===========================================================================

#[test]
fn test_statement_from_catalog_cost_basis() {
    let catalog = ProductCatalog::new(vec![Product {
        id: "margherita".to_string(),
        name: "Margherita".to_string(),
        unit_cost: dec!(15.50),
    }]);

    let mut input = margherita();
    input.unit_cost = catalog.require_unit_cost("margherita").unwrap();
    let result = income::calculate_statement(&input);
    assert_eq!(result.result.gross_revenue, dec!(3100.00));

    assert!(matches!(
        catalog.require_unit_cost("quattro-formaggi"),
        Err(DreError::UnknownProduct(_))
    ));
}

#[test]
fn test_report_lines_reconcile_with_statement() {
    let statement = income::calculate_statement(&margherita()).result;
    let lines = report::report_lines(&statement);

    assert_eq!(lines.len(), 18);
    assert_eq!(lines[0].pct_of_gross_revenue, dec!(100));

    let net_profit_row = lines.last().unwrap();
    assert_eq!(net_profit_row.amount, statement.net_profit);
    assert_eq!(
        net_profit_row.pct_of_gross_revenue,
        statement.revenue_share.net_profit
    );

    // deductions reported on the table sum back to the statement total
    let deduction_total: Decimal = lines[1..5].iter().map(|l| l.amount).sum();
    assert_eq!(deduction_total, statement.total_deductions);
}
