use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::statement::income::{calculate_statement, IncomeStatement, StatementInput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};

// ---------------------------------------------------------------------------
// Types — What-if scenarios
// ---------------------------------------------------------------------------

/// A named perturbation applied to a copy of the base parameters.
/// Changes are percentage points: +10 raises the field by 10%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioShift {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_change_pct: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_change_pct: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost_change_pct: Option<Percent>,
    /// Applied to all four fixed operating expense fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_expense_change_pct: Option<Percent>,
}

/// Net-profit impact of one scenario relative to the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDelta {
    pub name: String,
    pub net_profit: Money,
    /// scenario net profit minus baseline net profit
    pub delta: Money,
    pub favorable: bool,
}

/// Baseline net profit plus one delta per evaluated scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityOutput {
    pub baseline_net_profit: Money,
    pub scenarios: Vec<ScenarioDelta>,
}

/// The four standard what-if scenarios.
pub fn standard_shifts() -> Vec<ScenarioShift> {
    vec![
        ScenarioShift {
            name: "Markup +10%".to_string(),
            markup_change_pct: Some(dec!(10)),
            quantity_change_pct: None,
            unit_cost_change_pct: None,
            operating_expense_change_pct: None,
        },
        ScenarioShift {
            name: "Quantity +20%".to_string(),
            markup_change_pct: None,
            quantity_change_pct: Some(dec!(20)),
            unit_cost_change_pct: None,
            operating_expense_change_pct: None,
        },
        ScenarioShift {
            name: "Unit cost -10%".to_string(),
            markup_change_pct: None,
            quantity_change_pct: None,
            unit_cost_change_pct: Some(dec!(-10)),
            operating_expense_change_pct: None,
        },
        ScenarioShift {
            name: "Fixed expenses -15%".to_string(),
            markup_change_pct: None,
            quantity_change_pct: None,
            unit_cost_change_pct: None,
            operating_expense_change_pct: Some(dec!(-15)),
        },
    ]
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply an optional percentage change to a base value.
/// e.g. base=100, change=Some(10) => 110
fn shifted(base: Decimal, change_pct: Option<Percent>) -> Decimal {
    match change_pct {
        Some(pct) => base * (dec!(1) + pct / dec!(100)),
        None => base,
    }
}

/// Build an independent parameter set with the shift applied. The base
/// is never mutated; quantity changes round up to whole units.
pub fn apply_shift(base: &StatementInput, shift: &ScenarioShift) -> StatementInput {
    let mut params = base.clone();
    params.markup_pct = shifted(params.markup_pct, shift.markup_change_pct);
    params.unit_cost = shifted(params.unit_cost, shift.unit_cost_change_pct);
    params.rent_utilities = shifted(params.rent_utilities, shift.operating_expense_change_pct);
    params.salaries = shifted(params.salaries, shift.operating_expense_change_pct);
    params.marketing = shifted(params.marketing, shift.operating_expense_change_pct);
    params.other_expenses = shifted(params.other_expenses, shift.operating_expense_change_pct);
    if let Some(pct) = shift.quantity_change_pct {
        let scaled = Decimal::from(base.quantity) * (dec!(1) + pct / dec!(100));
        params.quantity = scaled.max(Decimal::ZERO).ceil().to_u32().unwrap_or(0);
    }
    params
}

// ---------------------------------------------------------------------------
// compare_scenario / analyze_sensitivity
// ---------------------------------------------------------------------------

/// Recompute with the given parameters and report the signed net-profit
/// delta against the baseline. Runs the complete statement algorithm on
/// an explicit parameter set; no shared lookup data is swapped out.
pub fn compare_scenario(
    baseline: &IncomeStatement,
    name: &str,
    params: &StatementInput,
) -> ScenarioDelta {
    let scenario = calculate_statement(params);
    let delta = scenario.result.net_profit - baseline.net_profit;
    ScenarioDelta {
        name: name.to_string(),
        net_profit: scenario.result.net_profit,
        delta,
        favorable: delta >= dec!(0),
    }
}

/// Evaluate every shift against a freshly computed baseline.
pub fn analyze_sensitivity(
    base: &StatementInput,
    shifts: &[ScenarioShift],
) -> ComputationOutput<SensitivityOutput> {
    let start = Instant::now();

    let baseline = calculate_statement(base);
    let warnings = baseline.warnings.clone();

    let scenarios = shifts
        .iter()
        .map(|shift| compare_scenario(&baseline.result, &shift.name, &apply_shift(base, shift)))
        .collect();

    let output = SensitivityOutput {
        baseline_net_profit: baseline.result.net_profit,
        scenarios,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Net-Profit Sensitivity Across Named What-if Scenarios",
        &serde_json::json!({
            "product": base.product_name,
            "scenario_count": shifts.len(),
        }),
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
