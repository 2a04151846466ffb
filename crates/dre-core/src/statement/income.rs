use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Percent};

// ---------------------------------------------------------------------------
// Types — Income Statement (DRE)
// ---------------------------------------------------------------------------

/// Pricing, volume, deduction, expense and tax parameters for a single
/// product over one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementInput {
    /// Product or SKU name, e.g. "Margherita"
    pub product_name: String,
    /// Cost basis per unit (CMV), resolved by the caller from a catalog
    pub unit_cost: Money,
    /// Percentage added on top of unit cost to derive the sale price
    pub markup_pct: Percent,
    /// Units sold in the period
    pub quantity: u32,
    /// Sales tax as a share of gross revenue
    pub tax_sales_pct: Percent,
    /// Order cancellations as a share of gross revenue
    pub cancellations_pct: Percent,
    /// Returned orders as a share of gross revenue
    pub returns_pct: Percent,
    /// Marketplace / delivery platform fee as a share of gross revenue
    pub platform_fee_pct: Percent,
    /// Fixed rent and utilities for the period
    pub rent_utilities: Money,
    /// Fixed salaries and payroll charges for the period
    pub salaries: Money,
    /// Fixed marketing spend for the period
    pub marketing: Money,
    /// Other fixed operating expenses for the period
    pub other_expenses: Money,
    /// Non-operating financial expenses for the period
    pub financial_expenses: Money,
    /// Corporate income tax rate, charged only on positive pre-tax profit
    pub irpj_pct: Percent,
    /// Social contribution rate, charged only on positive pre-tax profit
    pub csll_pct: Percent,
}

/// Share of gross revenue for each reported line item.
///
/// When gross revenue is zero every share is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueShare {
    pub tax_sales: Percent,
    pub cancellations: Percent,
    pub returns: Percent,
    pub platform_fee: Percent,
    pub net_revenue: Percent,
    pub total_cost: Percent,
    pub gross_profit: Percent,
    pub operating_expenses: Percent,
    pub operational_result: Percent,
    pub financial_expenses: Percent,
    pub profit_before_tax: Percent,
    pub income_tax: Percent,
    pub net_profit: Percent,
}

/// Full statement-of-operations breakdown from gross revenue down to
/// net profit, with margins and break-even volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub product_name: String,
    pub unit_cost: Money,
    /// 1 + markup / 100
    pub markup_multiplier: Decimal,
    pub sale_price: Money,
    pub quantity: u32,

    pub gross_revenue: Money,
    pub tax_sales_value: Money,
    pub cancellations_value: Money,
    pub returns_value: Money,
    pub platform_fee_value: Money,
    pub total_deductions: Money,
    /// Never negative: deductions cannot drive revenue below zero
    pub net_revenue: Money,

    /// unit cost times quantity (CMV)
    pub total_cost: Money,
    /// May be negative
    pub gross_profit: Money,
    pub rent_utilities: Money,
    pub salaries: Money,
    pub marketing: Money,
    pub other_expenses: Money,
    pub total_operating_expenses: Money,
    pub operational_result: Money,
    pub financial_expenses: Money,
    pub profit_before_tax: Money,

    pub irpj_value: Money,
    pub csll_value: Money,
    pub total_income_tax: Money,
    pub net_profit: Money,

    /// Net profit over net revenue
    pub net_margin: Percent,
    /// Gross profit over net revenue
    pub gross_margin: Percent,
    /// Operational result over net revenue
    pub operational_margin: Percent,

    /// Unit cost plus the revenue-proportional deductions per unit
    pub variable_cost_per_unit: Money,
    pub contribution_margin_per_unit: Money,
    /// Operating plus financial expenses
    pub fixed_costs: Money,
    /// Minimum whole-unit volume at which contribution covers fixed
    /// costs; 0 when no finite break-even exists
    pub breakeven_units: Decimal,

    pub revenue_share: RevenueShare,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Safe margin: numerator over denominator in percentage points, zero
/// when the denominator is zero.
fn safe_margin(numerator: Decimal, denominator: Decimal) -> Percent {
    if denominator == dec!(0) {
        Decimal::ZERO
    } else {
        numerator / denominator * dec!(100)
    }
}

// ---------------------------------------------------------------------------
// calculate_statement
// ---------------------------------------------------------------------------

/// Compute the full income statement for one product: markup pricing,
/// gross revenue, revenue deductions, cost of goods, operating result,
/// profit taxes, margins, and break-even volume.
///
/// Total over its numeric domain: degenerate inputs (zero revenue,
/// non-positive contribution margin, losses) produce well-defined zero
/// values and a warning, never a panic or an error. Callers are
/// expected to run `validation::validate` beforehand.
pub fn calculate_statement(input: &StatementInput) -> ComputationOutput<IncomeStatement> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let quantity = Decimal::from(input.quantity);

    // --- Pricing ---
    let markup_multiplier = dec!(1) + input.markup_pct / dec!(100);
    let sale_price = input.unit_cost * markup_multiplier;

    // --- Gross revenue and deductions ---
    let gross_revenue = sale_price * quantity;
    let tax_sales_value = gross_revenue * input.tax_sales_pct / dec!(100);
    let cancellations_value = gross_revenue * input.cancellations_pct / dec!(100);
    let returns_value = gross_revenue * input.returns_pct / dec!(100);
    let platform_fee_value = gross_revenue * input.platform_fee_pct / dec!(100);
    let total_deductions =
        tax_sales_value + cancellations_value + returns_value + platform_fee_value;

    if gross_revenue == dec!(0) {
        warnings.push(
            "Gross revenue is zero; margins and revenue shares are reported as zero".to_string(),
        );
    }

    let net_revenue = if gross_revenue - total_deductions < dec!(0) {
        warnings.push("Deductions exceed gross revenue; net revenue clamped to zero".to_string());
        Decimal::ZERO
    } else {
        gross_revenue - total_deductions
    };

    // --- Cost of goods and operating expenses ---
    let total_cost = input.unit_cost * quantity;
    let gross_profit = net_revenue - total_cost;

    let total_operating_expenses =
        input.rent_utilities + input.salaries + input.marketing + input.other_expenses;
    let operational_result = gross_profit - total_operating_expenses;
    let profit_before_tax = operational_result - input.financial_expenses;

    // --- Profit taxes, only on strictly positive pre-tax profit ---
    let (irpj_value, csll_value) = if profit_before_tax > dec!(0) {
        (
            profit_before_tax * input.irpj_pct / dec!(100),
            profit_before_tax * input.csll_pct / dec!(100),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };
    let total_income_tax = irpj_value + csll_value;
    let net_profit = profit_before_tax - total_income_tax;

    // --- Margins over net revenue ---
    let net_margin = safe_margin(net_profit, net_revenue);
    let gross_margin = safe_margin(gross_profit, net_revenue);
    let operational_margin = safe_margin(operational_result, net_revenue);

    // --- Break-even volume ---
    let deduction_pct_total = input.tax_sales_pct
        + input.cancellations_pct
        + input.returns_pct
        + input.platform_fee_pct;
    let variable_cost_per_unit = input.unit_cost + sale_price * deduction_pct_total / dec!(100);
    let contribution_margin_per_unit = sale_price - variable_cost_per_unit;
    let fixed_costs = total_operating_expenses + input.financial_expenses;

    let breakeven_units = if contribution_margin_per_unit > dec!(0) {
        (fixed_costs.max(Decimal::ZERO) / contribution_margin_per_unit).ceil()
    } else {
        warnings.push(
            "Contribution margin per unit is zero or negative; no finite break-even exists"
                .to_string(),
        );
        Decimal::ZERO
    };

    // --- Shares of gross revenue ---
    // With zero revenue every share reads zero, expense lines included
    let share = |value: Decimal| {
        if gross_revenue == dec!(0) {
            Decimal::ZERO
        } else {
            value / gross_revenue * dec!(100)
        }
    };

    let revenue_share = RevenueShare {
        tax_sales: share(tax_sales_value),
        cancellations: share(cancellations_value),
        returns: share(returns_value),
        platform_fee: share(platform_fee_value),
        net_revenue: share(net_revenue),
        total_cost: share(total_cost),
        gross_profit: share(gross_profit),
        operating_expenses: share(total_operating_expenses),
        operational_result: share(operational_result),
        financial_expenses: share(input.financial_expenses),
        profit_before_tax: share(profit_before_tax),
        income_tax: share(total_income_tax),
        net_profit: share(net_profit),
    };

    let output = IncomeStatement {
        product_name: input.product_name.clone(),
        unit_cost: input.unit_cost,
        markup_multiplier,
        sale_price,
        quantity: input.quantity,
        gross_revenue,
        tax_sales_value,
        cancellations_value,
        returns_value,
        platform_fee_value,
        total_deductions,
        net_revenue,
        total_cost,
        gross_profit,
        rent_utilities: input.rent_utilities,
        salaries: input.salaries,
        marketing: input.marketing,
        other_expenses: input.other_expenses,
        total_operating_expenses,
        operational_result,
        financial_expenses: input.financial_expenses,
        profit_before_tax,
        irpj_value,
        csll_value,
        total_income_tax,
        net_profit,
        net_margin,
        gross_margin,
        operational_margin,
        variable_cost_per_unit,
        contribution_margin_per_unit,
        fixed_costs,
        breakeven_units,
        revenue_share,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Single-Product Income Statement (DRE) with Break-even Analysis",
        &serde_json::json!({
            "product": input.product_name,
            "unit_cost": input.unit_cost.to_string(),
            "markup_pct": input.markup_pct.to_string(),
            "quantity": input.quantity,
        }),
        warnings,
        elapsed,
        output,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
