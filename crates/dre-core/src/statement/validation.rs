use rust_decimal_macros::dec;

use crate::error::DreError;
use crate::statement::income::StatementInput;
use crate::types::{Money, Percent};
use crate::DreResult;

/// Upper bound accepted for any monetary expense field.
pub const MONETARY_CEILING: Money = dec!(10_000_000);

/// Check parameters against their declared ranges before computation.
///
/// Returns one human-readable message per violated rule; an empty list
/// means the input is safe to hand to `calculate_statement`. Callers
/// must refuse to compute on a non-empty list rather than clamp.
pub fn validate(input: &StatementInput) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    if input.quantity == 0 {
        errors.push("Quantity must be greater than zero".to_string());
    }
    if input.unit_cost < dec!(0) {
        errors.push("Unit cost cannot be negative".to_string());
    }
    if input.markup_pct < dec!(0) {
        errors.push("Markup cannot be negative".to_string());
    }

    let percent_fields: [(&str, Percent); 6] = [
        ("Sales tax", input.tax_sales_pct),
        ("Cancellations", input.cancellations_pct),
        ("Returns", input.returns_pct),
        ("Platform fee", input.platform_fee_pct),
        ("IRPJ", input.irpj_pct),
        ("CSLL", input.csll_pct),
    ];
    for (name, value) in percent_fields {
        if value < dec!(0) || value > dec!(100) {
            errors.push(format!("{} rate must be between 0% and 100%", name));
        }
    }

    let monetary_fields: [(&str, Money); 5] = [
        ("Rent and utilities", input.rent_utilities),
        ("Salaries", input.salaries),
        ("Marketing", input.marketing),
        ("Other expenses", input.other_expenses),
        ("Financial expenses", input.financial_expenses),
    ];
    for (name, value) in monetary_fields {
        if value < dec!(0) {
            errors.push(format!("{} cannot be negative", name));
        }
        if value > MONETARY_CEILING {
            errors.push(format!("{} exceeds the 10,000,000 ceiling", name));
        }
    }

    errors
}

/// Reject invalid parameters with a `Validation` error carrying every
/// collected message.
pub fn ensure_valid(input: &StatementInput) -> DreResult<()> {
    let messages = validate(input);
    if messages.is_empty() {
        Ok(())
    } else {
        Err(DreError::Validation { messages })
    }
}
