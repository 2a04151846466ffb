use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::statement::income::IncomeStatement;
use crate::types::{Money, Percent};

/// One row of the flat DRE table: label, monetary value, and share of
/// gross revenue. Suitable for CSV-style export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub amount: Money,
    pub pct_of_gross_revenue: Percent,
}

/// Flatten a computed statement into the gross-revenue-to-net-profit
/// line table. Percentages use gross revenue as the base; with zero
/// revenue every share reads as zero.
pub fn report_lines(statement: &IncomeStatement) -> Vec<ReportLine> {
    let line = |label: &str, amount: Decimal| ReportLine {
        label: label.to_string(),
        amount,
        pct_of_gross_revenue: if statement.gross_revenue == dec!(0) {
            Decimal::ZERO
        } else {
            amount / statement.gross_revenue * dec!(100)
        },
    };

    vec![
        line("Gross revenue", statement.gross_revenue),
        line("(-) Sales taxes", statement.tax_sales_value),
        line("(-) Cancellations", statement.cancellations_value),
        line("(-) Returns", statement.returns_value),
        line("(-) Platform fees", statement.platform_fee_value),
        line("Net revenue", statement.net_revenue),
        line("(-) Cost of goods sold", statement.total_cost),
        line("Gross profit", statement.gross_profit),
        line("(-) Rent and utilities", statement.rent_utilities),
        line("(-) Salaries", statement.salaries),
        line("(-) Marketing", statement.marketing),
        line("(-) Other expenses", statement.other_expenses),
        line("Operational result", statement.operational_result),
        line("(-) Financial expenses", statement.financial_expenses),
        line("Profit before tax", statement.profit_before_tax),
        line("(-) IRPJ", statement.irpj_value),
        line("(-) CSLL", statement.csll_value),
        line("Net profit", statement.net_profit),
    ]
}
