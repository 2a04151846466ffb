use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use dre_core::statement::tax_regime::TaxRegime;
use dre_core::Percent;

/// Arguments for listing tax regime presets
#[derive(Args)]
pub struct RegimesArgs {}

/// One row per regime; the custom regime carries no preset rates.
#[derive(Debug, Serialize, Deserialize)]
struct RegimeRow {
    regime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_sales_pct: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    irpj_pct: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    csll_pct: Option<Percent>,
}

pub fn run_regimes(_args: RegimesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows: Vec<RegimeRow> = TaxRegime::ALL
        .iter()
        .map(|regime| {
            let preset = regime.preset();
            RegimeRow {
                regime: regime.to_string(),
                tax_sales_pct: preset.as_ref().map(|p| p.tax_sales_pct),
                irpj_pct: preset.as_ref().map(|p| p.irpj_pct),
                csll_pct: preset.map(|p| p.csll_pct),
            }
        })
        .collect();
    Ok(serde_json::to_value(rows)?)
}
