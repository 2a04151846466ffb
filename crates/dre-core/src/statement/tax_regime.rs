use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DreError;
use crate::statement::income::StatementInput;
use crate::types::Percent;

/// Brazilian corporate tax regimes with bundled preset rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// Simples Nacional: consolidated 6% on revenue, no profit taxes
    Simples,
    /// Lucro Presumido: 11.33% on revenue, 15% IRPJ, 9% CSLL
    Presumido,
    /// Lucro Real: 9.25% on revenue, 25% IRPJ, 9% CSLL
    Real,
    /// Keep whatever rates are currently configured
    Custom,
}

/// Revenue and profit tax rates bundled by a regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimePreset {
    pub tax_sales_pct: Percent,
    pub irpj_pct: Percent,
    pub csll_pct: Percent,
}

impl TaxRegime {
    pub const ALL: [TaxRegime; 4] = [
        TaxRegime::Simples,
        TaxRegime::Presumido,
        TaxRegime::Real,
        TaxRegime::Custom,
    ];

    /// Preset rates for this regime. `Custom` has none.
    pub fn preset(self) -> Option<RegimePreset> {
        match self {
            TaxRegime::Simples => Some(RegimePreset {
                tax_sales_pct: dec!(6),
                irpj_pct: dec!(0),
                csll_pct: dec!(0),
            }),
            TaxRegime::Presumido => Some(RegimePreset {
                tax_sales_pct: dec!(11.33),
                irpj_pct: dec!(15),
                csll_pct: dec!(9),
            }),
            TaxRegime::Real => Some(RegimePreset {
                tax_sales_pct: dec!(9.25),
                irpj_pct: dec!(25),
                csll_pct: dec!(9),
            }),
            TaxRegime::Custom => None,
        }
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaxRegime::Simples => "simples",
            TaxRegime::Presumido => "presumido",
            TaxRegime::Real => "real",
            TaxRegime::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TaxRegime {
    type Err = DreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simples" => Ok(TaxRegime::Simples),
            "presumido" => Ok(TaxRegime::Presumido),
            "real" => Ok(TaxRegime::Real),
            "custom" => Ok(TaxRegime::Custom),
            other => Err(DreError::UnknownRegime(other.to_string())),
        }
    }
}

/// Overwrite the input's tax rates with the regime preset. `Custom`
/// leaves the current rates untouched.
pub fn apply_regime(input: &mut StatementInput, regime: TaxRegime) {
    if let Some(preset) = regime.preset() {
        input.tax_sales_pct = preset.tax_sales_pct;
        input.irpj_pct = preset.irpj_pct;
        input.csll_pct = preset.csll_pct;
    }
}
