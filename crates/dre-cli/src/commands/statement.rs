use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use dre_core::catalog::{Product, ProductCatalog};
use dre_core::statement::income::{self, StatementInput};
use dre_core::statement::tax_regime::{self, TaxRegime};
use dre_core::statement::validation;
use dre_core::DreError;

use crate::input;

/// Arguments for the income statement calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct StatementArgs {
    /// Path to JSON input file with the full parameter set
    #[arg(long)]
    pub input: Option<String>,

    /// Unit cost basis (CMV per unit)
    #[arg(long)]
    pub unit_cost: Option<Decimal>,

    /// Path to a JSON product catalog to resolve --product against
    #[arg(long)]
    pub catalog: Option<String>,

    /// Product id whose unit cost is taken from the catalog
    #[arg(long)]
    pub product: Option<String>,

    /// Product name used in the statement
    #[arg(long, default_value = "Product")]
    pub product_name: String,

    /// Markup percentage over unit cost
    #[arg(long, default_value = "100")]
    pub markup: Decimal,

    /// Units sold in the period
    #[arg(long, default_value = "100")]
    pub quantity: u32,

    /// Sales tax percentage of gross revenue
    #[arg(long, default_value = "8.5")]
    pub tax_sales: Decimal,

    /// Cancellations percentage of gross revenue
    #[arg(long, default_value = "2")]
    pub cancellations: Decimal,

    /// Returns percentage of gross revenue
    #[arg(long, default_value = "1")]
    pub returns: Decimal,

    /// Platform fee percentage of gross revenue
    #[arg(long, default_value = "12")]
    pub platform_fee: Decimal,

    /// Fixed rent and utilities for the period
    #[arg(long, default_value = "3000")]
    pub rent_utilities: Decimal,

    /// Fixed salaries for the period
    #[arg(long, default_value = "5000")]
    pub salaries: Decimal,

    /// Fixed marketing spend for the period
    #[arg(long, default_value = "500")]
    pub marketing: Decimal,

    /// Other fixed operating expenses for the period
    #[arg(long, default_value = "500")]
    pub other_expenses: Decimal,

    /// Financial (non-operating) expenses for the period
    #[arg(long, default_value = "200")]
    pub financial_expenses: Decimal,

    /// IRPJ percentage on positive pre-tax profit
    #[arg(long, default_value = "15")]
    pub irpj: Decimal,

    /// CSLL percentage on positive pre-tax profit
    #[arg(long, default_value = "9")]
    pub csll: Decimal,

    /// Tax regime preset to apply: simples, presumido, real, custom
    #[arg(long)]
    pub regime: Option<String>,
}

/// Resolve the cost basis: an explicit --unit-cost wins, otherwise the
/// product must be found in the catalog before anything is computed.
fn resolve_cost_basis(
    args: &StatementArgs,
) -> Result<(Decimal, String), Box<dyn std::error::Error>> {
    if let Some(unit_cost) = args.unit_cost {
        return Ok((unit_cost, args.product_name.clone()));
    }
    match (&args.catalog, &args.product) {
        (Some(path), Some(id)) => {
            let products: Vec<Product> = input::file::read_json(path)?;
            let catalog = ProductCatalog::new(products);
            let product = catalog
                .get(id)
                .ok_or_else(|| DreError::UnknownProduct(id.clone()))?;
            Ok((product.unit_cost, product.name.clone()))
        }
        _ => Err("--unit-cost or --catalog with --product is required (or provide --input)".into()),
    }
}

/// Build and validate the parameter set from file, stdin, or flags.
pub(crate) fn resolve_input(
    args: &StatementArgs,
) -> Result<StatementInput, Box<dyn std::error::Error>> {
    let mut params: StatementInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let (unit_cost, product_name) = resolve_cost_basis(args)?;
        StatementInput {
            product_name,
            unit_cost,
            markup_pct: args.markup,
            quantity: args.quantity,
            tax_sales_pct: args.tax_sales,
            cancellations_pct: args.cancellations,
            returns_pct: args.returns,
            platform_fee_pct: args.platform_fee,
            rent_utilities: args.rent_utilities,
            salaries: args.salaries,
            marketing: args.marketing,
            other_expenses: args.other_expenses,
            financial_expenses: args.financial_expenses,
            irpj_pct: args.irpj,
            csll_pct: args.csll,
        }
    };

    if let Some(ref regime) = args.regime {
        let regime: TaxRegime = regime.parse()?;
        tax_regime::apply_regime(&mut params, regime);
    }

    validation::ensure_valid(&params)?;
    Ok(params)
}

pub fn run_statement(args: StatementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_input(&args)?;
    let result = income::calculate_statement(&params);
    Ok(serde_json::to_value(result)?)
}
