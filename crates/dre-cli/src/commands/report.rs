use clap::Args;
use serde_json::Value;

use dre_core::statement::income;
use dre_core::statement::report;

use crate::commands::statement::{resolve_input, StatementArgs};

/// Arguments for the flat DRE report
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub statement: StatementArgs,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_input(&args.statement)?;
    let result = income::calculate_statement(&params);
    let lines = report::report_lines(&result.result);
    Ok(serde_json::to_value(lines)?)
}
