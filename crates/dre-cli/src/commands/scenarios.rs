use clap::Args;
use serde_json::Value;

use dre_core::scenarios::sensitivity::{self, ScenarioShift};

use crate::commands::statement::{resolve_input, StatementArgs};
use crate::input;

/// Arguments for what-if scenario comparison
#[derive(Args)]
pub struct ScenariosArgs {
    #[command(flatten)]
    pub statement: StatementArgs,

    /// Path to a JSON array of scenario shifts (defaults to the
    /// standard four: markup +10%, quantity +20%, unit cost -10%,
    /// fixed expenses -15%)
    #[arg(long)]
    pub shifts: Option<String>,
}

pub fn run_scenarios(args: ScenariosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_input(&args.statement)?;
    let shifts: Vec<ScenarioShift> = match args.shifts {
        Some(ref path) => input::file::read_json(path)?,
        None => sensitivity::standard_shifts(),
    };
    let result = sensitivity::analyze_sensitivity(&params, &shifts);
    Ok(serde_json::to_value(result)?)
}
