mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::regimes::RegimesArgs;
use commands::report::ReportArgs;
use commands::scenarios::ScenariosArgs;
use commands::statement::StatementArgs;

/// Single-product pricing and income statement simulation
#[derive(Parser)]
#[command(
    name = "dre",
    version,
    about = "Single-product pricing and income statement (DRE) simulation",
    long_about = "A CLI for simulating a single-product income statement with decimal \
                  precision: markup pricing, revenue deductions, cost of goods, \
                  operating expenses, profit taxes, margins, break-even volume, \
                  and what-if scenario comparison."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the income statement for one product
    Statement(StatementArgs),
    /// Compare net profit across what-if scenarios
    Scenarios(ScenariosArgs),
    /// Emit the flat DRE line table for export
    Report(ReportArgs),
    /// List the tax regime presets
    Regimes(RegimesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Statement(args) => commands::statement::run_statement(args),
        Commands::Scenarios(args) => commands::scenarios::run_scenarios(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Regimes(args) => commands::regimes::run_regimes(args),
        Commands::Version => {
            println!("dre {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
