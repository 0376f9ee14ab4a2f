mod commands;
mod input;
mod logging;
mod output;
mod session;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::io;
use std::process;

use commands::interest::CompoundInterestArgs;
use commands::investment::FutureValueArgs;
use commands::loan::EmiArgs;
use commands::retirement::RetirementArgs;
use session::Session;

/// Loan, interest, investment and retirement calculations
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Interactive financial calculator",
    long_about = "A menu-driven calculator for loan EMIs, compound interest, \
                  lump-sum future value and retirement savings, with decimal \
                  precision. Run without a subcommand for the interactive menu, \
                  or use a subcommand for a single calculation."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format for single calculations
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Skip the breakdown chart in the interactive menu
    #[arg(long, global = true)]
    no_chart: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Interactive,
    /// Calculate a loan's equated monthly installment
    Emi(EmiArgs),
    /// Calculate compound interest on a principal
    CompoundInterest(CompoundInterestArgs),
    /// Calculate the future value of a lump-sum investment
    FutureValue(FutureValueArgs),
    /// Estimate retirement savings from monthly contributions
    Retirement(RetirementArgs),
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
    logging::init_cli_logger(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> =
        match cli.command.unwrap_or(Commands::Interactive) {
            Commands::Interactive => {
                let chart = output::chart::renderer(!cli.no_chart);
                let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), chart);
                if let Err(e) = session.run() {
                    eprintln!("{}: {}", "error".red().bold(), e);
                    process::exit(1);
                }
                return;
            }
            Commands::Emi(args) => commands::loan::run_emi(args),
            Commands::CompoundInterest(args) => commands::interest::run_compound_interest(args),
            Commands::FutureValue(args) => commands::investment::run_future_value(args),
            Commands::Retirement(args) => commands::retirement::run_retirement(args),
            Commands::Version => {
                println!("fincalc {}", env!("CARGO_PKG_VERSION"));
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
