//! lifemaze: command-line driver.
//!
//! Run: cargo run -- mazes.txt --lives 3

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lifemaze_core::LifeBudget;
use lifemaze_lib::{Config, OutputFormat, batch, logger};

#[derive(Parser)]
#[command(name = "lifemaze")]
#[command(about = "Solve mine mazes under a life budget", long_about = None)]
struct Cli {
    /// Input file with one maze per line: (<rows>,<columns>)-[#,#,#,...]
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Lives available to each maze
    #[arg(long, short = 'l', default_value = "3")]
    lives: LifeBudget,

    /// Output format of the move lists
    #[arg(long, value_enum, default_value = "list")]
    format: OutputFormat,

    /// Solve mazes in parallel
    #[arg(long)]
    parallel: bool,

    /// Print each maze's encodings and picture to stderr
    #[arg(long)]
    draw: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("Error: {e}");
    }

    let config = Config {
        lives: cli.lives,
        format: cli.format,
        parallel: cli.parallel,
        draw: cli.draw,
    };

    let status = batch::run_file(
        &cli.input,
        &config,
        &mut io::stdout().lock(),
        // unlocked: rayon workers log to stderr during the run
        &mut io::stderr(),
    );
    ExitCode::from(status.code())
}
