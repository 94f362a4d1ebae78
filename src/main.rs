use clap::Parser;

use quality_timeline::cli::Cli;
use quality_timeline::commands::run_report;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_report(&cli));
}
