use clap::Parser;

use langstat::cli::Cli;
use langstat::commands::run_report;
use langstat::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log, cli.quiet);

    let exit_code = run_report(&cli);
    std::process::exit(exit_code);
}
