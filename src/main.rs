mod cli;

use chart_verifier::logging::init_logging;
use clap::Parser;
use colored::Colorize;

use cli::{dispatch, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    if let Err(err) = dispatch(cli.command) {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
