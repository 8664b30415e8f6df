//! Garagiste CLI - vehicle diagnostic assistant

use clap::Parser;
use garagectl::cli::Cli;
use garagectl::{errors, logging};
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = garagectl::run(cli).await {
        eprintln!("{} {:#}", "error:".bright_red().bold(), e);
        std::process::exit(errors::exit_code_for(&e));
    }
}
