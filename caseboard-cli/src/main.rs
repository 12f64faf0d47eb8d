mod cli;
mod config;
mod ingest;
mod report;
mod schedule;
mod services;
mod track;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Summary(args) => cli::commands::summary::handle_summary(args),
        Commands::Review(args) => cli::commands::review::handle_review(args),
        Commands::List(args) => cli::commands::list::handle_list(args),
        Commands::Track(args) => cli::commands::track::handle_track(args),
    }
}
