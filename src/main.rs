mod adapter;
mod classify;
mod cli;
mod error;
mod extract;
mod fmt;
mod formats;
mod models;
mod narration;
mod numeric;
mod preamble;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Formats => cli::formats::run(),
        Commands::Identify { file, format } => cli::identify::run(&file, &format),
        Commands::Extract {
            file,
            format,
            account,
            rules,
            json,
            cash_account,
            fees_account,
        } => cli::extract::run(
            &file,
            &format,
            &account,
            rules.as_deref(),
            json,
            &cash_account,
            &fees_account,
        ),
        Commands::Preview {
            file,
            format,
            account,
        } => cli::preview::run(&file, &format, &account),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
