pub mod extract;
pub mod formats;
pub mod identify;
pub mod preview;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "umsatz", about = "Extracts ledger entries from comdirect CSV statement exports.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the registered statement formats.
    Formats,
    /// Check whether a file carries a section of the given format.
    Identify {
        /// Path to a comdirect CSV export
        file: String,
        /// Format key (e.g. checking)
        #[arg(long)]
        format: String,
    },
    /// Extract ledger entries and print them to stdout.
    Extract {
        /// Path to a comdirect CSV export
        file: String,
        /// Format key (e.g. checking)
        #[arg(long)]
        format: String,
        /// Ledger account to book against
        #[arg(long)]
        account: String,
        /// JSON rules file mapping payee to counter account
        #[arg(long)]
        rules: Option<String>,
        /// Print entries as JSON instead of ledger text
        #[arg(long)]
        json: bool,
        /// Cash placeholder account for brokerage legs
        #[arg(long, default_value = crate::adapter::DEFAULT_CASH_ACCOUNT)]
        cash_account: String,
        /// Fees placeholder account for brokerage legs
        #[arg(long, default_value = crate::adapter::DEFAULT_FEES_ACCOUNT)]
        fees_account: String,
    },
    /// Show a table summary of the entries a file would yield.
    Preview {
        /// Path to a comdirect CSV export
        file: String,
        /// Format key (e.g. checking)
        #[arg(long)]
        format: String,
        /// Ledger account to book against
        #[arg(long)]
        account: String,
    },
}
