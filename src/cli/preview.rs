use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::adapter::StatementAdapter;
use crate::error::Result;
use crate::formats::get_by_key;
use crate::models::LedgerEntry;

pub fn run(file: &str, format: &str, account: &str) -> Result<()> {
    let structure = get_by_key(format)?;
    let adapter = StatementAdapter::new(structure, account);
    let entries = adapter.extract(&PathBuf::from(file))?;

    let mut table = Table::new();
    table.set_header(vec!["Date", "Kind", "Payee", "Narration", "Amount"]);
    let mut transactions = 0usize;
    let mut balances = 0usize;

    for entry in &entries {
        match entry {
            LedgerEntry::Transaction(txn) => {
                transactions += 1;
                let amount = txn
                    .postings
                    .first()
                    .and_then(|p| p.amount.as_ref())
                    .map(|a| format!("{} {}", a.number, a.currency))
                    .unwrap_or_default();
                table.add_row(vec![
                    Cell::new(txn.date.format("%Y-%m-%d")),
                    Cell::new("txn"),
                    Cell::new(txn.payee.as_deref().unwrap_or("")),
                    Cell::new(&txn.narration),
                    Cell::new(amount),
                ]);
            }
            LedgerEntry::Balance(bal) => {
                balances += 1;
                table.add_row(vec![
                    Cell::new(bal.date.format("%Y-%m-%d")),
                    Cell::new("balance"),
                    Cell::new(""),
                    Cell::new(&bal.account),
                    Cell::new(format!("{} {}", bal.amount.number, bal.amount.currency)),
                ]);
            }
        }
    }

    println!("{table}");
    println!(
        "{} transactions, {} balance assertions",
        transactions.to_string().green(),
        balances.to_string().green()
    );
    Ok(())
}
