//! Render ledger entries as beancount-style directives.
//!
//! The downstream ingestion framework owns the real serialization; this is
//! the plain-text form the `extract` subcommand prints, close enough to
//! paste into a ledger draft.

use crate::models::{LedgerEntry, Posting};

pub fn render_entries(entries: &[LedgerEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_entry(entry: &LedgerEntry) -> String {
    match entry {
        LedgerEntry::Transaction(txn) => {
            let mut out = match &txn.payee {
                Some(payee) => format!(
                    "{} {} \"{}\" \"{}\"\n",
                    txn.date.format("%Y-%m-%d"),
                    txn.flag,
                    escape(payee),
                    escape(&txn.narration)
                ),
                None => format!(
                    "{} {} \"{}\"\n",
                    txn.date.format("%Y-%m-%d"),
                    txn.flag,
                    escape(&txn.narration)
                ),
            };
            for posting in &txn.postings {
                out.push_str(&render_posting(posting));
                out.push('\n');
            }
            out
        }
        LedgerEntry::Balance(bal) => format!(
            "{} balance {}  {} {}\n",
            bal.date.format("%Y-%m-%d"),
            bal.account,
            bal.amount.number,
            bal.amount.currency
        ),
    }
}

fn render_posting(posting: &Posting) -> String {
    let mut out = format!("  {}", posting.account);
    if let Some(amount) = &posting.amount {
        out.push_str(&format!("  {} {}", amount.number, amount.currency));
    }
    if let Some(cost) = &posting.cost {
        out.push_str(&format!(" {{{} {}}}", cost.number, cost.currency));
    }
    out
}

fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}
