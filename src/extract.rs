//! Turn post-preamble statement rows into ledger entries.
//!
//! Rows come newest-first. Besides regular bookings the date column can hold
//! a handful of sentinels ("Keine Umsätze vorhanden.", "offen", "Alter
//! Kontostand") or the start marker of the next account section, which ends
//! this section.

use chrono::{Duration, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{Result, UmsatzError};
use crate::formats::{AccountKind, AccountStructure};
use crate::models::{Amount, BalanceAssertion, Cost, LedgerEntry, Meta, Posting, Transaction};
use crate::narration::{self, parse_narration};
use crate::numeric::parse_german_decimal;
use crate::preamble::Preamble;

pub const CURRENCY: &str = "EUR";

const SECTION_PREFIX: &str = "Umsätze";
const NO_TRANSACTIONS: &str = "Keine Umsätze vorhanden.";
const NOT_BOOKED: &str = "offen";
const PREVIOUS_BALANCE: &str = "Alter Kontostand";
const DATE_FORMAT: &str = "%d.%m.%Y";

// "Alter Kontostand" rows carry the amount mid-cell, without the quoting of
// the preamble balance line.
const IN_ROW_BALANCE: &str = r"^(?P<raw_amount>[0-9,.]+) EUR";

pub(crate) struct RowContext<'a> {
    pub structure: &'static AccountStructure,
    pub account: &'a str,
    pub cash_account: &'a str,
    pub fees_account: &'a str,
    pub file_name: &'a str,
}

fn cell<'r>(record: &'r csv::StringRecord, structure: &AccountStructure, name: &str) -> &'r str {
    structure
        .column(name)
        .and_then(|idx| record.get(idx))
        .unwrap_or("")
}

/// Extract all entries of one section, starting where the preamble scanner
/// stopped. Stops at the next section's start marker; the caller re-scans
/// per account type when a file holds several sections.
pub(crate) fn extract_section(
    ctx: &RowContext,
    text: &str,
    pre: &Preamble,
) -> Result<Vec<LedgerEntry>> {
    let in_row_balance = Regex::new(IN_ROW_BALANCE).expect("in-row balance pattern");

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(text[pre.rows_offset..].as_bytes());

    let mut entries = Vec::new();
    let mut last_date: Option<NaiveDate> = None;
    let mut closing_balance = pre.closing_balance.clone();

    for record in rdr.records() {
        let record = record?;
        let line = pre.lines_consumed
            + record.position().map(|p| p.line() as usize).unwrap_or(0);
        let meta = Meta {
            file: ctx.file_name.to_string(),
            line,
        };

        let raw_date = record.get(0).unwrap_or("");
        if raw_date.starts_with(SECTION_PREFIX) {
            // Next account section starts here.
            break;
        }
        if raw_date == NO_TRANSACTIONS || raw_date == NOT_BOOKED {
            continue;
        }

        if raw_date == PREVIOUS_BALANCE {
            // Opening balance, dated at the previously seen (older) booking
            // date. A cell that does not match the pattern skips the
            // assertion without failing the extraction.
            let balance_cell = cell(&record, ctx.structure, ctx.structure.fields[1]);
            if let (Some(caps), Some(date)) = (in_row_balance.captures(balance_cell), last_date) {
                let number = parse_german_decimal(&caps["raw_amount"])?;
                entries.push(LedgerEntry::Balance(BalanceAssertion {
                    meta,
                    date,
                    account: ctx.account.to_string(),
                    amount: Amount::new(number, CURRENCY),
                }));
            }
            continue;
        }

        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|_| UmsatzError::BadDate(raw_date.to_string()))?;

        if last_date.is_none() {
            if let Some(raw) = closing_balance.take() {
                // Rows are newest-first, so the closing balance from the
                // preamble holds as of the day after the first row.
                let number = parse_german_decimal(&raw)?;
                entries.push(LedgerEntry::Balance(BalanceAssertion {
                    meta: meta.clone(),
                    date: date + Duration::days(1),
                    account: ctx.account.to_string(),
                    amount: Amount::new(number, CURRENCY),
                }));
            }
        }
        last_date = Some(date);

        let amount = parse_german_decimal(cell(&record, ctx.structure, "Umsatz in EUR"))?;

        let entry = match ctx.structure.kind {
            AccountKind::Checking | AccountKind::Savings | AccountKind::Credit => {
                cash_transaction(ctx, &record, meta, date, amount)
            }
            AccountKind::Brokerage => security_trade(ctx, &record, meta, date, amount)?,
        };
        entries.push(entry);
    }

    Ok(entries)
}

fn cash_transaction(
    ctx: &RowContext,
    record: &csv::StringRecord,
    meta: Meta,
    date: NaiveDate,
    amount: Decimal,
) -> LedgerEntry {
    let blob = cell(record, ctx.structure, "Buchungstext");
    let parsed = parse_narration(blob);

    let payee = parsed
        .get(narration::AUFTRAGGEBER)
        .or_else(|| parsed.get(narration::EMPFAENGER))
        .cloned();
    let description = parsed
        .get(narration::BUCHUNGSTEXT)
        .cloned()
        .unwrap_or_else(|| blob.to_string());

    // Single posting only; the counter-posting is the classifier's job.
    LedgerEntry::Transaction(Transaction {
        meta,
        date,
        flag: '*',
        payee,
        narration: description,
        postings: vec![Posting::new(ctx.account, Amount::new(amount, CURRENCY))],
    })
}

fn security_trade(
    ctx: &RowContext,
    record: &csv::StringRecord,
    meta: Meta,
    date: NaiveDate,
    amount: Decimal,
) -> Result<LedgerEntry> {
    let raw_units = cell(record, ctx.structure, "Stück / Nom.");
    // Unit counts are already plain decimals in the export, unlike the
    // EUR amount columns.
    let units = raw_units
        .trim()
        .parse::<Decimal>()
        .map_err(|_| UmsatzError::MalformedNumber(raw_units.to_string()))?;
    let price = parse_german_decimal(cell(record, ctx.structure, "Ausführungskurs"))?;

    let instrument = cell(record, ctx.structure, "WKN");
    let quote_currency = cell(record, ctx.structure, "Währung");
    let description = cell(record, ctx.structure, "Bezeichnung");

    Ok(LedgerEntry::Transaction(Transaction {
        meta,
        date,
        flag: '*',
        payee: None,
        narration: description.to_string(),
        postings: vec![
            Posting::new(ctx.cash_account, Amount::new(-amount, CURRENCY)),
            Posting::placeholder(ctx.fees_account),
            Posting::with_cost(
                ctx.account,
                Amount::new(units, instrument),
                Cost {
                    number: price,
                    currency: quote_currency.to_string(),
                },
            ),
        ],
    }))
}
