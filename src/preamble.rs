//! Locate and validate the preamble of one statement section.
//!
//! A comdirect export interleaves several account sections back to back;
//! each section opens with a marker line, an optional balance line, a blank
//! line and the column header:
//!
//! ```text
//! "Umsätze Girokonto";"Zeitraum: 30 Tage";
//! "Neuer Kontostand";"1.234,56 EUR";
//!
//! "Buchungstag";"Wertstellung (Valuta)";"Vorgang";"Buchungstext";"Umsatz in EUR";
//! ```
//!
//! Lines before the marker are skipped, which is what lets one file be
//! scanned once per account type.

use regex::Regex;

use crate::error::{Result, UmsatzError};
use crate::formats::AccountStructure;

const BALANCE_LINE: &str = r#"^"Neuer Kontostand";"(?P<raw_amount>[0-9,.]+) EUR";$"#;

/// Successful scan: how far the preamble reached and what it captured.
#[derive(Debug, PartialEq, Eq)]
pub struct Preamble {
    pub lines_consumed: usize,
    /// Byte offset of the first data row, right after the header line.
    pub rows_offset: usize,
    /// Raw closing balance from "Neuer Kontostand", still German-formatted.
    pub closing_balance: Option<String>,
}

enum ScanState {
    SeekingSection,
    ValidatingBalance,
    ValidatingBlank,
    ValidatingHeader,
}

/// Pattern for the section start marker: the literal label plus either an
/// explicit date range or a "last N days" period.
pub fn section_marker(structure: &AccountStructure) -> Regex {
    let label = regex::escape(structure.label);
    let pattern = format!(
        r#"^"Umsätze {label}";"Zeitraum: ((\d{{2}}\.\d{{2}}\.\d{{4}} - \d{{2}}\.\d{{2}}\.\d{{4}})|(\d+ Tage))";$"#
    );
    Regex::new(&pattern).expect("section marker pattern")
}

/// Scan `input` for the section belonging to `structure`.
///
/// Reaching end of input before the header validates is `SectionNotFound`,
/// as is any malformed line once the marker has been seen. Nothing outside
/// the returned `Preamble` is mutated, so `identify` can call this freely.
pub fn scan(input: &str, structure: &AccountStructure) -> Result<Preamble> {
    let marker = section_marker(structure);
    let balance = Regex::new(BALANCE_LINE).expect("balance line pattern");
    let expected_header = structure.header_row();

    let mut state = ScanState::SeekingSection;
    let mut lines_consumed = 0usize;
    let mut offset = 0usize;
    let mut closing_balance = None;

    for raw_line in input.split_inclusive('\n') {
        offset += raw_line.len();
        lines_consumed += 1;
        let line = raw_line.trim();

        state = match state {
            ScanState::SeekingSection => {
                if marker.is_match(line) {
                    if structure.has_balance {
                        ScanState::ValidatingBalance
                    } else {
                        ScanState::ValidatingBlank
                    }
                } else {
                    ScanState::SeekingSection
                }
            }
            ScanState::ValidatingBalance => match balance.captures(line) {
                Some(caps) => {
                    closing_balance = Some(caps["raw_amount"].to_string());
                    ScanState::ValidatingBlank
                }
                None => return Err(UmsatzError::SectionNotFound),
            },
            ScanState::ValidatingBlank => {
                if line.is_empty() {
                    ScanState::ValidatingHeader
                } else {
                    return Err(UmsatzError::SectionNotFound);
                }
            }
            ScanState::ValidatingHeader => {
                if line == expected_header {
                    return Ok(Preamble {
                        lines_consumed,
                        rows_offset: offset,
                        closing_balance,
                    });
                }
                return Err(UmsatzError::SectionNotFound);
            }
        };
    }

    Err(UmsatzError::SectionNotFound)
}
