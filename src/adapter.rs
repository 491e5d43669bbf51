//! Importer façade following the ingestion contract: `identify` answers
//! whether a file carries this adapter's section, `extract` converts it.
//!
//! One adapter instance covers one account type; a file holding several
//! sections is fed to one adapter per type.

use std::fs;
use std::path::Path;

use crate::error::{Result, UmsatzError};
use crate::extract::{self, RowContext};
use crate::formats::AccountStructure;
use crate::models::LedgerEntry;
use crate::preamble;

pub const DEFAULT_CASH_ACCOUNT: &str = "FIXME:cash";
pub const DEFAULT_FEES_ACCOUNT: &str = "FIXME:fees";

pub struct StatementAdapter {
    structure: &'static AccountStructure,
    account: String,
    cash_account: String,
    fees_account: String,
}

impl StatementAdapter {
    pub fn new(structure: &'static AccountStructure, account: &str) -> Self {
        Self {
            structure,
            account: account.to_string(),
            cash_account: DEFAULT_CASH_ACCOUNT.to_string(),
            fees_account: DEFAULT_FEES_ACCOUNT.to_string(),
        }
    }

    /// Override the placeholder accounts used on brokerage legs.
    pub fn with_brokerage_accounts(mut self, cash: &str, fees: &str) -> Self {
        self.cash_account = cash.to_string();
        self.fees_account = fees.to_string();
        self
    }

    /// The ledger account this adapter books against.
    #[allow(dead_code)]
    pub fn file_account(&self) -> &str {
        &self.account
    }

    /// True when the file contains a section in this adapter's shape.
    /// Format mismatch is a `false`, never an error; I/O errors propagate.
    pub fn identify(&self, path: &Path) -> Result<bool> {
        let text = read_latin1(path)?;
        match preamble::scan(&text, self.structure) {
            Ok(_) => Ok(true),
            Err(UmsatzError::SectionNotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Extract this adapter's section as ledger entries, in file order
    /// (newest first). Atomic: any malformed row fails the whole call.
    pub fn extract(&self, path: &Path) -> Result<Vec<LedgerEntry>> {
        let text = read_latin1(path)?;
        let pre = preamble::scan(&text, self.structure)?;
        let file_name = path.display().to_string();
        extract::extract_section(
            &RowContext {
                structure: self.structure,
                account: &self.account,
                cash_account: &self.cash_account,
                fees_account: &self.fees_account,
                file_name: &file_name,
            },
            &text,
            &pre,
        )
    }
}

/// comdirect exports are ISO-8859-1; every byte maps 1:1 onto the same
/// Unicode code point.
fn read_latin1(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}
