//! Static catalog of the account sections a comdirect export can carry.
//!
//! One CSV file interleaves up to four sections back to back; each section
//! has its own label in the start marker and its own column layout. The
//! catalog is the single source of truth for both.

use crate::error::{Result, UmsatzError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
    Brokerage,
}

impl AccountKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Credit => "credit",
            Self::Brokerage => "brokerage",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct AccountStructure {
    pub kind: AccountKind,
    /// Section label as it appears in the "Umsätze <label>" start marker.
    pub label: &'static str,
    /// Whether the preamble carries a "Neuer Kontostand" line.
    pub has_balance: bool,
    /// Column names in file order; the trailing empty entry mirrors the
    /// bare separator comdirect appends to every row.
    pub fields: &'static [&'static str],
}

const CHECKING: AccountStructure = AccountStructure {
    kind: AccountKind::Checking,
    label: "Girokonto",
    has_balance: true,
    fields: &[
        "Buchungstag",
        "Wertstellung (Valuta)",
        "Vorgang",
        "Buchungstext",
        "Umsatz in EUR",
        "",
    ],
};

const SAVINGS: AccountStructure = AccountStructure {
    kind: AccountKind::Savings,
    label: "Tagesgeld PLUS-Konto",
    has_balance: true,
    fields: &[
        "Buchungstag",
        "Wertstellung (Valuta)",
        "Vorgang",
        "Buchungstext",
        "Umsatz in EUR",
        "",
    ],
};

const CREDIT: AccountStructure = AccountStructure {
    kind: AccountKind::Credit,
    label: "Visa-Karte (Kreditkarte)",
    has_balance: true,
    fields: &[
        "Buchungstag",
        "Umsatztag",
        "Vorgang",
        "Referenz",
        "Buchungstext",
        "Umsatz in EUR",
        "",
    ],
};

const BROKERAGE: AccountStructure = AccountStructure {
    kind: AccountKind::Brokerage,
    label: "Depot",
    has_balance: false,
    fields: &[
        "Buchungstag",
        "Geschäftstag",
        "Stück / Nom.",
        "Bezeichnung",
        "WKN",
        "Währung",
        "Ausführungskurs",
        "Umsatz in EUR",
        "",
    ],
};

pub const ALL_STRUCTURES: &[&AccountStructure] = &[&CHECKING, &SAVINGS, &CREDIT, &BROKERAGE];

pub fn get_by_key(key: &str) -> Result<&'static AccountStructure> {
    ALL_STRUCTURES
        .iter()
        .find(|s| s.kind.key() == key)
        .copied()
        .ok_or_else(|| UmsatzError::UnknownFormat(key.to_string()))
}

impl AccountStructure {
    /// The exact header line the export writes after the preamble: each
    /// non-empty field quoted, joined by `;`, the trailing empty field
    /// producing a bare trailing separator.
    pub fn header_row(&self) -> String {
        self.fields
            .iter()
            .map(|f| {
                if f.is_empty() {
                    String::new()
                } else {
                    format!("\"{f}\"")
                }
            })
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == name)
    }
}
