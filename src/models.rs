use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amount {
    pub number: Decimal,
    pub currency: String,
}

impl Amount {
    pub fn new(number: Decimal, currency: &str) -> Self {
        Self {
            number,
            currency: currency.to_string(),
        }
    }
}

/// Per-unit acquisition cost on an instrument leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cost {
    pub number: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posting {
    pub account: String,
    /// None on placeholder legs whose amount is inferred downstream.
    pub amount: Option<Amount>,
    pub cost: Option<Cost>,
}

impl Posting {
    pub fn new(account: &str, amount: Amount) -> Self {
        Self {
            account: account.to_string(),
            amount: Some(amount),
            cost: None,
        }
    }

    pub fn placeholder(account: &str) -> Self {
        Self {
            account: account.to_string(),
            amount: None,
            cost: None,
        }
    }

    pub fn with_cost(account: &str, amount: Amount, cost: Cost) -> Self {
        Self {
            account: account.to_string(),
            amount: Some(amount),
            cost: Some(cost),
        }
    }
}

/// Source location carried on every entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub file: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub meta: Meta,
    pub date: NaiveDate,
    pub flag: char,
    pub payee: Option<String>,
    pub narration: String,
    pub postings: Vec<Posting>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceAssertion {
    pub meta: Meta,
    pub date: NaiveDate,
    pub account: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEntry {
    Transaction(Transaction),
    Balance(BalanceAssertion),
}

#[allow(dead_code)]
impl LedgerEntry {
    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            Self::Transaction(txn) => Some(txn),
            Self::Balance(_) => None,
        }
    }

    pub fn as_balance(&self) -> Option<&BalanceAssertion> {
        match self {
            Self::Transaction(_) => None,
            Self::Balance(bal) => Some(bal),
        }
    }
}
