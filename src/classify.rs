//! Balance extracted cash transactions from an injected payee mapping.
//!
//! Extraction deliberately leaves cash transactions single-posting; this
//! pass runs strictly downstream of it and appends the counter-posting
//! against whatever account the mapping names for the payee, falling back
//! to an uncategorized account. Brokerage transactions and balance
//! assertions pass through untouched.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, UmsatzError};
use crate::models::{Amount, LedgerEntry, Posting};

pub const UNCATEGORIZED_ACCOUNT: &str = "Expenses:FIXME";

/// Key in the rules file naming the fallback account.
const FALLBACK_KEY: &str = "*";

pub struct Classifier {
    mapping: HashMap<String, String>,
    fallback: String,
}

impl Classifier {
    pub fn new(mapping: HashMap<String, String>) -> Self {
        let fallback = mapping
            .get(FALLBACK_KEY)
            .cloned()
            .unwrap_or_else(|| UNCATEGORIZED_ACCOUNT.to_string());
        Self { mapping, fallback }
    }

    /// Load a rules file: a flat JSON object of payee → account, with an
    /// optional "*" entry overriding the fallback account.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mapping: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| UmsatzError::Other(format!("Bad rules file: {e}")))?;
        Ok(Self::new(mapping))
    }

    pub fn account_for(&self, payee: Option<&str>) -> &str {
        payee
            .and_then(|p| self.mapping.get(p))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Append counter-postings in place; returns how many were appended.
    pub fn classify(&self, entries: &mut [LedgerEntry]) -> usize {
        let mut appended = 0;
        for entry in entries.iter_mut() {
            let LedgerEntry::Transaction(txn) = entry else {
                continue;
            };
            if txn.postings.len() != 1 {
                continue;
            }
            let Some(amount) = txn.postings[0].amount.clone() else {
                continue;
            };
            let target = self.account_for(txn.payee.as_deref()).to_string();
            txn.postings.push(Posting::new(
                &target,
                Amount::new(-amount.number, &amount.currency),
            ));
            appended += 1;
        }
        appended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Meta, Transaction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn cash_txn(payee: Option<&str>, number: rust_decimal::Decimal) -> LedgerEntry {
        LedgerEntry::Transaction(Transaction {
            meta: Meta {
                file: "umsatz.csv".to_string(),
                line: 5,
            },
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            flag: '*',
            payee: payee.map(String::from),
            narration: "Miete".to_string(),
            postings: vec![Posting::new(
                "Assets:Checking",
                Amount::new(number, "EUR"),
            )],
        })
    }

    fn classifier() -> Classifier {
        Classifier::new(HashMap::from([(
            "Jane Doe".to_string(),
            "Expenses:Rent".to_string(),
        )]))
    }

    #[test]
    fn test_known_payee_gets_counter_posting() {
        let mut entries = vec![cash_txn(Some("Jane Doe"), dec!(-650.00))];
        assert_eq!(classifier().classify(&mut entries), 1);
        let txn = entries[0].as_transaction().unwrap();
        assert_eq!(txn.postings.len(), 2);
        assert_eq!(txn.postings[1].account, "Expenses:Rent");
        assert_eq!(txn.postings[1].amount.as_ref().unwrap().number, dec!(650.00));
    }

    #[test]
    fn test_unknown_payee_falls_back() {
        let mut entries = vec![cash_txn(Some("Somebody"), dec!(-10.00))];
        classifier().classify(&mut entries);
        let txn = entries[0].as_transaction().unwrap();
        assert_eq!(txn.postings[1].account, UNCATEGORIZED_ACCOUNT);
    }

    #[test]
    fn test_fallback_override() {
        let c = Classifier::new(HashMap::from([(
            "*".to_string(),
            "Expenses:Unsorted".to_string(),
        )]));
        assert_eq!(c.account_for(None), "Expenses:Unsorted");
    }

    #[test]
    fn test_multi_posting_transactions_untouched() {
        let mut entries = vec![cash_txn(Some("Jane Doe"), dec!(-650.00))];
        classifier().classify(&mut entries);
        // second pass must not append a third leg
        assert_eq!(classifier().classify(&mut entries), 0);
        assert_eq!(entries[0].as_transaction().unwrap().postings.len(), 2);
    }
}
