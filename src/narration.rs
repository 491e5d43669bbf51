//! Recover structured fields from a comdirect narration blob.
//!
//! The export packs counterparty and memo into a single Buchungstext cell
//! using embedded label markers:
//!
//! ```text
//! Auftraggeber: ACME GmbH Buchungstext: Miete 03/2024
//! ```
//!
//! There is no delimiter other than the `<Label>:` words themselves, so the
//! cell is split on spaces and scanned word by word.

use std::collections::HashMap;

pub const AUFTRAGGEBER: &str = "Auftraggeber";
pub const EMPFAENGER: &str = "Empfänger";
pub const BUCHUNGSTEXT: &str = "Buchungstext";

const LABELS: &[&str] = &[AUFTRAGGEBER, EMPFAENGER, BUCHUNGSTEXT];

/// Split a narration blob into labeled sub-fields.
///
/// Words preceding the first recognized label are boilerplate ("Lastschrift
/// aktiv" and the like) and are dropped. When no label occurs at all the
/// result is empty and callers fall back to the raw blob.
pub fn parse_narration(text: &str) -> HashMap<&'static str, String> {
    let mut parsed = HashMap::new();
    let mut current: Option<&'static str> = None;
    let mut words: Vec<&str> = Vec::new();

    for word in text.split(' ') {
        let label = word
            .strip_suffix(':')
            .and_then(|w| LABELS.iter().copied().find(|l| *l == w));
        if let Some(label) = label {
            if let Some(key) = current {
                parsed.insert(key, words.join(" "));
            }
            current = Some(label);
            words.clear();
        } else {
            words.push(word);
        }
    }
    if let Some(key) = current {
        parsed.insert(key, words.join(" "));
    }
    parsed
}
