use std::path::PathBuf;

use crate::adapter::StatementAdapter;
use crate::classify::Classifier;
use crate::error::{Result, UmsatzError};
use crate::fmt::render_entries;
use crate::formats::get_by_key;

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: &str,
    format: &str,
    account: &str,
    rules: Option<&str>,
    json: bool,
    cash_account: &str,
    fees_account: &str,
) -> Result<()> {
    let structure = get_by_key(format)?;
    let adapter = StatementAdapter::new(structure, account)
        .with_brokerage_accounts(cash_account, fees_account);

    let mut entries = adapter.extract(&PathBuf::from(file))?;

    if let Some(rules_path) = rules {
        let classifier = Classifier::from_file(&PathBuf::from(rules_path))?;
        classifier.classify(&mut entries);
    }

    if json {
        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|e| UmsatzError::Other(e.to_string()))?;
        println!("{rendered}");
    } else {
        print!("{}", render_entries(&entries));
    }
    Ok(())
}
