use std::path::PathBuf;

use colored::Colorize;

use crate::adapter::StatementAdapter;
use crate::error::Result;
use crate::formats::get_by_key;

pub fn run(file: &str, format: &str) -> Result<()> {
    let structure = get_by_key(format)?;
    // identify does not need a target account
    let adapter = StatementAdapter::new(structure, "");
    let path = PathBuf::from(file);

    if adapter.identify(&path)? {
        println!(
            "{} {} section recognized in {}",
            "ok:".green(),
            structure.label,
            file
        );
        Ok(())
    } else {
        println!(
            "{} no {} section found in {}",
            "not recognized:".red(),
            structure.label,
            file
        );
        std::process::exit(1);
    }
}
