use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::formats::ALL_STRUCTURES;

pub fn run() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Section Label", "Balance Line", "Columns"]);
    for structure in ALL_STRUCTURES {
        let columns = structure
            .fields
            .iter()
            .filter(|f| !f.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(structure.kind.key()),
            Cell::new(structure.label),
            Cell::new(if structure.has_balance { "yes" } else { "no" }),
            Cell::new(columns),
        ]);
    }
    println!("Statement formats\n{table}");
    Ok(())
}
