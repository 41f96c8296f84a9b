use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use typeforge::geometry::PHYSICAL_ROWS;

/// Prints the layout one physical keyboard row per table row.
pub fn print_layout(name: &str, bytes: &[u8]) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in PHYSICAL_ROWS {
        let Some(keys) = bytes.get(row) else {
            continue;
        };
        let cells: Vec<Cell> = keys
            .iter()
            .map(|&b| Cell::new((b as char).to_string()).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
