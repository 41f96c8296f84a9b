use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use typeforge::api::ValidationResult;
use typeforge::typing::SessionSummary;

pub fn fitness(results: &[ValidationResult]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Fitness").fg(Color::Cyan),
        Cell::new("Home").fg(Color::Green),
        Cell::new("Travel").fg(Color::Red),
        Cell::new("Home %"),
        Cell::new("Avg Dist"),
        Cell::new("Bigrams"),
        Cell::new("Skipped"),
    ]);

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in results {
        let d = &r.score;
        table.add_row(vec![
            Cell::new(&r.layout_name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", d.fitness)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", d.home_row_bonus)).fg(Color::Green),
            Cell::new(format!("{:.1}", d.distance_penalty)).fg(Color::Red),
            Cell::new(format!("{:.1}", d.home_row_share * 100.0)),
            Cell::new(format!("{:.2}", d.mean_distance)),
            Cell::new(format!("{:.0}", d.total_bigrams)),
            Cell::new(format!("{:.0}", d.skipped_bigrams)),
        ]);
    }

    println!("\n=== FITNESS REPORT ===");
    println!("{}", table);
}

pub fn bigrams(top: &[([char; 2], u64)]) {
    if top.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Bigram").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    for ([a, b], count) in top {
        table.add_row(vec![
            Cell::new(format!("{}{}", a, b)),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n=== TOP BIGRAMS ===");
    println!("{}", table);
}

pub fn session(summary: &SessionSummary) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let m = &summary.metrics;
    let rows: [(&str, String); 8] = [
        ("WPM", m.wpm.to_string()),
        ("Raw WPM", m.raw_wpm.to_string()),
        ("Accuracy", format!("{}%", m.accuracy)),
        ("Consistency", format!("{}%", summary.consistency)),
        ("Time", format!("{}s", m.time_seconds)),
        ("Keystrokes", summary.total_keystrokes.to_string()),
        ("Errors", summary.total_errors.to_string()),
        ("Characters", summary.typed_chars.to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}
