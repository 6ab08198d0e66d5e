use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lq::scorer::{RawRecord, ScoreResult, ScoredBatch};
use lq::variables::Variable;

fn score_color(normalized: f64) -> Color {
    if normalized >= 66.0 {
        Color::Green
    } else if normalized >= 33.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Per-variable breakdown of one scored record.
pub fn print_record_report(name: &str, record: &RawRecord, result: &ScoreResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Variable").add_attribute(Attribute::Bold),
        Cell::new("Measure"),
        Cell::new("Raw"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (variable, normalized) in result.normalized.iter() {
        let raw = record
            .value(variable)
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(variable.id()).add_attribute(Attribute::Bold),
            Cell::new(variable.label()),
            Cell::new(raw),
            Cell::new(format!("{:.1}", normalized)).fg(score_color(normalized)),
        ]);
    }

    println!("\n{}", name);
    println!("{}", table);
    print_summary(result);
}

fn print_summary(result: &ScoreResult) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Composite").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", result.composite)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("LQ").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.0}", result.final_score))
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("{}", table);
}

/// One line per named result, sorted as given.
pub fn print_comparison_report(results: &[(String, ScoreResult)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Profile").add_attribute(Attribute::Bold),
        Cell::new("Composite"),
        Cell::new("LQ").fg(Color::Cyan),
        Cell::new("Weakest"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, r) in results {
        let weakest = weakest_variable(r)
            .map(|(v, s)| format!("{} ({:.0})", v, s))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", r.composite)),
            Cell::new(format!("{:.0}", r.final_score)).fg(Color::Cyan),
            Cell::new(weakest),
        ]);
    }
    println!("\n{}", table);
}

/// Distribution of final scores across a scored batch.
pub fn print_batch_summary(scored: &ScoredBatch) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let finals: Vec<f64> = scored.rows.iter().map(|r| r.result.final_score).collect();
    let min = finals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    table.add_row(vec![
        Cell::new("Rows").add_attribute(Attribute::Bold),
        Cell::new(scored.len()),
    ]);
    if let Some(mean) = scored.mean_final_score() {
        table.add_row(vec![
            Cell::new("Mean LQ").add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", mean)).fg(Color::Cyan),
        ]);
        table.add_row(vec![
            Cell::new("Min / Max LQ").add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1} / {:.1}", min, max)),
        ]);
    }
    eprintln!("{}", table);
}

fn weakest_variable(result: &ScoreResult) -> Option<(Variable, f64)> {
    result
        .normalized
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
