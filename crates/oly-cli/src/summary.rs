use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use oly_model::{PassSummary, RunSummary};

pub fn print_summary(summary: &RunSummary) {
    println!("Data: {}", summary.data_dir.display());
    if summary.dry_run {
        println!("Output: none (dry run)");
    } else {
        println!("Output: {}", summary.output_dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Column"),
        header_cell("Rows"),
        header_cell("Rewritten"),
        header_cell("Unparseable"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for pass in &summary.passes {
        table.add_row(pass_row(pass));
    }
    table.add_row(vec![
        Cell::new("medal tally")
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(summary.tally_rows),
        dim_cell("-"),
        dim_cell("-"),
        written_cell(summary.tally_output.is_some()),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(summary.total_rows()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_failure_table(summary);
    if summary.has_errors() {
        eprintln!("Errors:");
        for error in &summary.errors {
            eprintln!("- {error}");
        }
    }
}

fn pass_row(pass: &PassSummary) -> Vec<Cell> {
    let rewritten = pass.column.as_ref().map(|_| pass.stats.normalized);
    let failed = pass.column.as_ref().map(|_| pass.stats.failed());
    vec![
        Cell::new(&pass.table)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        match &pass.column {
            Some(column) => Cell::new(column),
            None => dim_cell("-"),
        },
        Cell::new(pass.stats.rows),
        count_cell(rewritten, Color::Green),
        count_cell(failed, Color::Yellow),
        written_cell(pass.output.is_some()),
    ]
}

/// Per-reason counts of values that fell back to a sentinel.
fn print_failure_table(summary: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Reason"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut any = false;
    for pass in &summary.passes {
        for (reason, count) in &pass.stats.failures {
            any = true;
            table.add_row(vec![
                Cell::new(&pass.table),
                Cell::new(reason),
                count_cell(Some(*count), Color::Yellow),
            ]);
        }
    }
    if any {
        println!();
        println!("Unparseable values:");
        println!("{table}");
    }
}

fn written_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

pub fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
