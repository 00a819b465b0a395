use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use star_transform::{BuildReport, IssueKind, RecordIssue};

use crate::logging::redact_value;
use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Records: {}", result.records);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Description"),
        header_cell("Rows"),
        header_cell("CSV"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for summary in &result.tables {
        table.add_row(vec![
            Cell::new(summary.table.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.table.description()),
            Cell::new(summary.rows),
            match summary.path {
                Some(_) => Cell::new("✓")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
    print_issue_table(&result.issues);
}

fn print_issue_table(report: &BuildReport) {
    if report.is_clean() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Issue"),
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Message"),
        header_cell("Examples"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (kind, count) in report.kinds() {
        table.add_row(vec![
            Cell::new(kind).fg(Color::Yellow),
            Cell::new(kind.field()),
            count_cell(count),
            Cell::new(kind.message()),
            example_cell(kind, report.examples(kind)),
        ]);
    }
    println!();
    println!("Issues ({} total):", report.total());
    println!("{table}");
}

/// Not-found keys carry customer or product text.
fn is_sensitive(kind: IssueKind) -> bool {
    matches!(kind, IssueKind::CustomerNotFound | IssueKind::ProductNotFound)
}

fn format_examples(kind: IssueKind, examples: &[RecordIssue]) -> String {
    examples
        .iter()
        .map(|issue| {
            let value = if is_sensitive(kind) {
                redact_value(&issue.value)
            } else {
                issue.value.as_str()
            };
            format!("#{} {value:?}", issue.record)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn example_cell(kind: IssueKind, examples: &[RecordIssue]) -> Cell {
    if examples.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(format_examples(kind, examples))
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_examples_with_record_positions() {
        let examples = vec![
            RecordIssue {
                record: 2,
                value: "abc".to_string(),
            },
            RecordIssue {
                record: 7,
                value: String::new(),
            },
        ];
        assert_eq!(
            format_examples(IssueKind::InvalidQuantity, &examples),
            "#2 \"abc\", #7 \"\""
        );
    }

    #[test]
    fn hides_customer_values_by_default() {
        let examples = vec![RecordIssue {
            record: 0,
            value: "Ana".to_string(),
        }];
        assert_eq!(
            format_examples(IssueKind::CustomerNotFound, &examples),
            "#0 \"[REDACTED]\""
        );
    }
}
