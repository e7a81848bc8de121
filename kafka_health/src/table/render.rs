use crate::table::{Record, RecordStore};

pub const NO_LAG_MESSAGE: &str = "No lags greater than 0";

const COLUMN_SEPARATOR: &str = "  ";

/// Renders the store as a right-aligned text table with a header row. Cells follow the
/// store's declared columns; rows keep the store's current order.
pub fn render(store: &RecordStore) -> String {
    if store.is_empty() {
        return NO_LAG_MESSAGE.to_owned();
    }

    let columns = store.columns();
    let mut widths = columns.iter().map(|c| c.chars().count()).collect::<Vec<_>>();
    let rows = store
        .iter()
        .map(|record| cells(columns, record))
        .collect::<Vec<_>>();
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(columns.iter().map(String::as_str), &widths));
    for row in &rows {
        lines.push(render_line(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

fn cells(columns: &[String], record: &Record) -> Vec<String> {
    columns
        .iter()
        .map(|column| record.get(column).unwrap_or_default().to_owned())
        .collect()
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}
