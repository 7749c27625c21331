//! Console rendering of tabular query results.

use std::io::Write;

use comfy_table::Table;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::result::QueryResult;

pub const INDEX_COLUMN: &str = "(index)";

/// Build a console table from the labeled rows of a result.
///
/// Columns are the row index followed by every label in the order it was
/// first seen.  A row without a given label leaves that cell empty.
pub fn render_table(result: &QueryResult) -> Table {
    let rows = result.labeled_rows();

    let mut columns: Vec<&str> = vec![];
    for row in rows.iter() {
        for label in row.keys() {
            if !columns.contains(&label.as_str()) {
                columns.push(label);
            }
        }
    }

    let mut table = Table::new();
    table.set_header(std::iter::once(INDEX_COLUMN).chain(columns.iter().copied()));

    for (index, row) in rows.iter().enumerate() {
        let cells = columns
            .iter()
            .map(|column| row.get(*column).map(display_value).unwrap_or_default());

        table.add_row(std::iter::once(index.to_string()).chain(cells));
    }

    table
}

/// Write a result to `writer` as a table, followed by a newline
pub fn write_table<W: Write>(writer: &mut W, result: &QueryResult) -> Result<()> {
    writeln!(writer, "{}", render_table(result))
        .map_err(|e| ClientError::Write(e.to_string()))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(value) => value.to_owned(),
        other => other.to_string(),
    }
}
