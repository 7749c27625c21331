//! Query results.
//!
//! The server's response body is kept exactly as decoded.  Results usually
//! take the tabular shape `{"rows": [[..], ..], "headers": [..]}`, and the
//! accessors here read that shape without requiring it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A row keyed by column label
pub type LabeledRow = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResult(Value);

impl QueryResult {
    pub fn new(value: Value) -> Self {
        QueryResult(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Column names, empty when the server sent none
    pub fn headers(&self) -> Vec<String> {
        match self.0.get("headers") {
            Some(Value::Array(headers)) => headers
                .iter()
                .map(|header| match header {
                    Value::String(name) => name.to_owned(),
                    other => other.to_string(),
                })
                .collect(),
            _ => vec![],
        }
    }

    /// Result rows, empty when the server sent none
    ///
    /// A row that is not an array is treated as a single-column row.
    pub fn rows(&self) -> Vec<Vec<Value>> {
        match self.0.get("rows") {
            Some(Value::Array(rows)) => rows
                .iter()
                .map(|row| match row {
                    Value::Array(values) => values.to_owned(),
                    other => vec![other.to_owned()],
                })
                .collect(),
            _ => vec![],
        }
    }

    /// Each row as a mapping from column label to value.
    ///
    /// The label for column `i` is `headers[i]`, or `(i)` when the headers
    /// don't reach that far.
    pub fn labeled_rows(&self) -> Vec<LabeledRow> {
        let headers = self.headers();

        self.rows()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .enumerate()
                    .map(|(index, value)| (column_label(&headers, index), value))
                    .collect()
            })
            .collect()
    }
}

impl From<Value> for QueryResult {
    fn from(value: Value) -> Self {
        QueryResult(value)
    }
}

fn column_label(headers: &[String], index: usize) -> String {
    headers
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("({index})"))
}
