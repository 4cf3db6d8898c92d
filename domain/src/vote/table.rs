//! Plain table model of an HTML vote document
//!
//! Table discovery happens outside the domain (see the `TableExtractor`
//! port); the parser only sees the cell text.

use serde::{Deserialize, Serialize};

/// One `<tr>` of a table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Text of the row's `<th>` cells
    pub headers: Vec<String>,
    /// Text of the row's `<td>` cells
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(headers: Vec<String>, cells: Vec<String>) -> Self {
        Self { headers, cells }
    }
}

/// One `<table>` of a vote document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTable {
    /// Rows belonging directly to this table
    pub rows: Vec<TableRow>,
    /// Text of every `<td>` under this table, nested tables included
    pub descendant_cells: Vec<String>,
}

impl VoteTable {
    /// Build a table whose descendant cells are exactly its rows' cells
    pub fn from_rows(rows: Vec<TableRow>) -> Self {
        let descendant_cells = rows.iter().flat_map(|r| r.cells.iter().cloned()).collect();
        Self {
            rows,
            descendant_cells,
        }
    }

    /// Trimmed text of the first header cell of the first row
    pub fn left_header(&self) -> Option<&str> {
        self.rows
            .first()
            .and_then(|row| row.headers.first())
            .map(|h| h.trim())
    }

    pub fn first_row_header_count(&self) -> usize {
        self.rows.first().map(|row| row.headers.len()).unwrap_or(0)
    }
}
