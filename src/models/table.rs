use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Token a text cell must equal to count as absent, mirroring the string
/// rendering of a missing value in loosely-typed tabular sources.
pub const MISSING_TOKEN: &str = "nan";

/// A single value in a [`DataTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Whether this cell counts as absent: an explicit `Missing`, a NaN
    /// number, or text equal to the literal missing-value token.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Number(value) => value.is_nan(),
            Cell::Text(text) => text == MISSING_TOKEN,
        }
    }

    /// Textual representation used when a cell is parsed as a coordinate
    /// string. Absent cells have none.
    pub fn to_text(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        match self {
            Cell::Text(text) => Some(text.clone()),
            Cell::Number(value) => Some(value.to_string()),
            Cell::Missing => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// An in-memory labeled table: ordered column names over row-major cells.
///
/// Every row holds exactly one cell per column. Rows keep their insertion
/// order; conversions never reorder or drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ConvertError::RowLengthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// All cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&Cell>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| ConvertError::ColumnNotFound(name.to_string()))?;
        Ok(self.rows.iter().map(|row| &row[index]).collect())
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let index = self.column_index(name)?;
        self.rows.get(row).map(|cells| &cells[index])
    }

    pub(crate) fn set_cell(&mut self, row: usize, column_index: usize, value: Cell) {
        self.rows[row][column_index] = value;
    }

    /// Index of the named column, appending it filled with `Missing` when it
    /// does not exist yet.
    pub(crate) fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(Cell::Missing);
        }
        self.columns.len() - 1
    }

    /// Assign a full column of values, adding the column or overwriting an
    /// existing one of the same name.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(ConvertError::ColumnLengthMismatch {
                name: name.to_string(),
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        let index = self.ensure_column(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[index] = value;
        }
        Ok(())
    }
}
