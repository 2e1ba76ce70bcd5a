use tracing::debug;

use crate::error::Result;
use crate::models::{Cell, DataTable, LatLon};
use crate::parsers::{parse, FieldOrder};

/// Applies the UTM string parser across one named column of a [`DataTable`],
/// writing latitude and longitude into two destination columns.
///
/// Conversion is two-phase: every non-absent source cell is parsed into a
/// staging vector first, and writes happen only after the whole column has
/// parsed. A failing cell therefore returns an error without touching any
/// row, and the input table is never mutated — the converter returns a new
/// table.
#[derive(Debug, Clone, Default)]
pub struct ColumnConverter {
    order: FieldOrder,
    create_new: bool,
    match_by_value: bool,
}

impl ColumnConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_order(mut self, order: FieldOrder) -> Self {
        self.order = order;
        self
    }

    /// Assign fresh lat/lon columns by row position instead of writing into
    /// existing ones. Same-named existing columns are overwritten.
    pub fn with_create_new(mut self, create_new: bool) -> Self {
        self.create_new = create_new;
        self
    }

    /// Legacy write mode: match destination rows by value equality of the
    /// source cell, so all rows sharing a source string receive the written
    /// result. The default writes strictly by row position. Because parsing
    /// is deterministic, duplicate source values receive identical results
    /// under either mode; the flag exists for callers that relied on the
    /// historical matching rule. Ignored when `create_new` is set.
    pub fn with_value_matching(mut self, match_by_value: bool) -> Self {
        self.match_by_value = match_by_value;
        self
    }

    pub fn convert(
        &self,
        table: &DataTable,
        source_column: &str,
        lat_column: &str,
        lon_column: &str,
    ) -> Result<DataTable> {
        debug!(
            rows = table.num_rows(),
            source = source_column,
            lat = lat_column,
            lon = lon_column,
            create_new = self.create_new,
            "converting table column"
        );

        // Phase one: parse every present cell before any write. Absent cells
        // (explicit missing, NaN, or the "nan" token) stage as None.
        let texts: Vec<Option<String>> = table
            .column(source_column)?
            .iter()
            .map(|cell| cell.to_text())
            .collect();
        let mut staged: Vec<Option<LatLon>> = Vec::with_capacity(texts.len());
        for text in &texts {
            match text {
                Some(value) => staged.push(Some(parse(value, self.order)?)),
                None => staged.push(None),
            }
        }

        // Phase two: commit into a copy.
        let mut output = table.clone();
        if self.create_new {
            let lat_cells = staged
                .iter()
                .map(|value| value.map_or(Cell::Missing, |c| Cell::Number(c.latitude)))
                .collect();
            let lon_cells = staged
                .iter()
                .map(|value| value.map_or(Cell::Missing, |c| Cell::Number(c.longitude)))
                .collect();
            output.set_column(lat_column, lat_cells)?;
            output.set_column(lon_column, lon_cells)?;
            return Ok(output);
        }

        let lat_index = output.ensure_column(lat_column);
        let lon_index = output.ensure_column(lon_column);
        for (row, (text, value)) in texts.iter().zip(&staged).enumerate() {
            let (Some(text), Some(coordinate)) = (text, value) else {
                continue;
            };
            if self.match_by_value {
                for (target, candidate) in texts.iter().enumerate() {
                    if candidate.as_deref() == Some(text.as_str()) {
                        output.set_cell(target, lat_index, Cell::Number(coordinate.latitude));
                        output.set_cell(target, lon_index, Cell::Number(coordinate.longitude));
                    }
                }
            } else {
                output.set_cell(row, lat_index, Cell::Number(coordinate.latitude));
                output.set_cell(row, lon_index, Cell::Number(coordinate.longitude));
            }
        }
        Ok(output)
    }
}
