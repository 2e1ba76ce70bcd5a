use tracing::debug;

use crate::error::Result;
use crate::models::{CoordinateColumns, LatLon};
use crate::parsers::{parse, FieldOrder};

/// Applies the UTM string parser across an ordered sequence of strings.
///
/// Conversion fails fast: the first string that does not parse aborts the
/// whole batch with no partial result.
#[derive(Debug, Clone, Default)]
pub struct ListConverter {
    order: FieldOrder,
}

impl ListConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_order(order: FieldOrder) -> Self {
        Self { order }
    }

    /// Convert every string into a `(lat, lon)` pair, preserving input order.
    pub fn convert_pairs<S: AsRef<str>>(&self, items: &[S]) -> Result<Vec<LatLon>> {
        debug!(count = items.len(), "converting UTM string list to pairs");
        items
            .iter()
            .map(|item| parse(item.as_ref(), self.order))
            .collect()
    }

    /// Convert every string into parallel latitude and longitude sequences,
    /// index-aligned with the input.
    pub fn convert_columns<S: AsRef<str>>(&self, items: &[S]) -> Result<CoordinateColumns> {
        debug!(count = items.len(), "converting UTM string list to columns");
        let mut columns = CoordinateColumns::with_capacity(items.len());
        for item in items {
            columns.push(parse(item.as_ref(), self.order)?);
        }
        Ok(columns)
    }
}
