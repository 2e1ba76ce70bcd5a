//! Convert UTM coordinate strings into decimal-degree latitude/longitude.
//!
//! Works on single strings, ordered lists of strings, or one named column of
//! an in-memory [`DataTable`]. Strings follow the
//! `"10M 551884.29mE 5278575.64mN"` convention; the `mE`/`mN` order is
//! configurable through [`FieldOrder`].

pub mod converters;
pub mod error;
pub mod models;
pub mod parsers;
pub mod projection;

pub use converters::{ColumnConverter, ListConverter};
pub use error::{ConvertError, Result};
pub use models::{Cell, CoordinateColumns, DataTable, LatLon, UtmCoordinate};
pub use parsers::{parse, parse_utm_string, FieldOrder};
