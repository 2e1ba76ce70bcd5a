pub mod coordinate;
pub mod table;

pub use coordinate::{CoordinateColumns, LatLon, UtmCoordinate};
pub use table::{Cell, DataTable};
