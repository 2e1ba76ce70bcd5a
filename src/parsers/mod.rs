pub mod utm_string;

pub use utm_string::{parse, parse_utm_string, FieldOrder};
