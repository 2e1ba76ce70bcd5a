pub mod column;
pub mod list;

pub use column::ColumnConverter;
pub use list::ListConverter;
