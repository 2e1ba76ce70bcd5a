pub mod wgs84;

pub use wgs84::to_lat_lon;
