use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields decomposed from a single UTM coordinate string.
///
/// The zone number is kept as a float and the zone letter verbatim; neither
/// is validated here. Validation happens in the projection step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtmCoordinate {
    pub zone_number: f64,
    pub zone_letter: String,
    pub easting: f64,
    pub northing: f64,
}

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct LatLon {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Batch output as two parallel sequences, index-aligned with the input.
///
/// Serializes as a mapping with `"lat"` and `"lon"` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CoordinateColumns {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

impl CoordinateColumns {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lat: Vec::with_capacity(capacity),
            lon: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, coordinate: LatLon) {
        self.lat.push(coordinate.latitude);
        self.lon.push(coordinate.longitude);
    }

    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlon_validation() {
        assert!(LatLon::new(51.5074, -0.1278).validate().is_ok());
        assert!(LatLon::new(91.0, 0.0).validate().is_err());
        assert!(LatLon::new(0.0, -180.5).validate().is_err());
    }

    #[test]
    fn test_columns_push_keeps_alignment() {
        let mut columns = CoordinateColumns::default();
        columns.push(LatLon::new(1.0, 2.0));
        columns.push(LatLon::new(3.0, 4.0));

        assert_eq!(columns.len(), 2);
        assert_eq!(columns.lat, vec![1.0, 3.0]);
        assert_eq!(columns.lon, vec![2.0, 4.0]);
    }

    #[test]
    fn test_columns_serialize_with_lat_lon_keys() {
        let mut columns = CoordinateColumns::default();
        columns.push(LatLon::new(1.5, -2.5));

        let json = serde_json::to_value(&columns).unwrap();
        assert_eq!(json["lat"][0], 1.5);
        assert_eq!(json["lon"][0], -2.5);
    }
}
