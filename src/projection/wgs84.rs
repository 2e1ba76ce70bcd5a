//! Inverse transverse Mercator projection on the WGS84 ellipsoid.
//!
//! Converts a UTM (easting, northing, zone) triple back to geographic
//! latitude/longitude using the standard Snyder series expansion.

use validator::Validate;

use crate::error::{ConvertError, Result};
use crate::models::LatLon;

/// WGS84 semi-major axis, meters.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 first eccentricity squared.
const E: f64 = 0.006_694_38;
const E2: f64 = E * E;
const E3: f64 = E2 * E;
/// Second eccentricity squared, e² / (1 − e²).
const E_P2: f64 = E / (1.0 - E);

/// UTM central scale factor.
const K0: f64 = 0.9996;

/// Leading coefficient of the meridian arc series.
const M1: f64 = 1.0 - E / 4.0 - 3.0 * E2 / 64.0 - 5.0 * E3 / 256.0;

const MIN_EASTING: f64 = 100_000.0;
const MAX_EASTING: f64 = 1_000_000.0;
const MIN_NORTHING: f64 = 0.0;
const MAX_NORTHING: f64 = 10_000_000.0;

/// Convert UTM coordinates to a decimal-degree latitude/longitude pair.
///
/// The zone letter selects the hemisphere: band letters `N` through `X`
/// (case-insensitive) are northern, `C` through `M` southern. Letters
/// outside `C..=X`, or `I`/`O`, fail with an invalid-zone error; eastings,
/// northings, and zone numbers outside the UTM grid fail with an
/// out-of-range error.
///
/// # Examples
/// ```
/// use utm2dd::projection::to_lat_lon;
///
/// // Equator on the central meridian of zone 31.
/// let coord = to_lat_lon(500_000.0, 0.0, 31.0, "N").unwrap();
/// assert!(coord.latitude.abs() < 1e-9);
/// assert!((coord.longitude - 3.0).abs() < 1e-9);
/// ```
pub fn to_lat_lon(
    easting: f64,
    northing: f64,
    zone_number: f64,
    zone_letter: &str,
) -> Result<LatLon> {
    if !(MIN_EASTING..MAX_EASTING).contains(&easting) {
        return Err(ConvertError::OutOfRange {
            field: "easting",
            value: easting,
            min: MIN_EASTING,
            max: MAX_EASTING,
        });
    }
    if !(MIN_NORTHING..=MAX_NORTHING).contains(&northing) {
        return Err(ConvertError::OutOfRange {
            field: "northing",
            value: northing,
            min: MIN_NORTHING,
            max: MAX_NORTHING,
        });
    }
    if !(1.0..=60.0).contains(&zone_number) {
        return Err(ConvertError::InvalidZone(format!(
            "zone number {} out of range (must be between 1 and 60)",
            zone_number
        )));
    }
    let northern = is_northern(zone_letter)?;

    let x = easting - 500_000.0;
    let y = if northern {
        northing
    } else {
        northing - MAX_NORTHING
    };

    // Footpoint latitude from the meridian arc.
    let mu = y / K0 / (WGS84_A * M1);
    let p_rad = footpoint_latitude(mu);

    let p_sin = p_rad.sin();
    let p_cos = p_rad.cos();
    let p_tan = p_sin / p_cos;
    let p_tan2 = p_tan * p_tan;
    let p_tan4 = p_tan2 * p_tan2;

    let ep_sin = 1.0 - E * p_sin * p_sin;
    let ep_sin_sqrt = ep_sin.sqrt();

    // Radii of curvature at the footpoint.
    let n = WGS84_A / ep_sin_sqrt;
    let r = WGS84_A * (1.0 - E) / (ep_sin * ep_sin_sqrt);

    let c = E_P2 * p_cos * p_cos;
    let c2 = c * c;

    let d = x / (n * K0);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    let latitude = p_rad
        - (n * p_tan / r)
            * (d2 / 2.0
                - d4 / 24.0 * (5.0 + 3.0 * p_tan2 + 10.0 * c - 4.0 * c2 - 9.0 * E_P2)
                + d6 / 720.0
                    * (61.0 + 90.0 * p_tan2 + 298.0 * c + 45.0 * p_tan4 - 252.0 * E_P2
                        - 3.0 * c2));

    let longitude = (d - d3 / 6.0 * (1.0 + 2.0 * p_tan2 + c)
        + d5 / 120.0
            * (5.0 - 2.0 * c + 28.0 * p_tan2 - 3.0 * c2 + 8.0 * E_P2 + 24.0 * p_tan4))
        / p_cos;

    let coordinate = LatLon::new(
        latitude.to_degrees(),
        longitude.to_degrees() + central_meridian(zone_number),
    );
    coordinate.validate()?;
    Ok(coordinate)
}

/// Hemisphere from the latitude band letter: true for northern.
///
/// Letters compare lexicographically after uppercasing, so a multi-character
/// band produced by a sloppy zone token is judged by the same rule a single
/// letter is.
fn is_northern(zone_letter: &str) -> Result<bool> {
    let letter = zone_letter.to_uppercase();
    let valid = !letter.is_empty()
        && letter.as_str() >= "C"
        && letter.as_str() <= "X"
        && letter != "I"
        && letter != "O";
    if !valid {
        return Err(ConvertError::InvalidZone(format!(
            "zone letter '{}' out of range (must be between C and X, excluding I and O)",
            zone_letter
        )));
    }
    Ok(letter.as_str() >= "N")
}

/// Rectifying latitude series: footpoint latitude from the scaled arc `mu`.
fn footpoint_latitude(mu: f64) -> f64 {
    let sqrt_e = (1.0 - E).sqrt();
    let e1 = (1.0 - sqrt_e) / (1.0 + sqrt_e);
    let e1_2 = e1 * e1;
    let e1_3 = e1_2 * e1;
    let e1_4 = e1_3 * e1;

    let p2 = 3.0 / 2.0 * e1 - 27.0 / 32.0 * e1_3;
    let p3 = 21.0 / 16.0 * e1_2 - 55.0 / 32.0 * e1_4;
    let p4 = 151.0 / 96.0 * e1_3;
    let p5 = 1097.0 / 512.0 * e1_4;

    mu + p2 * (2.0 * mu).sin() + p3 * (4.0 * mu).sin() + p4 * (6.0 * mu).sin()
        + p5 * (8.0 * mu).sin()
}

/// Central meridian of a UTM zone, degrees.
fn central_meridian(zone_number: f64) -> f64 {
    zone_number * 6.0 - 183.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_on_central_meridian() {
        let coord = to_lat_lon(500_000.0, 0.0, 31.0, "N").unwrap();
        assert!(coord.latitude.abs() < 1e-9);
        assert!((coord.longitude - 3.0).abs() < 1e-9);

        // Southern hemisphere: the false northing cancels at the equator.
        let coord = to_lat_lon(500_000.0, 10_000_000.0, 31.0, "M").unwrap();
        assert!(coord.latitude.abs() < 1e-9);
        assert!((coord.longitude - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_central_meridian_longitude_is_exact() {
        let coord = to_lat_lon(500_000.0, 4_000_000.0, 33.0, "T").unwrap();
        assert!((coord.longitude - 15.0).abs() < 1e-9);
        assert!(coord.latitude > 0.0 && coord.latitude < 90.0);
    }

    #[test]
    fn test_symmetry_about_central_meridian() {
        let east = to_lat_lon(600_000.0, 5_000_000.0, 32.0, "U").unwrap();
        let west = to_lat_lon(400_000.0, 5_000_000.0, 32.0, "U").unwrap();

        assert!((east.latitude - west.latitude).abs() < 1e-9);
        // Zone 32 central meridian is 9 degrees east.
        assert!(((east.longitude - 9.0) + (west.longitude - 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_northing_monotonic_in_latitude() {
        let low = to_lat_lon(500_000.0, 4_000_000.0, 30.0, "N").unwrap();
        let high = to_lat_lon(500_000.0, 6_000_000.0, 30.0, "N").unwrap();
        assert!(high.latitude > low.latitude);
    }

    #[test]
    fn test_hemisphere_selection() {
        let north = to_lat_lon(500_000.0, 5_278_575.64, 10.0, "T").unwrap();
        let south = to_lat_lon(500_000.0, 5_278_575.64, 10.0, "M").unwrap();
        assert!(north.latitude > 0.0);
        assert!(south.latitude < 0.0);

        // Lowercase letters are accepted.
        let lower = to_lat_lon(500_000.0, 5_278_575.64, 10.0, "t").unwrap();
        assert_eq!(lower, north);
    }

    #[test]
    fn test_plausible_values_off_meridian() {
        let coord = to_lat_lon(551_884.29, 5_278_575.64, 10.0, "M").unwrap();
        assert!(coord.latitude > -43.0 && coord.latitude < -42.0);
        assert!(coord.longitude > -123.0 && coord.longitude < -122.0);
    }

    #[test]
    fn test_easting_bounds() {
        assert!(to_lat_lon(99_999.9, 0.0, 31.0, "N").is_err());
        assert!(to_lat_lon(1_000_000.0, 0.0, 31.0, "N").is_err());
        assert!(to_lat_lon(100_000.0, 0.0, 31.0, "N").is_ok());
        assert!(to_lat_lon(999_999.9, 0.0, 31.0, "N").is_ok());
    }

    #[test]
    fn test_northing_bounds() {
        assert!(to_lat_lon(500_000.0, -0.1, 31.0, "N").is_err());
        assert!(to_lat_lon(500_000.0, 10_000_000.1, 31.0, "N").is_err());
    }

    #[test]
    fn test_zone_number_bounds() {
        assert!(to_lat_lon(500_000.0, 0.0, 0.0, "N").is_err());
        assert!(to_lat_lon(500_000.0, 0.0, 61.0, "N").is_err());
        assert!(to_lat_lon(500_000.0, 0.0, 60.0, "N").is_ok());
    }

    #[test]
    fn test_zone_letter_rejection() {
        for letter in ["A", "B", "I", "O", "Y", "Z", ""] {
            let result = to_lat_lon(500_000.0, 0.0, 31.0, letter);
            assert!(result.is_err(), "letter '{}' should be rejected", letter);
        }
    }
}
