//! Parsing of formatted UTM coordinate strings.
//!
//! The expected format is `"10M 551884.29mE 5278575.64mN"`: a zone token
//! (two-digit zone number followed by the latitude band letter), then the
//! easting and northing values, each carrying a two-character unit+axis
//! suffix that is stripped without inspection.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ConvertError, Result};
use crate::models::{LatLon, UtmCoordinate};
use crate::projection;

/// Order of the two value fields in a UTM string.
///
/// `EastingFirst` is the `mE mN` convention; `NorthingFirst` handles sources
/// that emit `mN` before `mE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldOrder {
    #[default]
    EastingFirst,
    NorthingFirst,
}

/// Decompose a UTM coordinate string into its zone and value fields.
///
/// The zone number is always read from the first two characters of the zone
/// token and the band letter from whatever follows, so a zone numeral longer
/// than two digits is truncated and its tail lands in the letter (where the
/// projection step rejects it). Real UTM zones stop at 60, so two digits
/// cover the grid.
pub fn parse_utm_string(text: &str, order: FieldOrder) -> Result<UtmCoordinate> {
    let tokens: Vec<&str> = text.trim().split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ConvertError::InvalidFormat(format!(
            "'{}' does not split into zone, easting, and northing fields \
             (expected format: '10M 551884.29mE 5278575.64mN')",
            text.trim()
        )));
    }

    let (zone_digits, zone_letter) = split_zone_token(tokens[0]);
    let zone_number = zone_digits.parse::<f64>().map_err(|_| {
        ConvertError::InvalidFormat(format!("invalid zone number: '{}'", zone_digits))
    })?;

    let (easting_token, northing_token) = match order {
        FieldOrder::EastingFirst => (tokens[1], tokens[2]),
        FieldOrder::NorthingFirst => (tokens[2], tokens[1]),
    };
    let easting = parse_value(easting_token, "easting")?;
    let northing = parse_value(northing_token, "northing")?;

    Ok(UtmCoordinate {
        zone_number,
        zone_letter: zone_letter.to_string(),
        easting,
        northing,
    })
}

/// Parse a UTM coordinate string into a decimal-degree latitude/longitude.
///
/// # Examples
/// ```
/// use utm2dd::{parse, FieldOrder};
///
/// let coord = parse("31N 500000.00mE 0.00mN", FieldOrder::EastingFirst).unwrap();
/// assert!(coord.latitude.abs() < 1e-9);
/// assert!((coord.longitude - 3.0).abs() < 1e-9);
/// ```
pub fn parse(text: &str, order: FieldOrder) -> Result<LatLon> {
    let coordinate = parse_utm_string(text, order)?;
    trace!(
        zone = coordinate.zone_number,
        letter = %coordinate.zone_letter,
        easting = coordinate.easting,
        northing = coordinate.northing,
        "parsed UTM string"
    );
    projection::to_lat_lon(
        coordinate.easting,
        coordinate.northing,
        coordinate.zone_number,
        &coordinate.zone_letter,
    )
}

/// Split the zone token after its second character. Tokens shorter than
/// three characters keep everything in the digit part and get an empty
/// letter.
fn split_zone_token(token: &str) -> (&str, &str) {
    match token.char_indices().nth(2) {
        Some((index, _)) => token.split_at(index),
        None => (token, ""),
    }
}

/// Numeric value of an easting/northing token: drop the two-character
/// unit+axis suffix and parse the rest as a decimal.
fn parse_value(token: &str, field: &str) -> Result<f64> {
    let cut = token.char_indices().rev().nth(1).map(|(i, _)| i).unwrap_or(0);
    let numeral = &token[..cut];
    numeral.parse::<f64>().map_err(|_| {
        ConvertError::InvalidFormat(format!("invalid {} value: '{}'", field, token))
    })
}
