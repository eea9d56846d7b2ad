//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A point on Earth given as latitude and longitude in degrees
///
/// Deserialization applies the same range check as [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for coordinates outside the valid range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

/// Unvalidated wire form of a [`Coordinate`]
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinates;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]. NaN is rejected as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without validation (for trusted sources)
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse the textual `"lat,lon"` form entered by a user
    ///
    /// Surrounding whitespace around either number is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` when the text does not contain two
    /// comma-separated numbers, and `DomainError::InvalidCoordinate` when the
    /// numbers are out of range.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let (lat, lon) = text
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidInput(format!("expected 'lat,lon', got '{text}'")))?;

        let latitude = parse_component(lat, "latitude")?;
        let longitude = parse_component(lon, "longitude")?;

        Self::new(latitude, longitude).map_err(|_| DomainError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another coordinate in kilometers
    ///
    /// Uses the Haversine formula.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lon / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        );
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

fn parse_component(raw: &str, name: &str) -> Result<f64, DomainError> {
    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| DomainError::InvalidInput(format!("{name} '{raw}' is not a number")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::InvalidInput(format!("{name} '{raw}' is not finite")))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Well-known points, handy as defaults and in tests
impl Coordinate {
    /// Berlin, Germany
    #[must_use]
    pub const fn berlin() -> Self {
        Self::new_unchecked(52.52, 13.405)
    }

    /// Potsdam, Germany
    #[must_use]
    pub const fn potsdam() -> Self {
        Self::new_unchecked(52.3906, 13.0645)
    }

    /// London, UK
    #[must_use]
    pub const fn london() -> Self {
        Self::new_unchecked(51.5074, -0.1278)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = Coordinate::new(52.52, 13.405).expect("valid coordinates");
        assert!((loc.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((loc.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(Coordinate::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(Coordinate::new(0.0, 181.0).is_err());
        assert!(Coordinate::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_parse_valid() {
        let loc = Coordinate::parse(" 52.52 , 13.405 ").expect("valid");
        assert_eq!(loc, Coordinate::new_unchecked(52.52, 13.405));
    }

    #[test]
    fn test_parse_missing_comma() {
        let err = Coordinate::parse("52.52 13.405").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_not_a_number() {
        let err = Coordinate::parse("abc,13.4").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.to_string().contains("latitude"));

        let err = Coordinate::parse("52.5,").unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn test_parse_infinite_rejected() {
        let err = Coordinate::parse("inf,13.4").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = Coordinate::parse("95.0,13.4").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_display() {
        let loc = Coordinate::new(52.52, 13.405).expect("valid");
        assert_eq!(loc.to_string(), "52.520000, 13.405000");
    }

    #[test]
    fn test_distance_same_location() {
        let loc = Coordinate::berlin();
        assert!(loc.distance_km(&loc).abs() < 0.001);
    }

    #[test]
    fn test_distance_berlin_london() {
        let distance = Coordinate::berlin().distance_km(&Coordinate::london());
        // Berlin to London is approximately 930km
        assert!((distance - 930.0).abs() < 50.0);
    }

    #[test]
    fn test_serialization() {
        let loc = Coordinate::new(52.52, 13.405).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("\"latitude\":52.52"));

        let deserialized: Coordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }

    #[test]
    fn test_deserialize_out_of_range_rejected() {
        let result = serde_json::from_str::<Coordinate>(r#"{"latitude":95.0,"longitude":13.4}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid coordinates"), "{err}");

        let result = serde_json::from_str::<Coordinate>(r#"{"latitude":52.5,"longitude":-181.0}"#);
        assert!(result.is_err());
    }
}
