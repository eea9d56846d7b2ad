//! Transport mode and directions provider profile value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Travel style selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Travel by car
    #[default]
    Driving,
    /// Travel on foot
    Walking,
    /// Travel by bicycle
    ///
    /// Directions providers rarely offer a biking profile, so biking routes
    /// are computed as automobile routes with an inflated travel time.
    Biking,
}

/// Travel-mode category understood by the directions provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderProfile {
    /// Road network for motor vehicles
    Automobile,
    /// Pedestrian network
    Walking,
}

impl TransportMode {
    /// Provider profile used when requesting directions for this mode
    ///
    /// `Biking` deliberately maps to `Automobile`.
    #[must_use]
    pub const fn profile(self) -> ProviderProfile {
        match self {
            Self::Driving | Self::Biking => ProviderProfile::Automobile,
            Self::Walking => ProviderProfile::Walking,
        }
    }

    /// Factor applied to the provider's nominal travel time
    ///
    /// Biking is approximated as one quarter of automobile speed.
    #[must_use]
    pub const fn travel_time_multiplier(self) -> f64 {
        match self {
            Self::Driving | Self::Walking => 1.0,
            Self::Biking => 4.0,
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Biking => "biking",
        }
    }

    /// Get all transport modes
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Driving, Self::Walking, Self::Biking]
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransportMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "drive" | "car" => Ok(Self::Driving),
            "walking" | "walk" | "foot" => Ok(Self::Walking),
            "biking" | "bike" | "cycling" => Ok(Self::Biking),
            _ => Err(DomainError::InvalidInput(format!(
                "unknown transport mode '{s}', use driving, walking or biking"
            ))),
        }
    }
}

impl ProviderProfile {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Automobile => "automobile",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for ProviderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_table() {
        assert_eq!(TransportMode::Driving.profile(), ProviderProfile::Automobile);
        assert_eq!(TransportMode::Walking.profile(), ProviderProfile::Walking);
        assert_eq!(TransportMode::Biking.profile(), ProviderProfile::Automobile);
    }

    #[test]
    fn biking_routes_like_driving_but_is_slower() {
        assert_eq!(
            TransportMode::Biking.profile(),
            TransportMode::Driving.profile()
        );
        assert!(
            (TransportMode::Biking.travel_time_multiplier()
                - 4.0 * TransportMode::Driving.travel_time_multiplier())
            .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn multipliers() {
        assert!((TransportMode::Driving.travel_time_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((TransportMode::Walking.travel_time_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((TransportMode::Biking.travel_time_multiplier() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_modes() {
        assert_eq!("driving".parse::<TransportMode>().unwrap(), TransportMode::Driving);
        assert_eq!("WALK".parse::<TransportMode>().unwrap(), TransportMode::Walking);
        assert_eq!(" bike ".parse::<TransportMode>().unwrap(), TransportMode::Biking);
        assert_eq!("car".parse::<TransportMode>().unwrap(), TransportMode::Driving);
    }

    #[test]
    fn parse_unknown_mode() {
        let err = "teleport".parse::<TransportMode>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.to_string().contains("teleport"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in TransportMode::all() {
            assert_eq!(mode.to_string().parse::<TransportMode>().unwrap(), mode);
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&TransportMode::Biking).unwrap();
        assert_eq!(json, "\"biking\"");
        let profile: ProviderProfile = serde_json::from_str("\"automobile\"").unwrap();
        assert_eq!(profile, ProviderProfile::Automobile);
    }

    #[test]
    fn default_is_driving() {
        assert_eq!(TransportMode::default(), TransportMode::Driving);
    }
}
