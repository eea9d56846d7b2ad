//! Unit conversion and text formatting for route results
//!
//! Turns a provider's metric distance and nominal travel time into the
//! display texts of a [`RouteResult`], applying the transport-mode time
//! correction on the way.

use domain::{RouteCandidate, RouteRequest, RouteResult, TransportMode};

/// Miles in one meter
pub const MILES_PER_METER: f64 = 0.000_621_371;

/// Meters in one kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Format a distance as `"<miles> miles (<km> km)"` with two decimals each
#[must_use]
pub fn format_distance(distance_meters: f64) -> String {
    let miles = distance_meters * MILES_PER_METER;
    let kilometers = distance_meters / METERS_PER_KILOMETER;
    format!("{miles:.2} miles ({kilometers:.2} km)")
}

/// Format a duration in seconds as `"<minutes> minutes"` with two decimals
#[must_use]
pub fn format_travel_time(seconds: f64) -> String {
    format!("{:.2} minutes", seconds / SECONDS_PER_MINUTE)
}

/// Travel time corrected for the requested mode
///
/// The multiplier comes from the mode the user asked for, never from the
/// provider profile the route was computed with.
#[must_use]
pub fn adjusted_travel_time_seconds(nominal_seconds: f64, mode: TransportMode) -> f64 {
    nominal_seconds * mode.travel_time_multiplier()
}

/// Build the displayable result for one candidate of a request
#[must_use]
pub fn build_route_result(request: &RouteRequest, candidate: RouteCandidate) -> RouteResult {
    let travel_time_seconds =
        adjusted_travel_time_seconds(candidate.nominal_travel_time_seconds, request.mode());

    RouteResult::new(
        request.id(),
        candidate.polyline,
        format_distance(candidate.distance_meters),
        format_travel_time(travel_time_seconds),
        request.mode(),
        candidate.distance_meters,
        travel_time_seconds,
    )
}
