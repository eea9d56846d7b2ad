//! Application services

pub mod route_formatter;
pub mod route_planner;

pub use route_formatter::{
    METERS_PER_KILOMETER, MILES_PER_METER, SECONDS_PER_MINUTE, adjusted_travel_time_seconds,
    build_route_result, format_distance, format_travel_time,
};
pub use route_planner::{
    CandidatePolicy, PlannerState, PlannerStatus, RoutePlanner, RoutePlannerConfig,
};
