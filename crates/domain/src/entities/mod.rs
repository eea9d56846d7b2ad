//! Entities - Route requests and the results derived from them

mod route_candidate;
mod route_request;
mod route_result;

pub use route_candidate::RouteCandidate;
pub use route_request::RouteRequest;
pub use route_result::RouteResult;
