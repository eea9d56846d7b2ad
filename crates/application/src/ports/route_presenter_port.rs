//! Route presentation port
//!
//! The sink that draws routes and shows distance/time text. All calls are
//! made from the route planner's single execution context, in order.

use domain::{RequestId, RouteResult};
#[cfg(test)]
use mockall::automock;

use crate::error::RouteError;

/// Port for the surface that displays routes
#[cfg_attr(test, automock)]
pub trait RoutePresenterPort: Send + Sync {
    /// Remove any displayed route before a new request begins
    fn clear_route(&self, request_id: RequestId);

    /// Draw a route, frame the viewport to its bounds and show its texts
    fn show_route(&self, result: RouteResult);

    /// Surface a user-visible failure for a request
    fn report_error(&self, request_id: RequestId, error: RouteError);
}
