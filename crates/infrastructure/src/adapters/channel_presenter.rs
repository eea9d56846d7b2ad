//! Channel presenter - Implements RoutePresenterPort by forwarding typed events

use application::error::RouteError;
use application::ports::RoutePresenterPort;
use domain::{RequestId, RouteResult};
use tokio::sync::mpsc;
use tracing::debug;

/// Presentation event emitted by the route planner
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    /// The drawn route should be removed; a new request has started
    Cleared(RequestId),
    /// A route is ready to be shown
    Shown(RouteResult),
    /// The request ended without a route
    Failed(RequestId, RouteError),
}

impl RouteEvent {
    /// Request the event belongs to
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::Cleared(id) | Self::Failed(id, _) => *id,
            Self::Shown(result) => result.request_id(),
        }
    }
}

/// Presenter that forwards every call as a [`RouteEvent`] into a channel
///
/// Events are dropped silently once the receiving side is gone.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    events: mpsc::UnboundedSender<RouteEvent>,
}

impl ChannelPresenter {
    /// Create a presenter and the receiver for its events
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RouteEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (Self { events }, receiver)
    }

    fn emit(&self, event: RouteEvent) {
        if let Err(e) = self.events.send(event) {
            debug!(request_id = %e.0.request_id(), "No listener for route event");
        }
    }
}

impl RoutePresenterPort for ChannelPresenter {
    fn clear_route(&self, request_id: RequestId) {
        self.emit(RouteEvent::Cleared(request_id));
    }

    fn show_route(&self, result: RouteResult) {
        self.emit(RouteEvent::Shown(result));
    }

    fn report_error(&self, request_id: RequestId, error: RouteError) {
        self.emit(RouteEvent::Failed(request_id, error));
    }
}

#[cfg(test)]
mod tests {
    use domain::{Coordinate, TransportMode};

    use super::*;

    fn result(id: u64) -> RouteResult {
        RouteResult::new(
            RequestId::new(id),
            vec![Coordinate::berlin(), Coordinate::potsdam()],
            "1.00 miles (1.61 km)".to_string(),
            "2.00 minutes".to_string(),
            TransportMode::Driving,
            1609.34,
            120.0,
        )
    }

    #[test]
    fn forwards_events_in_call_order() {
        let (presenter, mut events) = ChannelPresenter::new();

        presenter.clear_route(RequestId::new(1));
        presenter.show_route(result(1));
        presenter.report_error(RequestId::new(2), RouteError::NoRouteFound);

        assert_eq!(events.try_recv().unwrap(), RouteEvent::Cleared(RequestId::new(1)));
        assert_eq!(events.try_recv().unwrap(), RouteEvent::Shown(result(1)));
        assert_eq!(
            events.try_recv().unwrap(),
            RouteEvent::Failed(RequestId::new(2), RouteError::NoRouteFound)
        );
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn event_request_id() {
        assert_eq!(RouteEvent::Shown(result(7)).request_id(), RequestId::new(7));
        assert_eq!(
            RouteEvent::Failed(RequestId::new(3), RouteError::NoRouteFound).request_id(),
            RequestId::new(3)
        );
    }

    #[test]
    fn dropped_receiver_is_tolerated() {
        let (presenter, events) = ChannelPresenter::new();
        drop(events);
        presenter.clear_route(RequestId::new(1));
        presenter.show_route(result(1));
    }
}
