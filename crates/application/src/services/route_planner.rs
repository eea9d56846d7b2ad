//! Route planning coordinator
//!
//! Turns route requests into asynchronous directions-provider calls and
//! publishes the post-processed results to a presentation sink.
//!
//! # Execution model
//!
//! All coordinator state lives in one tokio task (the planner task) that
//! drains a bounded mailbox. [`RoutePlanner`] handles only send messages into
//! that mailbox. Provider calls run on their own spawned tasks and hand their
//! outcome back through the mailbox, so the outstanding request id and every
//! presenter call are only ever touched from the planner task.
//!
//! # Supersession
//!
//! Every submission gets a fresh, strictly increasing [`RequestId`] and
//! becomes the outstanding request. A provider response is published only if
//! its id still matches the outstanding id when it is processed; anything else
//! is dropped without notifying the user, whatever the arrival order.

use std::sync::Arc;

use domain::{Coordinate, RequestId, RouteCandidate, RouteRequest, TransportMode};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::error::{ApplicationError, RouteError};
use crate::ports::{DirectionsPort, RoutePresenterPort};
use crate::services::route_formatter::build_route_result;

/// Default number of queued messages before submitters wait
const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// Which provider candidates of an accepted response are published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePolicy {
    /// Publish every returned candidate, in provider rank order
    #[default]
    All,
    /// Publish only the top-ranked candidate
    FirstOnly,
}

/// Configuration for the route planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlannerConfig {
    /// Mailbox capacity of the planner task
    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,

    /// Candidate publication policy
    #[serde(default)]
    pub candidate_policy: CandidatePolicy,

    /// Abort the in-flight provider call when a newer request supersedes it
    #[serde(default = "default_cancel_superseded")]
    pub cancel_superseded: bool,
}

const fn default_mailbox_capacity() -> usize {
    DEFAULT_MAILBOX_CAPACITY
}

const fn default_cancel_superseded() -> bool {
    true
}

impl Default for RoutePlannerConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: default_mailbox_capacity(),
            candidate_policy: CandidatePolicy::default(),
            cancel_superseded: default_cancel_superseded(),
        }
    }
}

impl RoutePlannerConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.mailbox_capacity == 0 {
            return Err("mailbox_capacity must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "request_id")]
pub enum PlannerState {
    /// No request is outstanding
    Idle,
    /// Waiting for the provider's answer to this request
    Requesting(RequestId),
}

impl std::fmt::Display for PlannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Requesting(id) => write!(f, "requesting {id}"),
        }
    }
}

/// Snapshot of the coordinator for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerStatus {
    /// Current state
    pub state: PlannerState,
    /// Most recently issued request id (`#0` before the first submission)
    pub last_issued: RequestId,
    /// Number of route results shown
    pub published: u64,
    /// Number of requests that ended in a reported error
    pub failed: u64,
    /// Number of stale provider responses dropped
    pub discarded: u64,
}

/// Messages handled by the planner task
enum PlannerMessage {
    Submit {
        source: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
        respond_to: oneshot::Sender<RequestId>,
    },
    ProviderResponse {
        request_id: RequestId,
        outcome: Result<Vec<RouteCandidate>, ApplicationError>,
    },
    Status {
        respond_to: oneshot::Sender<PlannerStatus>,
    },
}

/// Handle to a running route planner
///
/// Cloning is cheap; all clones talk to the same planner task. The task stops
/// once every handle has been dropped.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    sender: mpsc::Sender<PlannerMessage>,
}

impl std::fmt::Debug for PlannerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submit { mode, .. } => f.debug_struct("Submit").field("mode", mode).finish(),
            Self::ProviderResponse { request_id, .. } => f
                .debug_struct("ProviderResponse")
                .field("request_id", request_id)
                .finish(),
            Self::Status { .. } => f.write_str("Status"),
        }
    }
}

impl RoutePlanner {
    /// Start the planner task on the current tokio runtime
    pub fn spawn(
        directions: Arc<dyn DirectionsPort>,
        presenter: Arc<dyn RoutePresenterPort>,
        config: RoutePlannerConfig,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity.max(1));

        let worker = PlannerWorker {
            coordinator: RouteCoordinator::new(presenter, config.candidate_policy),
            directions,
            mailbox: sender.downgrade(),
            cancel_superseded: config.cancel_superseded,
            in_flight: None,
        };
        tokio::spawn(worker.run(receiver));

        info!(
            policy = ?config.candidate_policy,
            cancel_superseded = config.cancel_superseded,
            "Route planner started"
        );
        Self { sender }
    }

    /// Submit a new route request
    ///
    /// Supersedes any outstanding request. Returns the id assigned to the new
    /// request as soon as the planner has recorded it; the route itself is
    /// delivered to the presenter later.
    pub async fn submit_route(
        &self,
        source: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<RequestId, ApplicationError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PlannerMessage::Submit {
                source,
                destination,
                mode,
                respond_to,
            })
            .await
            .map_err(|_| ApplicationError::PlannerUnavailable)?;
        response
            .await
            .map_err(|_| ApplicationError::PlannerUnavailable)
    }

    /// Get a snapshot of the planner state
    pub async fn status(&self) -> Result<PlannerStatus, ApplicationError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PlannerMessage::Status { respond_to })
            .await
            .map_err(|_| ApplicationError::PlannerUnavailable)?;
        response
            .await
            .map_err(|_| ApplicationError::PlannerUnavailable)
    }
}

/// The planner task: owns the coordinator and the in-flight provider call
struct PlannerWorker {
    coordinator: RouteCoordinator,
    directions: Arc<dyn DirectionsPort>,
    mailbox: mpsc::WeakSender<PlannerMessage>,
    cancel_superseded: bool,
    in_flight: Option<JoinHandle<()>>,
}

impl PlannerWorker {
    async fn run(mut self, mut receiver: mpsc::Receiver<PlannerMessage>) {
        while let Some(message) = receiver.recv().await {
            self.handle(message);
        }

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        debug!("Route planner stopped");
    }

    fn handle(&mut self, message: PlannerMessage) {
        match message {
            PlannerMessage::Submit {
                source,
                destination,
                mode,
                respond_to,
            } => {
                let request = self.coordinator.submit(source, destination, mode);

                let handle = self.dispatch(request);
                let previous = self.in_flight.replace(handle);
                if let Some(previous) = previous.filter(|_| self.cancel_superseded) {
                    previous.abort();
                }

                if respond_to.send(request.id()).is_err() {
                    debug!(request_id = %request.id(), "Submitter went away before receiving id");
                }
            },
            PlannerMessage::ProviderResponse {
                request_id,
                outcome,
            } => {
                self.coordinator.on_provider_response(request_id, outcome);
                if self.coordinator.state == PlannerState::Idle {
                    self.in_flight = None;
                }
            },
            PlannerMessage::Status { respond_to } => {
                if respond_to.send(self.coordinator.status()).is_err() {
                    debug!("Status requester went away");
                }
            },
        }
    }

    /// Call the provider on its own task and route the outcome back here
    ///
    /// The provider runs on an inner task so that a panicking adapter still
    /// produces an outcome. Aborting the returned handle aborts both tasks.
    fn dispatch(&self, request: RouteRequest) -> JoinHandle<()> {
        let directions = Arc::clone(&self.directions);
        let mailbox = self.mailbox.clone();
        let span = info_span!(
            "directions",
            request_id = %request.id(),
            profile = %request.profile()
        );

        tokio::spawn(
            async move {
                let mut call = AbortOnDrop(tokio::spawn(
                    async move {
                        directions
                            .compute_route(
                                request.source(),
                                request.destination(),
                                request.profile(),
                            )
                            .await
                    }
                    .in_current_span(),
                ));

                let outcome = match (&mut call.0).await {
                    Ok(outcome) => outcome,
                    Err(e) if e.is_panic() => {
                        warn!("Directions provider panicked");
                        Err(ApplicationError::Internal(
                            "directions provider panicked".to_string(),
                        ))
                    },
                    Err(e) => {
                        debug!(error = %e, "Directions call cancelled");
                        return;
                    },
                };

                let Some(mailbox) = mailbox.upgrade() else {
                    debug!("Planner stopped, dropping provider response");
                    return;
                };
                let message = PlannerMessage::ProviderResponse {
                    request_id: request.id(),
                    outcome,
                };
                if mailbox.send(message).await.is_err() {
                    debug!("Planner stopped, dropping provider response");
                }
            }
            .instrument(span),
        )
    }
}

/// Aborts the wrapped task when dropped
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Coordinator state machine, driven only from the planner task
struct RouteCoordinator {
    presenter: Arc<dyn RoutePresenterPort>,
    policy: CandidatePolicy,
    state: PlannerState,
    outstanding: Option<RouteRequest>,
    last_issued: RequestId,
    published: u64,
    failed: u64,
    discarded: u64,
}

impl RouteCoordinator {
    fn new(presenter: Arc<dyn RoutePresenterPort>, policy: CandidatePolicy) -> Self {
        Self {
            presenter,
            policy,
            state: PlannerState::Idle,
            outstanding: None,
            last_issued: RequestId::ZERO,
            published: 0,
            failed: 0,
            discarded: 0,
        }
    }

    /// Issue a new request, make it outstanding and clear the drawn route
    fn submit(
        &mut self,
        source: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> RouteRequest {
        let id = self.last_issued.next();
        self.last_issued = id;

        if let PlannerState::Requesting(previous) = self.state {
            debug!(superseded = %previous, by = %id, "Outstanding request superseded");
        }

        let request = RouteRequest::new(id, source, destination, mode);
        self.state = PlannerState::Requesting(id);
        self.outstanding = Some(request);

        info!(request_id = %id, %source, %destination, %mode, "Route requested");
        self.presenter.clear_route(id);
        request
    }

    /// The outstanding request if `request_id` still is the latest one
    fn accept(&self, request_id: RequestId) -> Result<RouteRequest, RouteError> {
        match self.outstanding {
            Some(request) if request.id() == request_id => Ok(request),
            _ => Err(RouteError::Superseded(request_id)),
        }
    }

    fn on_provider_response(
        &mut self,
        request_id: RequestId,
        outcome: Result<Vec<RouteCandidate>, ApplicationError>,
    ) {
        let request = match self.accept(request_id) {
            Ok(request) => request,
            Err(reason) => {
                self.discarded += 1;
                debug!(%request_id, %reason, "Discarding stale provider response");
                return;
            },
        };

        self.state = PlannerState::Idle;
        self.outstanding = None;

        let candidates = match outcome {
            Ok(candidates) if candidates.is_empty() => {
                self.fail(request_id, RouteError::NoRouteFound);
                return;
            },
            Ok(candidates) => candidates,
            Err(err) => {
                self.fail(request_id, RouteError::ProviderFailure(provider_message(err)));
                return;
            },
        };

        let take = match self.policy {
            CandidatePolicy::All => candidates.len(),
            CandidatePolicy::FirstOnly => 1,
        };

        for candidate in candidates.into_iter().take(take) {
            let result = build_route_result(&request, candidate);
            info!(
                %request_id,
                distance = %result.distance_text(),
                travel_time = %result.travel_time_text(),
                "Route ready"
            );
            self.presenter.show_route(result);
            self.published += 1;
        }
    }

    fn fail(&mut self, request_id: RequestId, error: RouteError) {
        warn!(%request_id, %error, "Route request failed");
        self.failed += 1;
        self.presenter.report_error(request_id, error);
    }

    fn status(&self) -> PlannerStatus {
        PlannerStatus {
            state: self.state,
            last_issued: self.last_issued,
            published: self.published,
            failed: self.failed,
            discarded: self.discarded,
        }
    }
}

/// Diagnostic text of a provider error, without the application-layer prefix
fn provider_message(err: ApplicationError) -> String {
    match err {
        ApplicationError::ExternalService(message) => message,
        other => other.to_string(),
    }
}
