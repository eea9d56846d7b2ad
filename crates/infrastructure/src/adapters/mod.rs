//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod channel_presenter;
mod osrm_directions_adapter;
mod straight_line_adapter;

pub use channel_presenter::{ChannelPresenter, RouteEvent};
pub use osrm_directions_adapter::OsrmDirectionsAdapter;
pub use straight_line_adapter::StraightLineDirectionsAdapter;
