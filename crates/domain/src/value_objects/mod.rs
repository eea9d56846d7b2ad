//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod coordinate;
mod request_id;
mod transport_mode;

pub use bounding_box::BoundingBox;
pub use coordinate::{Coordinate, InvalidCoordinates};
pub use request_id::RequestId;
pub use transport_mode::{ProviderProfile, TransportMode};
