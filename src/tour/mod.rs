//! The Knight's Tour state machine.

mod engine;
mod status;

pub use engine::{TourEngine, KNIGHT_OFFSETS};
pub use status::TourStatus;
