//! Coordinate-identification trainer session logic.

mod rng;
mod session;

pub use rng::{TrainerRng, TrainerRngState};
pub use session::{ClickFeedback, SessionState, TrainerSession, DEFAULT_DURATION_SECS};
