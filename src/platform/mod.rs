//! Platform abstraction layer
//!
//! The simulation never touches devices or the system clock directly. These
//! traits are the seams the game loop talks through:
//! - Time/pacing
//! - Input (held movement keys, confirm, quit)

pub mod input;
pub mod time;

pub use input::{AutopilotInput, InputFrame, InputSource};
pub use time::{ClockSource, SimulatedClock, SystemClock};
