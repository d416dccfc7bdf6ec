//! Platform layer
//!
//! The thin seam between a host (window, terminal, test harness) and the
//! session:
//! - Input latching (held movement, single-shot fire/restart, quit)
//! - Fixed-rate frame pacing

pub mod input;
pub mod time;

pub use input::InputState;
pub use time::FrameLimiter;
