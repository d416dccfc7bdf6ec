//! Frame pacing
//!
//! Blocks the loop so each iteration takes at least one frame budget. A slow
//! frame is not paid back later: the next frame starts a fresh budget.

use std::time::{Duration, Instant};

/// Holds a loop to a fixed frame rate
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the current frame after `elapsed` has been spent
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Sleep out the rest of the frame and start the next one.
    ///
    /// Returns how long the finished frame's work took.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        let remaining = self.remaining(elapsed);
        if remaining.is_zero() {
            log::trace!("Frame over budget by {:?}", elapsed - self.budget);
        } else {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
        elapsed
    }
}
