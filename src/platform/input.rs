//! Input latch
//!
//! Hosts report key transitions as they arrive; the loop calls
//! [`InputState::apply`] once per frame to forward them to the session.

use crate::session::Session;

/// Input collected since the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Move-left key is down
    pub left_held: bool,
    /// Move-right key is down
    pub right_held: bool,
    fire_pressed: bool,
    restart_pressed: bool,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire key went down. Repeated presses within one frame still fire once.
    pub fn press_fire(&mut self) {
        self.fire_pressed = true;
    }

    /// Restart key went down
    pub fn press_restart(&mut self) {
        self.restart_pressed = true;
    }

    /// Window closed / quit key
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Net held direction; both keys down cancel out
    pub fn move_direction(&self) -> i32 {
        match (self.left_held, self.right_held) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    /// Forward this frame's input to the session and clear the single-shot latches
    pub fn apply(&mut self, session: &mut Session) {
        session.on_move_input(self.move_direction());
        if std::mem::take(&mut self.fire_pressed) {
            session.on_fire_input();
        }
        if std::mem::take(&mut self.restart_pressed) {
            session.on_restart_input();
        }
    }
}
