//! Idle/demo autopilot
//!
//! Plays the game through the same input latch a human would use. Steers
//! under the lowest enemy, fires at random with a seeded RNG, and restarts
//! after a pause on the game-over screen. Same seed, same run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PROJECTILE_SPEED;
use crate::platform::InputState;
use crate::session::Session;
use crate::settings::AutopilotSettings;

/// Seeded input source
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    settings: AutopilotSettings,
    frames_driven: u64,
    game_over_frames: u32,
    fired_last_frame: bool,
}

impl Autopilot {
    /// Out-of-range `fire_chance` values are clamped into `0.0..=1.0` (NaN never fires)
    pub fn new(settings: &AutopilotSettings) -> Self {
        let mut settings = settings.clone();
        if settings.fire_chance.is_nan() {
            settings.fire_chance = 0.0;
        }
        settings.fire_chance = settings.fire_chance.clamp(0.0, 1.0);
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            frames_driven: 0,
            game_over_frames: 0,
            fired_last_frame: false,
        }
    }

    pub fn frames_driven(&self) -> u64 {
        self.frames_driven
    }

    /// Decide this frame's input from the current session state
    pub fn drive(&mut self, session: &Session, input: &mut InputState) {
        self.frames_driven += 1;
        if self
            .settings
            .max_frames
            .is_some_and(|max| self.frames_driven > max)
        {
            log::info!("Autopilot frame budget spent, quitting");
            input.request_quit();
            return;
        }

        if session.is_game_over() {
            input.left_held = false;
            input.right_held = false;
            self.game_over_frames += 1;
            if self.game_over_frames >= self.settings.restart_delay_frames {
                log::info!("Autopilot restarting (final score {})", session.score());
                input.press_restart();
                self.game_over_frames = 0;
            }
            return;
        }
        self.game_over_frames = 0;

        let direction = Self::steer(session);
        input.left_held = direction < 0;
        input.right_held = direction > 0;

        // Release the trigger between shots so every shot is a fresh press
        if self.fired_last_frame {
            self.fired_last_frame = false;
        } else if self.rng.random_bool(self.settings.fire_chance) {
            input.press_fire();
            self.fired_last_frame = true;
        }
    }

    /// Direction that brings the player's center under the lowest enemy,
    /// leading it by the distance it covers while a shot is in flight
    fn steer(session: &Session) -> i32 {
        let player = session.player();
        let Some(target) = session
            .enemies()
            .iter()
            .max_by_key(|e| (e.pos.y, -e.pos.x))
        else {
            return 0;
        };
        let flight_frames = (player.pos.y - target.rect().bottom()).max(0) / PROJECTILE_SPEED;
        let lead = target.speed * target.direction * flight_frames;
        let target_x = target.pos.x + target.size.x / 2 + lead;
        let player_x = player.pos.x + player.size.x / 2;
        let offset = target_x - player_x;
        if offset.abs() <= player.speed {
            0
        } else {
            offset.signum()
        }
    }
}
