//! Modern Invaders entry point
//!
//! Headless host: loads settings, lets the autopilot play at the configured
//! frame rate, and builds a draw list every frame exactly as a windowed host
//! would before handing it to its backend.
//!
//! Usage: `modern-invaders [settings.json]` (logging via `RUST_LOG`)

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use modern_invaders::autopilot::Autopilot;
    use modern_invaders::platform::{FrameLimiter, InputState};
    use modern_invaders::renderer::DrawList;
    use modern_invaders::sim::GameEvent;
    use modern_invaders::{Session, Settings};

    env_logger::init();
    log::info!("Modern Invaders (headless) starting...");

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = match Settings::load_or_default(settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(&settings);
    let mut pilot = Autopilot::new(&settings.autopilot);
    let mut input = InputState::new();
    let mut limiter = FrameLimiter::new(settings.frame_budget());
    log::info!(
        "{}x{} playfield at {} fps ({:?} per frame)",
        settings.width,
        settings.height,
        settings.target_fps,
        limiter.budget()
    );

    let mut kills = 0u64;
    let mut games = 1u32;
    let mut best_score = 0u64;

    loop {
        // Input poll; quit is honoured once per frame, before any update
        pilot.drive(&session, &mut input);
        if input.quit_requested() {
            break;
        }
        let was_game_over = session.is_game_over();
        input.apply(&mut session);
        if was_game_over && !session.is_game_over() {
            games += 1;
        }

        for event in session.tick() {
            match event {
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                GameEvent::GameOver { score, .. } => best_score = best_score.max(score),
                _ => {}
            }
        }

        // Render pass reads the snapshot between ticks only
        let frame = DrawList::from_snapshot(&session.snapshot(), &settings);
        log::trace!(
            "Frame {}: {} vertices ({} bytes), {} labels",
            session.frame(),
            frame.vertices.len(),
            frame.vertex_bytes().len(),
            frame.labels.len()
        );

        limiter.wait();
    }

    best_score = best_score.max(session.score());
    log::info!(
        "Stopped after {} frames: {} games, {} enemies destroyed",
        pilot.frames_driven().saturating_sub(1),
        games,
        kills
    );
    println!(
        "best score {} | current score {} | level {} | kills {}",
        best_score,
        session.score(),
        session.level(),
        kills
    );
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm host in this crate; the library is driven by the embedding page
}
