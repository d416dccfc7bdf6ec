//! Fixed-rate simulation tick
//!
//! Advances the game one frame. The order of the phases below matters and is
//! part of the game's observable behavior.

use super::collision::first_overlapping;
use super::formation::{bounce_and_descend, generate_wave};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::ENEMY_KILL_SCORE;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held horizontal movement: -1 left, 0 none, +1 right
    pub move_dir: i32,
}

/// Advance the game state by one frame
///
/// A no-op while game over: nothing moves and the frame counter stays put.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.frame += 1;

    // 1. Player movement
    if input.move_dir != 0 {
        state.player.shift(input.move_dir, state.width);
    }

    // 2. Projectiles fly up and expire past the top edge
    for shot in &mut state.projectiles {
        shot.advance();
    }
    state.projectiles.retain(|shot| !shot.is_off_screen());

    // 3. Formation sweep, then edge check on post-move positions
    for enemy in &mut state.enemies {
        enemy.advance();
    }
    if bounce_and_descend(&mut state.enemies, state.width) {
        log::debug!("Frame {}: formation bounced", state.frame);
        events.push(GameEvent::FormationBounced);
    }

    // 4. Collisions: each shot damages at most one enemy and is consumed on any hit
    let enemies = &mut state.enemies;
    let score = &mut state.score;
    let mut destroyed = 0usize;
    state.projectiles.retain(|shot| {
        let Some(idx) = first_overlapping(&shot.rect(), enemies) else {
            return true;
        };
        if enemies[idx].take_damage() {
            enemies.remove(idx);
            *score += ENEMY_KILL_SCORE;
            destroyed += 1;
            events.push(GameEvent::EnemyDestroyed {
                points: ENEMY_KILL_SCORE,
            });
        } else {
            events.push(GameEvent::EnemyHit {
                remaining_health: enemies[idx].health,
            });
        }
        false
    });
    if destroyed > 0 {
        log::debug!(
            "Frame {}: {} destroyed, {} remaining, score {}",
            state.frame,
            destroyed,
            state.enemies.len(),
            state.score
        );
    }

    // 5. Loss: y-only threshold against the player's top edge
    let player_top = state.player.pos.y;
    if state.enemies.iter().any(|e| e.rect().bottom() > player_top) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at frame {}: score {}, level {}",
            state.frame,
            state.score,
            state.level
        );
        events.push(GameEvent::GameOver {
            score: state.score,
            level: state.level,
        });
    }

    // 6. Level clear only when combat emptied the formation this frame
    if destroyed > 0 && state.enemies.is_empty() {
        let cleared = state.level;
        state.level += 1;
        state.enemies = generate_wave(state.level, &state.layout);
        log::info!("Level {} cleared, starting level {}", cleared, state.level);
        events.push(GameEvent::LevelCleared {
            cleared,
            next: state.level,
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::{Enemy, Projectile};
    use glam::IVec2;
    use proptest::prelude::*;

    const IDLE: TickInput = TickInput { move_dir: 0 };

    fn shot_below(enemy: &Enemy) -> Projectile {
        // Lands inside the enemy after one frame of movement on both sides
        Projectile::new(IVec2::new(enemy.pos.x + 20, enemy.pos.y + enemy.size.y + 5))
    }

    #[test]
    fn test_player_clamped_at_left_edge() {
        let mut state = GameState::new(1200, 800);
        state.player.pos.x = 0;
        tick(&mut state, &TickInput { move_dir: -1 });
        assert_eq!(state.player.pos.x, 0);
    }

    #[test]
    fn test_player_moves_with_input() {
        let mut state = GameState::new(1200, 800);
        tick(&mut state, &TickInput { move_dir: 1 });
        assert_eq!(state.player.pos.x, 608);
        tick(&mut state, &TickInput { move_dir: -1 });
        tick(&mut state, &TickInput { move_dir: -1 });
        assert_eq!(state.player.pos.x, 592);
    }

    #[test]
    fn test_projectile_lifetime() {
        let mut state = GameState::new(1200, 800);
        state.enemies.clear();
        state.fire();
        let start_y = state.projectiles[0].pos.y;
        let speed = state.projectiles[0].speed;
        let expected_frames = (start_y / speed + 1) as usize;
        assert_eq!(expected_frames, 59);

        for frame in 1..expected_frames {
            tick(&mut state, &IDLE);
            assert_eq!(state.projectiles.len(), 1, "alive on frame {frame}");
            assert!(state.projectiles.iter().all(|p| p.pos.y >= 0));
        }
        tick(&mut state, &IDLE);
        assert!(state.projectiles.is_empty());
        // Emptiness not caused by combat never advances the level
        assert_eq!(state.level, 1);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_three_enemies_nine_hits_score_300() {
        let mut state = GameState::new(1200, 800);
        assert_eq!(state.enemies.len(), 36);

        for round in 0..3 {
            // Bottom row, first three columns
            let targets: Vec<Projectile> = state.enemies[27..30].iter().map(shot_below).collect();
            state.projectiles.extend(targets);
            let events = tick(&mut state, &IDLE);
            assert!(state.projectiles.is_empty());
            let hits = events
                .iter()
                .filter(|e| matches!(e, GameEvent::EnemyHit { .. }))
                .count();
            let kills = events
                .iter()
                .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
                .count();
            if round < 2 {
                assert_eq!((hits, kills), (3, 0));
            } else {
                assert_eq!((hits, kills), (0, 3));
            }
        }

        assert_eq!(state.score, 300);
        assert_eq!(state.enemies.len(), 33);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_score_independent_of_shot_order() {
        let mut forward = GameState::new(1200, 800);
        let mut reversed = forward.clone();

        for _ in 0..3 {
            let shots: Vec<Projectile> = forward.enemies[27..30].iter().map(shot_below).collect();
            forward.projectiles.extend(shots.iter().cloned());
            reversed.projectiles.extend(shots.into_iter().rev());
            tick(&mut forward, &IDLE);
            tick(&mut reversed, &IDLE);
        }

        assert_eq!(forward.score, 300);
        assert_eq!(reversed.score, forward.score);
        assert_eq!(reversed.enemies, forward.enemies);
    }

    #[test]
    fn test_projectile_removes_at_most_one_enemy() {
        let mut state = GameState::new(1200, 800);
        state.enemies = vec![
            Enemy::new(IVec2::new(500, 300), 1, 2),
            Enemy::new(IVec2::new(510, 300), 1, 2),
            Enemy::new(IVec2::new(100, 100), 1, 2),
        ];
        state.projectiles.push(Projectile::new(IVec2::new(530, 355)));

        tick(&mut state, &IDLE);

        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.score, 100);
        assert!(state.projectiles.is_empty());
        // The first enemy in collection order took the hit
        assert_eq!(state.enemies[0].pos.x, 512);
    }

    #[test]
    fn test_non_lethal_hit_consumes_projectile() {
        let mut state = GameState::new(1200, 800);
        let target = state.enemies[35].clone();
        state.projectiles.push(shot_below(&target));

        tick(&mut state, &IDLE);

        assert!(state.projectiles.is_empty());
        assert_eq!(state.enemies.len(), 36);
        assert_eq!(state.enemies[35].health, 2);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_level_clear_regenerates_in_same_tick() {
        let mut state = GameState::new(1200, 800);
        state.enemies = vec![Enemy::new(IVec2::new(600, 400), 1, 2)];
        let shot = shot_below(&state.enemies[0]);
        state.projectiles.push(shot);

        let events = tick(&mut state, &IDLE);

        assert_eq!(state.level, 2);
        assert_eq!(state.score, 100);
        assert_eq!(state.enemies.len(), 5 * 10);
        assert!(state.enemies.iter().all(|e| e.health == 4 && e.speed == 3));
        assert!(events.contains(&GameEvent::LevelCleared { cleared: 1, next: 2 }));
    }

    #[test]
    fn test_formation_bounce_in_tick() {
        let mut state = GameState::new(1200, 800);
        state.enemies = vec![
            Enemy::new(IVec2::new(1148, 100), 3, 2),
            Enemy::new(IVec2::new(1148, 170), 3, 2),
            Enemy::new(IVec2::new(300, 100), 3, 2),
        ];

        let events = tick(&mut state, &IDLE);

        assert_eq!(events, vec![GameEvent::FormationBounced]);
        assert!(state.enemies.iter().all(|e| e.direction == -1));
        assert_eq!(state.enemies[0].pos, IVec2::new(1150, 120));
        assert_eq!(state.enemies[1].pos.y, 190);
        assert_eq!(state.enemies[2].pos, IVec2::new(302, 120));

        // Next frame moves away from the edge without bouncing again
        let events = tick(&mut state, &IDLE);
        assert!(events.is_empty());
        assert_eq!(state.enemies[0].pos, IVec2::new(1148, 120));
    }

    #[test]
    fn test_game_over_is_y_only_and_monotonic() {
        let mut state = GameState::new(1200, 800);
        // Far from the player horizontally; only the bottom edge matters
        state.enemies = vec![Enemy::new(IVec2::new(10, 651), 3, 2)];
        state.fire();

        let events = tick(&mut state, &IDLE);
        assert!(state.is_game_over());
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));

        let frozen = state.clone();
        for _ in 0..10 {
            assert!(tick(&mut state, &TickInput { move_dir: 1 }).is_empty());
        }
        assert_eq!(state.frame, frozen.frame);
        assert_eq!(state.player, frozen.player);
        assert_eq!(state.enemies, frozen.enemies);
        assert_eq!(state.projectiles, frozen.projectiles);
    }

    #[test]
    fn test_enemy_bottom_at_player_top_is_not_game_over() {
        let mut state = GameState::new(1200, 800);
        state.enemies = vec![Enemy::new(IVec2::new(300, 650), 3, 2)];
        tick(&mut state, &IDLE);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_unattended_formation_eventually_ends_game() {
        let mut state = GameState::new(1200, 800);
        let mut frames = 0;
        while !state.is_game_over() {
            tick(&mut state, &IDLE);
            frames += 1;
            assert!(frames < 100_000, "formation never reached the player");
        }
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(moves in proptest::collection::vec(-1i32..=1, 0..400)) {
            let mut state = GameState::new(1200, 800);
            state.enemies.clear();
            for dir in moves {
                tick(&mut state, &TickInput { move_dir: dir });
                prop_assert!(state.player.pos.x >= 0);
                prop_assert!(state.player.pos.x <= 1200 - state.player.size.x);
            }
        }

        #[test]
        fn prop_enemy_needs_exactly_health_hits(health in 1i32..8) {
            let mut state = GameState::new(1200, 800);
            state.enemies = vec![
                Enemy::new(IVec2::new(400, 200), health, 2),
                Enemy::new(IVec2::new(100, 100), 1, 2),
            ];
            for hit in 1..=health {
                let shot = shot_below(&state.enemies[0]);
                state.projectiles.push(shot);
                tick(&mut state, &IDLE);
                if hit < health {
                    prop_assert_eq!(state.enemies.len(), 2);
                    prop_assert_eq!(state.score, 0);
                }
            }
            prop_assert_eq!(state.enemies.len(), 1);
            prop_assert_eq!(state.score, 100);
        }
    }
}
