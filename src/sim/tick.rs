//! Per-frame simulation update
//!
//! Variable timestep driven by the frame loop. The update order matters:
//! flap impulse is scaled by the frame's delta time, and position
//! integrates before this frame's gravity increment is added. The feel is
//! tuned around a 60 Hz frame loop.

use crate::audio::SoundCue;
use crate::consts::*;
use crate::input::FrameInput;
use crate::tuning::Tuning;

use super::collision::player_collides;
use super::spawn::spawn_if_due;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32, tuning: &Tuning) {
    // Pause toggle, independent of the Playing/GameOver axis
    if input.pause {
        match state.phase {
            GamePhase::PreStart | GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.push_cue(SoundCue::PauseToggle);
                return;
            }
            GamePhase::Paused => {
                // Resume into whichever phase the pre-start timer implies
                state.phase = if state.prestart_timer > tuning.prestart_delay {
                    GamePhase::Playing
                } else {
                    GamePhase::PreStart
                };
                state.push_cue(SoundCue::PauseToggle);
            }
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return,
        GamePhase::GameOver => {
            if input.action {
                log::info!("restart confirmed, final score {}", state.score);
                state.reset();
            }
            return;
        }
        _ => {}
    }

    // Ready beat: everything scrolls but the player stays frozen
    state.prestart_timer += dt;
    if state.phase == GamePhase::PreStart && state.prestart_timer > tuning.prestart_delay {
        state.phase = GamePhase::Playing;
    }
    let active = state.phase == GamePhase::Playing;

    if active {
        if input.action {
            // Impulse scaled by this frame's dt; the feel depends on it
            state.player.vel = -tuning.flap_impulse * dt;
            state.player.rotation = FLAP_TILT_DEG;
            state.player.anim_timer = 0.0;
            state.push_cue(SoundCue::Flap);
        } else {
            state.player.rotation = (state.player.rotation + TILT_RATE_DEG * dt).min(DIVE_TILT_DEG);
        }

        // Position first, then this frame's gravity increment
        state.player.pos.y += state.player.vel * dt;
        state.player.vel += tuning.gravity * dt;
    }
    state.player.anim_timer += dt;

    // Scroll pipes and the ground conveyor
    for pair in &mut state.pipes {
        if !pair.destroyed {
            pair.x -= tuning.scroll_speed * dt;
        }
    }
    for tile in &mut state.ground {
        tile.x -= tuning.scroll_speed * dt;
        if tile.x + GROUND_TILE_W < 0.0 {
            // Back of the ring: three tile-widths right of origin
            tile.x = GROUND_TILE_W * (GROUND_TILE_COUNT - 1) as f32;
        }
    }

    spawn_if_due(state, dt, tuning);

    if active {
        // One-time scoring when a pair falls behind the player. The vertical
        // check is against the upper member only, at most one point per pair.
        let player_x = state.player.pos.x;
        let player_y = state.player.pos.y;
        let mut scored = false;
        for pair in &mut state.pipes {
            if !pair.passed && pair.x < player_x {
                pair.passed = true;
                if pair.upper_y < player_y {
                    state.score += 1;
                    scored = true;
                }
            }
        }
        if scored {
            state.push_cue(SoundCue::Score);
            let score = state.score;
            state.events.push(GameEvent::Scored { score });
        }

        // Mark fully off-screen pairs destroyed, then compact the same pass
        for pair in &mut state.pipes {
            if pair.right() < 0.0 {
                pair.destroyed = true;
            }
        }
        state.pipes.retain(|p| !p.destroyed);

        // Collision ends the run; the early return above keeps the die cue
        // from re-firing while the overlap persists
        if player_collides(&state.player, &state.pipes) {
            state.phase = GamePhase::GameOver;
            state.push_cue(SoundCue::Die);
            let score = state.score;
            state.events.push(GameEvent::GameOver { score });
            log::info!("game over at score {score}");
        }
    }

    debug_assert!(
        state
            .pipes
            .iter()
            .all(|p| (p.lower_y - p.upper_y - PIPE_H - tuning.pipe_gap).abs() < 0.001),
        "pipe pair gap desync"
    );
}
