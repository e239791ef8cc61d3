//! Procedural obstacle generator
//!
//! A pair spawns at the right screen edge each time the accumulator reaches
//! the spawn interval; the upper offset is drawn uniformly from an integer
//! range and the lower offset derived from the fixed gap.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

use super::state::{GameState, PipePair};

/// Build one obstacle pair at the right edge of the screen
pub fn spawn_pair(rng: &mut Pcg32, tuning: &Tuning) -> PipePair {
    let upper_y = rng.random_range(UPPER_Y_MIN..=UPPER_Y_MAX) as f32;
    PipePair {
        x: SCREEN_W,
        upper_y,
        lower_y: upper_y + PIPE_H + tuning.pipe_gap,
        passed: false,
        destroyed: false,
    }
}

/// Advance the spawn accumulator; fire at most once per threshold crossing.
/// Resetting the accumulator to zero precludes a re-trigger next frame.
pub fn spawn_if_due(state: &mut GameState, dt: f32, tuning: &Tuning) -> bool {
    state.spawn_timer += dt;
    if state.spawn_timer < tuning.spawn_interval {
        return false;
    }
    state.spawn_timer = 0.0;
    let pair = spawn_pair(&mut state.rng, tuning);
    log::debug!("spawned pipe pair at upper_y={}", pair.upper_y);
    state.pipes.push(pair);
    true
}
