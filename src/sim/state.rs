//! Game state and core simulation types
//!
//! Everything the per-frame update mutates lives here, owned by a single
//! `GameState` - no ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Rect;
use crate::audio::SoundCue;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ready beat after (re)start; everything scrolls but the player is frozen
    PreStart,
    /// Active gameplay
    Playing,
    /// Simulation suspended, render keeps showing the frozen frame
    Paused,
    /// Run ended on a collision
    GameOver,
}

/// Simulation outputs with effects outside the sim (drained by the session)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Fire-and-forget sound cue
    Cue(SoundCue),
    /// Score incremented (carries the new total for the HUD)
    Scored { score: u32 },
    /// Run ended; the session compares against the stored high score
    GameOver { score: u32 },
    /// Full restart confirmed from game over
    Reset,
}

/// The player sprite
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Position of the top-left corner; `pos.x` never changes
    pub pos: Vec2,
    /// Vertical velocity / gravity accumulator
    pub vel: f32,
    /// Sprite tilt in degrees (negative = nose up)
    pub rotation: f32,
    /// Drives the wing-flap frame cycle; restarted on flap
    pub anim_timer: f32,
}

impl Player {
    /// Player at the vertical screen center, at rest
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, SCREEN_H / 2.0 - PLAYER_H / 2.0),
            vel: 0.0,
            rotation: 0.0,
            anim_timer: 0.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_W, PLAYER_H)
    }

    /// Current wing frame index
    pub fn frame(&self) -> u8 {
        ((self.anim_timer / FRAME_SECS) as u32 % PLAYER_FRAMES as u32) as u8
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// An obstacle pair: upper and lower pipe sharing one horizontal position
///
/// Sharing `x` structurally enforces that both members move by identical
/// deltas; the lower offset is derived once at spawn from the fixed gap.
#[derive(Debug, Clone, Copy)]
pub struct PipePair {
    /// Left edge, shared by both members
    pub x: f32,
    /// Top edge of the upper pipe (randomized per spawn, usually negative)
    pub upper_y: f32,
    /// Top edge of the lower pipe: `upper_y + PIPE_H + gap`
    pub lower_y: f32,
    /// Set the first time the player's x passes this pair (one-time scoring)
    pub passed: bool,
    /// Set once fully off-screen; compacted out the same pass
    pub destroyed: bool,
}

impl PipePair {
    pub fn upper_bounds(&self) -> Rect {
        Rect::new(self.x, self.upper_y, PIPE_W, PIPE_H)
    }

    pub fn lower_bounds(&self) -> Rect {
        Rect::new(self.x, self.lower_y, PIPE_W, PIPE_H)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_W
    }
}

/// One tile of the looping ground conveyor; recycled, never destroyed
#[derive(Debug, Clone, Copy)]
pub struct GroundTile {
    pub x: f32,
}

impl GroundTile {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, GROUND_Y, GROUND_TILE_W, GROUND_H)
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Seconds since (re)start; player physics activates past the threshold
    pub prestart_timer: f32,
    /// Seconds accumulated toward the next obstacle spawn
    pub spawn_timer: f32,
    pub score: u32,
    /// Stored best, kept current by the session for the HUD
    pub high_score: u32,
    pub player: Player,
    pub pipes: Vec<PipePair>,
    pub ground: [GroundTile; GROUND_TILE_COUNT],
    pub rng: Pcg32,
    /// Side effects awaiting the session; drained every frame
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::PreStart,
            prestart_timer: 0.0,
            spawn_timer: 0.0,
            score: 0,
            high_score: 0,
            player: Player::new(),
            pipes: Vec::new(),
            ground: std::array::from_fn(|i| GroundTile {
                x: i as f32 * GROUND_TILE_W,
            }),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Full restart: score zeroed, player re-centered, obstacles cleared.
    /// The RNG keeps running and `high_score` is left for the session.
    pub fn reset(&mut self) {
        self.phase = GamePhase::PreStart;
        self.prestart_timer = 0.0;
        self.spawn_timer = 0.0;
        self.score = 0;
        self.player = Player::new();
        self.pipes.clear();
        self.ground = std::array::from_fn(|i| GroundTile {
            x: i as f32 * GROUND_TILE_W,
        });
        self.events.push(GameEvent::Reset);
        self.events.push(GameEvent::Cue(SoundCue::Swoosh));
    }

    pub fn push_cue(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Cue(cue));
    }

    /// Hand the accumulated events to the session
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_ready() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::PreStart);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.ground.len(), GROUND_TILE_COUNT);
        // Conveyor covers the screen with overlap
        let spread = GROUND_TILE_COUNT as f32 * GROUND_TILE_W;
        assert!(spread >= SCREEN_W);
    }

    #[test]
    fn player_starts_at_vertical_center() {
        let player = Player::new();
        let center = player.pos.y + PLAYER_H / 2.0;
        assert!((center - SCREEN_H / 2.0).abs() < 0.001);
        assert_eq!(player.vel, 0.0);
    }

    #[test]
    fn reset_clears_run_state() {
        let mut state = GameState::new(7);
        state.score = 12;
        state.phase = GamePhase::GameOver;
        state.player.pos.y = 250.0;
        state.pipes.push(PipePair {
            x: 100.0,
            upper_y: -50.0,
            lower_y: 190.0,
            passed: true,
            destroyed: false,
        });

        state.reset();

        assert_eq!(state.phase, GamePhase::PreStart);
        assert_eq!(state.score, 0);
        assert!(state.pipes.is_empty());
        let center = state.player.pos.y + PLAYER_H / 2.0;
        assert!((center - SCREEN_H / 2.0).abs() < 0.001);
        assert!(state.events.contains(&GameEvent::Reset));
    }

    #[test]
    fn wing_frame_cycles() {
        let mut player = Player::new();
        assert_eq!(player.frame(), 0);
        player.anim_timer = FRAME_SECS * 1.5;
        assert_eq!(player.frame(), 1);
        player.anim_timer = FRAME_SECS * PLAYER_FRAMES as f32;
        assert_eq!(player.frame(), 0);
    }
}
