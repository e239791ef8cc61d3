//! Gapwing - a Flappy-Bird style side-scroller for handheld screens
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `render`: Draw-command composer (consumes state, produces rects + angles)
//! - `audio`: Fire-and-forget sound cue boundary
//! - `input`: Normalized input-event stream
//! - `highscore`: Single-integer high score persistence
//! - `session`: Game-session context wiring sim, cues and persistence together
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod audio;
pub mod highscore;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::GameSession;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical screen size (PSP-class handheld, landscape)
    pub const SCREEN_W: f32 = 480.0;
    pub const SCREEN_H: f32 = 272.0;

    /// Player sprite size
    pub const PLAYER_W: f32 = 38.0;
    pub const PLAYER_H: f32 = 34.0;
    /// Fixed horizontal position of the player's left edge
    pub const PLAYER_X: f32 = SCREEN_W / 2.0 - PLAYER_W / 2.0;

    /// Leftward scroll speed for ground and pipes (units/sec)
    pub const SCROLL_SPEED: f32 = 150.0;
    /// Seconds between obstacle pair spawns
    pub const SPAWN_INTERVAL: f32 = 2.0;
    /// Seconds the player stays frozen after (re)start
    pub const PRESTART_DELAY: f32 = 1.0;

    /// Pipe sprite size and pair gap
    pub const PIPE_W: f32 = 64.0;
    pub const PIPE_H: f32 = 160.0;
    pub const PIPE_GAP: f32 = 80.0;
    /// Randomized range for the upper pipe's top edge (inclusive)
    pub const UPPER_Y_MIN: i32 = -130;
    pub const UPPER_Y_MAX: i32 = -20;

    /// Gravity accumulation (units/sec^2)
    pub const GRAVITY: f32 = 500.0;
    /// Flap impulse magnitude; the applied velocity is `-FLAP_IMPULSE * dt`,
    /// so the jump height is coupled to the frame rate on purpose
    pub const FLAP_IMPULSE: f32 = 18_000.0;

    /// Ground conveyor: a ring of tiles recycled off the left edge.
    /// A recycled tile sits one full tile width off-screen, so the other
    /// three must span the screen: `3 * GROUND_TILE_W >= SCREEN_W`.
    pub const GROUND_TILE_W: f32 = 160.0;
    pub const GROUND_TILE_COUNT: usize = 4;
    /// Top edge of the ground collision rectangle
    pub const GROUND_Y: f32 = 232.0;
    pub const GROUND_H: f32 = 40.0;

    /// Sprite tilt: snap up on flap, then rotate down toward a nose dive
    pub const FLAP_TILT_DEG: f32 = -25.0;
    pub const DIVE_TILT_DEG: f32 = 90.0;
    pub const TILT_RATE_DEG: f32 = 140.0;

    /// Wing-flap animation
    pub const PLAYER_FRAMES: u8 = 3;
    pub const FRAME_SECS: f32 = 0.1;

    /// HUD digit sprite size
    pub const DIGIT_W: f32 = 24.0;
    pub const DIGIT_H: f32 = 36.0;
}

/// Axis-aligned rectangle, the only collision shape in the game
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// AABB overlap test (strict, so edge-touching rects do not collide)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 4.0, 4.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn rect_overlap_edge_touch_is_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }
}
