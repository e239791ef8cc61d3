//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering, audio, or filesystem dependencies
//! - Side effects leave only as `GameEvent`s drained by the session

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{GROUND_RECT, player_collides};
pub use spawn::{spawn_if_due, spawn_pair};
pub use state::{GameEvent, GamePhase, GameState, GroundTile, PipePair, Player};
pub use tick::tick;
