//! Data-driven game balance
//!
//! Balance values the simulation consumes every frame, loadable from a JSON
//! file so the handheld build can be tweaked without recompiling. Defaults
//! mirror the constants in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravity accumulation, units/sec^2
    pub gravity: f32,
    /// Flap impulse magnitude; applied velocity is `-flap_impulse * dt`
    pub flap_impulse: f32,
    /// Leftward scroll speed for ground and pipes, units/sec
    pub scroll_speed: f32,
    /// Seconds between obstacle pair spawns
    pub spawn_interval: f32,
    /// Vertical opening between the members of a pair
    pub pipe_gap: f32,
    /// Seconds the player stays frozen after (re)start
    pub prestart_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            flap_impulse: consts::FLAP_IMPULSE,
            scroll_speed: consts::SCROLL_SPEED,
            spawn_interval: consts::SPAWN_INTERVAL,
            pipe_gap: consts::PIPE_GAP,
            prestart_delay: consts::PRESTART_DELAY,
        }
    }
}

impl Tuning {
    /// Load from a JSON file; any problem logs and falls back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("bad tuning file {}: {err}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
