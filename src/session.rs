//! Game session context
//!
//! Owns the simulation state, the tuning values, and the high-score file
//! path, and turns the sim's per-frame events into effects: sound cues out
//! to the `AudioSink`, game-over scores into the persistence layer, and a
//! cached HUD label that frontends re-render only when it changes.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::audio::AudioSink;
use crate::highscore;
use crate::input::FrameInput;
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

pub struct GameSession {
    pub state: GameState,
    pub tuning: Tuning,
    score_path: PathBuf,
    /// Persisted best, the write-through source for `state.high_score`
    best: u32,
    hud_label: String,
    hud_dirty: bool,
}

impl GameSession {
    /// New session with the stored high score loaded (or seeded to zero)
    pub fn new(score_path: impl Into<PathBuf>, tuning: Tuning, seed: u64) -> Self {
        let score_path = score_path.into();
        let best = highscore::load_or_zero(&score_path);
        let mut state = GameState::new(seed);
        state.high_score = best;
        info!("session start, high score {best}");
        Self {
            state,
            tuning,
            score_path,
            best,
            hud_label: format!("High Score: {best}"),
            hud_dirty: true,
        }
    }

    /// Advance the simulation one frame and apply its effects
    pub fn frame(&mut self, input: &FrameInput, dt: f32, audio: &mut impl AudioSink) {
        tick(&mut self.state, input, dt, &self.tuning);
        for event in self.state.drain_events() {
            self.apply(event, audio);
        }
    }

    fn apply(&mut self, event: GameEvent, audio: &mut impl AudioSink) {
        match event {
            GameEvent::Cue(cue) => audio.play(cue),
            GameEvent::Scored { score } => debug!("score {score}"),
            GameEvent::GameOver { score } => {
                info!("run ended at {score}");
                if score > self.best {
                    self.best = score;
                    if let Err(err) = highscore::write(&self.score_path, score) {
                        warn!("high score not saved: {err}");
                    }
                    self.set_label();
                }
                self.state.high_score = self.best;
            }
            GameEvent::Reset => {
                // Re-read the file: the stored best can change underneath a
                // running session (another process, a replaced save file)
                let stored = highscore::load_or_zero(&self.score_path);
                if stored != self.best {
                    self.best = stored;
                    self.set_label();
                }
                self.state.high_score = self.best;
            }
        }
    }

    fn set_label(&mut self) {
        self.hud_label = format!("High Score: {}", self.best);
        self.hud_dirty = true;
    }

    /// The HUD label text, `Some` only on frames where it changed
    pub fn hud_label_if_changed(&mut self) -> Option<&str> {
        if self.hud_dirty {
            self.hud_dirty = false;
            Some(&self.hud_label)
        } else {
            None
        }
    }
}
