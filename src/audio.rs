//! Sound cue boundary
//!
//! The simulation triggers fire-and-forget playback of named cues by opaque
//! handle; mixing, channels, and decoding live behind the `AudioSink` trait
//! in the platform frontend. No game logic depends on playback state.

/// The five named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Pause toggled either way
    PauseToggle,
    /// Flap impulse applied
    Flap,
    /// Run ended on a collision
    Die,
    /// Obstacle pair passed
    Score,
    /// Restart confirmed from game over
    Swoosh,
}

impl SoundCue {
    /// Logical asset name, the key into the frontend's sound table
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundCue::PauseToggle => "pause",
            SoundCue::Flap => "flap",
            SoundCue::Die => "die",
            SoundCue::Score => "point",
            SoundCue::Swoosh => "swoosh",
        }
    }
}

/// Fire-and-forget playback sink
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that drops every cue (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: SoundCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_names_are_distinct() {
        let cues = [
            SoundCue::PauseToggle,
            SoundCue::Flap,
            SoundCue::Die,
            SoundCue::Score,
            SoundCue::Swoosh,
        ];
        for (i, a) in cues.iter().enumerate() {
            for b in &cues[i + 1..] {
                assert_ne!(a.asset_name(), b.asset_name());
            }
        }
    }
}
