//! Normalized input-event stream
//!
//! Device binding and polling are external; controller buttons and the
//! handheld's touch surface both produce `InputEvent`s, funneled into one
//! `FrameInput` consumed identically by the state machine.

/// A discrete input signal, already decoupled from any device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Process-level quit request
    Quit,
    /// Pause toggle
    TogglePause,
    /// The single action input: flap while playing, confirm on game over
    Action,
    /// Touch-surface press; an alias for the action input
    TouchPress,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub action: bool,
    pub pause: bool,
    pub quit: bool,
}

/// Fold this frame's pending events into one command set
pub fn collect<I>(events: I) -> FrameInput
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut input = FrameInput::default();
    for event in events {
        match event {
            InputEvent::Quit => input.quit = true,
            InputEvent::TogglePause => input.pause = true,
            InputEvent::Action | InputEvent::TouchPress => input.action = true,
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stream_is_idle() {
        assert_eq!(collect([]), FrameInput::default());
    }

    #[test]
    fn touch_aliases_action() {
        let from_touch = collect([InputEvent::TouchPress]);
        let from_button = collect([InputEvent::Action]);
        assert_eq!(from_touch, from_button);
        assert!(from_touch.action);
    }

    #[test]
    fn signals_accumulate_within_a_frame() {
        let input = collect([InputEvent::TogglePause, InputEvent::Action, InputEvent::Quit]);
        assert!(input.pause && input.action && input.quit);
    }
}
