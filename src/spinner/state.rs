//! Mutable render state of one animation.

use std::time::Duration;

use super::Severity;
use super::frames;

/// Fields of the animation that the clock, `update` and `stop` mutate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimationState {
    pub running: bool,
    pub text: String,
    pub mode: Severity,
    pub frame_index: usize,
    pub frame_interval: Duration,
}

impl AnimationState {
    /// Reset for a fresh run.
    pub fn begin(&mut self, text: &str, mode: Severity, frame_interval: Duration) {
        self.text = text.to_string();
        self.mode = mode;
        self.frame_index = 0;
        self.frame_interval = frame_interval;
        self.running = true;
    }

    /// Replace text and mode; an empty or absent message keeps the old text.
    pub fn apply_update(&mut self, text: Option<&str>, mode: Severity) {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.text = text.to_string();
        }
        self.mode = mode;
    }

    pub fn advance(&mut self) {
        self.frame_index = frames::next_index(self.frame_index);
    }

    pub fn finish(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_text_when_empty() {
        let mut state = AnimationState::default();
        state.begin("Building", Severity::Info, Duration::from_millis(50));

        state.apply_update(Some(""), Severity::Warning);
        assert_eq!(state.text, "Building");
        assert_eq!(state.mode, Severity::Warning);

        state.apply_update(None, Severity::Error);
        assert_eq!(state.text, "Building");
        assert_eq!(state.mode, Severity::Error);

        state.apply_update(Some("Linking"), Severity::Info);
        assert_eq!(state.text, "Linking");
    }

    #[test]
    fn test_begin_resets_index() {
        let mut state = AnimationState::default();
        state.frame_index = 7;
        state.begin("Again", Severity::Success, Duration::from_millis(100));
        assert_eq!(state.frame_index, 0);
        assert!(state.running);
        assert_eq!(state.frame_interval, Duration::from_millis(100));
    }
}
