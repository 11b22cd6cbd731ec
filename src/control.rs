use std::time::{Duration, Instant};

/// State of the trigger control. The same button starts a generation when
/// idle and downloads the result once one is ready; which action `activate`
/// performs is dispatched on this enum, never on swapped-out callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlState {
    Idle,
    /// A generation request is outstanding. The button is disabled for the
    /// whole lifetime of this variant, so a second request cannot start.
    Busy { started: Instant },
    /// The server produced an artifact; the next activation downloads it.
    ReadyToDownload { filename: String },
}

impl ControlState {
    /// Idle → Busy, recording the start instant. Returns `false` (and leaves
    /// the state untouched) from any other state.
    pub fn begin(&mut self) -> bool {
        match self {
            ControlState::Idle => {
                *self = ControlState::Busy {
                    started: Instant::now(),
                };
                true
            }
            _ => false,
        }
    }

    /// Busy → ReadyToDownload, returning the elapsed request time.
    /// Returns `None` (state untouched) if no request was outstanding.
    pub fn finish(&mut self, filename: String) -> Option<Duration> {
        match *self {
            ControlState::Busy { started } => {
                let elapsed = started.elapsed();
                *self = ControlState::ReadyToDownload { filename };
                Some(elapsed)
            }
            _ => None,
        }
    }

    /// Return to Idle from any state. Idempotent.
    pub fn reset(&mut self) {
        *self = ControlState::Idle;
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ControlState::Busy { .. })
    }

    /// The artifact identifier, if one is ready for download.
    pub fn filename(&self) -> Option<&str> {
        match self {
            ControlState::ReadyToDownload { filename } => Some(filename),
            _ => None,
        }
    }
}

/// Character count shown by the live counter. Unicode scalar values,
/// so "Привіт" counts as 6.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Render a request duration for the elapsed-time label, e.g. "3.52 sec".
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} sec", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_only_from_idle() {
        let mut state = ControlState::Idle;
        assert!(state.begin());
        assert!(state.is_busy());

        // Busy is terminal until the response arrives
        assert!(!state.begin());
        assert!(state.is_busy());

        let mut ready = ControlState::ReadyToDownload {
            filename: "x.mp3".into(),
        };
        assert!(!ready.begin());
        assert_eq!(ready.filename(), Some("x.mp3"));
    }

    #[test]
    fn finish_moves_busy_to_ready_with_elapsed() {
        let mut state = ControlState::Idle;
        state.begin();
        let elapsed = state.finish("story123.mp3".into());
        assert!(elapsed.is_some());
        assert_eq!(state.filename(), Some("story123.mp3"));
        assert!(!state.is_busy());
    }

    #[test]
    fn finish_without_outstanding_request_is_a_no_op() {
        let mut state = ControlState::Idle;
        assert!(state.finish("x.mp3".into()).is_none());
        assert_eq!(state, ControlState::Idle);

        let mut ready = ControlState::ReadyToDownload {
            filename: "a.mp3".into(),
        };
        assert!(ready.finish("b.mp3".into()).is_none());
        assert_eq!(ready.filename(), Some("a.mp3"));
    }

    #[test]
    fn reset_is_idempotent_from_every_state() {
        let mut state = ControlState::Idle;
        state.reset();
        assert_eq!(state, ControlState::Idle);

        state.begin();
        state.reset();
        assert_eq!(state, ControlState::Idle);

        state.begin();
        state.finish("x.mp3".into());
        state.reset();
        assert_eq!(state, ControlState::Idle);
    }

    #[test]
    fn failure_path_returns_to_idle_and_can_retrigger() {
        let mut state = ControlState::Idle;
        state.begin();
        // Server said no; the handler calls reset()
        state.reset();
        assert_eq!(state, ControlState::Idle);
        assert!(state.begin());
    }

    #[test]
    fn char_count_matches_typed_length() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("Hello world"), 11);
        assert_eq!(char_count("Привіт"), 6);
        assert_eq!(char_count("  \n"), 3);
    }

    #[test]
    fn elapsed_renders_two_decimals_with_sec_suffix() {
        assert_eq!(format_elapsed(Duration::from_millis(3520)), "3.52 sec");
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0.00 sec");
        assert_eq!(format_elapsed(Duration::from_millis(61499)), "61.50 sec");
    }
}
