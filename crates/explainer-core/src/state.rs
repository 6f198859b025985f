//! Editor shell state and its reducer.
//!
//! ## Learning: Reducers
//!
//! Instead of five loosely related mutable fields, the shell keeps one
//! record and a single function that computes the next record from an
//! event:
//!
//! ```text
//!            EditInput / SelectLanguage / TimerTick / ToggleTheme
//!                  ┌──────────────┐
//!                  ▼              │
//!   ──▶  Idle ──SubmitStart──▶ Submitting
//!         ▲                       │
//!         └── SubmitSuccess / SubmitFailure
//! ```
//!
//! There is no retry state and no queue. `SubmitStart` while submitting is
//! ignored; the UI also disables the trigger in that phase.

use crate::background::BackgroundText;
use crate::client::{ErrorKind, ExplainError, ExplainRequest};
use crate::language::Language;

/// Events that drive the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The editor text changed
    EditInput(String),
    /// A language was picked
    SelectLanguage(Language),
    /// The user asked for an explanation
    SubmitStart,
    /// The service answered with an explanation
    SubmitSuccess(String),
    /// The request failed
    SubmitFailure(ExplainError),
    /// The background refresh timer fired
    TimerTick,
    /// The dark/light toggle was pressed
    ToggleTheme,
    /// The user acknowledged the alert
    DismissAlert,
}

/// Request lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// A blocking alert waiting for acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: ErrorKind,
    pub message: String,
}

impl Alert {
    pub fn from_error(err: &ExplainError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message().to_string(),
        }
    }
}

/// Everything the shell shows, in one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub code: String,
    pub language: Language,
    pub explanation: String,
    pub in_flight: bool,
    pub dark_mode: bool,
    pub alert: Option<Alert>,
    pub background: BackgroundText,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            code: String::new(),
            language: Language::Auto,
            explanation: String::new(),
            in_flight: false,
            dark_mode: true,
            alert: None,
            background: BackgroundText::default(),
        }
    }
}

impl ShellState {
    pub fn phase(&self) -> Phase {
        if self.in_flight {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    /// Whether the explain trigger is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Whether the explanation panel is shown.
    pub fn shows_explanation(&self) -> bool {
        !self.explanation.is_empty()
    }

    /// Payload for the current code and language.
    pub fn request(&self) -> ExplainRequest {
        ExplainRequest::new(self.code.clone(), self.language)
    }

    /// Checks the current code before anything is sent.
    pub fn validate(&self) -> Result<(), ExplainError> {
        if self.code.trim().is_empty() {
            Err(ExplainError::EmptyCode)
        } else {
            Ok(())
        }
    }
}

/// Computes the next state.
pub fn reduce(mut state: ShellState, event: Event) -> ShellState {
    match event {
        Event::EditInput(text) => {
            state.code = text;
        }

        Event::SelectLanguage(language) => {
            state.language = language;
        }

        Event::SubmitStart => {
            if state.in_flight {
                return state;
            }
            match state.validate() {
                Ok(()) => state.in_flight = true,
                Err(err) => state.alert = Some(Alert::from_error(&err)),
            }
        }

        Event::SubmitSuccess(explanation) => {
            state.explanation = explanation;
            state.in_flight = false;
        }

        Event::SubmitFailure(err) => {
            state.alert = Some(Alert::from_error(&err));
            state.in_flight = false;
        }

        Event::TimerTick => {
            state.background.regenerate();
        }

        Event::ToggleTheme => {
            state.dark_mode = !state.dark_mode;
        }

        Event::DismissAlert => {
            state.alert = None;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{EMPTY_CODE_MESSAGE, REQUEST_FAILED_MESSAGE};
    use proptest::prelude::*;

    fn with_code(code: &str) -> ShellState {
        reduce(ShellState::default(), Event::EditInput(code.to_string()))
    }

    #[test]
    fn test_initial_state() {
        let state = ShellState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.code.is_empty());
        assert!(!state.shows_explanation());
        assert!(state.can_submit());
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_edit_replaces_text() {
        let state = with_code("let a = 1;");
        let state = reduce(state, Event::EditInput("let b = 2;".into()));
        assert_eq!(state.code, "let b = 2;");
    }

    #[test]
    fn test_blank_submission_raises_validation_alert() {
        for code in ["", "   ", "\n\t  \n"] {
            let before = with_code(code);
            let after = reduce(before.clone(), Event::SubmitStart);

            assert!(!after.in_flight);
            let alert = after.alert.clone().unwrap();
            assert_eq!(alert.kind, ErrorKind::Validation);
            assert_eq!(alert.message, EMPTY_CODE_MESSAGE);

            // Nothing but the alert changed
            assert_eq!(ShellState { alert: None, ..after }, before);
        }
    }

    #[test]
    fn test_submit_sets_in_flight() {
        let state = reduce(with_code("print('hi')"), Event::SubmitStart);
        assert!(state.in_flight);
        assert_eq!(state.phase(), Phase::Submitting);
        assert!(!state.can_submit());
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let state = reduce(with_code("x = 1"), Event::SubmitStart);
        let again = reduce(state.clone(), Event::SubmitStart);
        assert_eq!(again, state);
    }

    #[test]
    fn test_success_shows_explanation() {
        let state = reduce(with_code("x = 1"), Event::SubmitStart);
        let state = reduce(state, Event::SubmitSuccess("X".into()));
        assert_eq!(state.explanation, "X");
        assert!(state.shows_explanation());
        assert!(!state.in_flight);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_failure_keeps_previous_explanation() {
        let state = reduce(with_code("x = 1"), Event::SubmitStart);
        let state = reduce(state, Event::SubmitSuccess("first".into()));
        let state = reduce(state, Event::SubmitStart);
        let state = reduce(
            state,
            Event::SubmitFailure(ExplainError::Status { status: 500, detail: None }),
        );

        assert_eq!(state.explanation, "first");
        assert!(!state.in_flight);
        let alert = state.alert.unwrap();
        assert_eq!(alert.kind, ErrorKind::RequestFailure);
        assert_eq!(alert.message, REQUEST_FAILED_MESSAGE);
    }

    #[test]
    fn test_transport_failure_matches_status_failure() {
        let base = reduce(with_code("x = 1"), Event::SubmitStart);
        let a = reduce(
            base.clone(),
            Event::SubmitFailure(ExplainError::Transport("connection refused".into())),
        );
        let b = reduce(
            base,
            Event::SubmitFailure(ExplainError::Status { status: 404, detail: None }),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_success_overwrites_explanation() {
        let mut state = with_code("x = 1");
        for text in ["one", "two"] {
            state = reduce(state, Event::SubmitStart);
            state = reduce(state, Event::SubmitSuccess(text.into()));
        }
        assert_eq!(state.explanation, "two");
    }

    #[test]
    fn test_dismiss_alert() {
        let state = reduce(with_code(""), Event::SubmitStart);
        assert!(state.alert.is_some());
        let state = reduce(state, Event::DismissAlert);
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_timer_tick_only_touches_background() {
        let state = reduce(with_code("x = 1"), Event::SelectLanguage(Language::Python));
        let state = reduce(state, Event::SubmitStart);
        let state = reduce(state, Event::SubmitSuccess("done".into()));

        let ticked = reduce(state.clone(), Event::TimerTick);
        assert_eq!(ticked.background.generation(), state.background.generation() + 1);
        assert_eq!(
            ShellState {
                background: state.background.clone(),
                ..ticked
            },
            state
        );
    }

    #[test]
    fn test_toggle_theme() {
        let state = ShellState::default();
        let state = reduce(state, Event::ToggleTheme);
        assert!(!state.dark_mode);
        let state = reduce(state, Event::ToggleTheme);
        assert!(state.dark_mode);
    }

    #[test]
    fn test_request_payload() {
        let state = reduce(with_code("int main() {}"), Event::SelectLanguage(Language::Cpp));
        let request = state.request();
        assert_eq!(request.code, "int main() {}");
        assert_eq!(request.language, "cpp");
    }

    fn any_language() -> impl Strategy<Value = Language> {
        proptest::sample::select(Language::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_language_only_changes_language_field(
            code in ".*",
            picks in proptest::collection::vec(any_language(), 1..8),
        ) {
            let mut state = with_code(&code);
            for language in picks {
                let before = state.request();
                state = reduce(state, Event::SelectLanguage(language));
                let after = state.request();
                prop_assert_eq!(&after.code, &before.code);
                prop_assert_eq!(after.language.as_str(), language.wire_name());
            }
        }

        #[test]
        fn prop_in_flight_cleared_by_any_outcome(
            code in "[a-z]{1,20}",
            succeed in any::<bool>(),
        ) {
            let state = reduce(with_code(&code), Event::SubmitStart);
            prop_assert!(state.in_flight);
            let outcome = if succeed {
                Event::SubmitSuccess("ok".into())
            } else {
                Event::SubmitFailure(ExplainError::Transport("down".into()))
            };
            let state = reduce(state, outcome);
            prop_assert!(!state.in_flight);
            prop_assert!(state.can_submit());
        }
    }
}
