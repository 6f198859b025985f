use iced::keyboard::{self, key::Named};
use iced::Task;

use explainer_core::Event;

use super::{App, Message};
use crate::style::{REVEAL_STEP, SPINNER_FRAMES};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                let is_edit = action.is_edit();
                if is_edit && self.alert_open() {
                    return Task::none();
                }
                self.content.perform(action);
                if is_edit {
                    self.dispatch(Event::EditInput(self.content.text()));
                }
            }

            Message::LanguageSelected(language) => {
                tracing::debug!("Language selected: {}", language);
                self.dispatch(Event::SelectLanguage(language));
            }

            Message::Explain => {
                return self.submit();
            }

            Message::ExplanationReceived(Ok(explanation)) => {
                self.reveal = 0.0;
                self.dispatch(Event::SubmitSuccess(explanation));
            }

            Message::ExplanationReceived(Err(err)) => {
                tracing::error!("Explain request failed: {}", err);
                self.dispatch(Event::SubmitFailure(err));
            }

            Message::DismissAlert => {
                self.dispatch(Event::DismissAlert);
            }

            Message::ToggleTheme => {
                self.dispatch(Event::ToggleTheme);
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::BackgroundTick => {
                self.dispatch(Event::TimerTick);
                self.scroll_offset = 0;
            }

            Message::Frame => {
                if self.shell.in_flight {
                    self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
                }
                if self.background_enabled {
                    self.scroll_offset = self.scroll_offset.wrapping_add(1);
                }
                if self.shell.shows_explanation() {
                    self.reveal = (self.reveal + REVEAL_STEP).min(1.0);
                }
            }
        }

        Task::none()
    }

    /// Starts a request if the reducer lets the submission through.
    fn submit(&mut self) -> Task<Message> {
        if self.alert_open() {
            return Task::none();
        }

        let was_in_flight = self.shell.in_flight;
        self.dispatch(Event::SubmitStart);

        if was_in_flight || !self.shell.in_flight {
            if let Some(alert) = &self.shell.alert {
                tracing::warn!("Submission rejected: {}", alert.message);
            }
            return Task::none();
        }

        self.spinner_frame = 0;
        let client = self.client.clone();
        let request = self.shell.request();
        Task::perform(
            async move { client.explain(request).await },
            Message::ExplanationReceived,
        )
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        let keyboard::Key::Named(named) = key else {
            return Task::none();
        };

        if self.alert_open() {
            if matches!(named, Named::Enter | Named::Escape) {
                self.dispatch(Event::DismissAlert);
            }
            return Task::none();
        }

        // Ctrl+Enter (Cmd+Enter on macOS): explain
        if named == Named::Enter && modifiers.command() && self.shell.can_submit() {
            return self.submit();
        }

        Task::none()
    }
}
