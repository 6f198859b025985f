use iced::keyboard;
use iced::widget::text_editor;

use explainer_core::{ExplainError, Language};

#[derive(Debug, Clone)]
pub enum Message {
    // Editor
    EditorAction(text_editor::Action),
    LanguageSelected(Language),

    // Explain request
    Explain,
    ExplanationReceived(Result<String, ExplainError>),

    // Alert
    DismissAlert,

    // UI
    ToggleTheme,
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Timers
    BackgroundTick,
    Frame,
}
