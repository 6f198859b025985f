//! # Explainer UI
//!
//! Desktop shell for the code explainer, built with iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`], wrapping the core [`explainer_core::ShellState`]
//! - **Message**: Events that can occur
//! - **Update**: Translates messages into core events and side effects
//! - **View**: Pure function: state -> UI elements
//!
//! Every change to shell state goes through [`explainer_core::reduce`].
//! The UI only adds presentation state (animation frames, scroll offset)
//! on top.

pub mod app;
pub mod highlighter;
pub mod style;
pub mod theme;

pub use app::{App, Flags, Message, run};
pub use theme::Theme;
