//! # Explainer Core
//!
//! Editor shell state and the explanation service client, free of any UI
//! framework.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Editor Shell                          │
//! │  ┌──────────────┐   Event    ┌────────────────────────┐  │
//! │  │  UI (iced)   │ ─────────▶ │  reduce(state, event)  │  │
//! │  └──────────────┘            └────────────────────────┘  │
//! │         │ request()                                       │
//! │  ┌──────┴───────┐   POST     ┌────────────────────────┐  │
//! │  │ ExplainClient│ ─────────▶ │  explanation service   │  │
//! │  └──────────────┘            └────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Learning: Pure Reducers
//!
//! All UI state lives in one record, [`ShellState`], and only changes
//! through [`reduce`]. The network call is an isolated async function that
//! returns a `Result`; turning an `Err` into an alert is the caller's job.

pub mod background;
pub mod client;
pub mod config;
pub mod language;
pub mod state;

pub use background::BackgroundText;
pub use client::{ErrorKind, ExplainClient, ExplainError, ExplainRequest, ExplainResponse};
pub use config::Config;
pub use language::Language;
pub use state::{Alert, Event, Phase, ShellState, reduce};

/// Result type for core setup operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while setting up the core
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
