//! Layout constants for the shell.

/// Sizes used by the main panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelStyle {
    pub max_width: f32,
    pub padding: f32,
    pub editor_height: f32,
    pub radius: f32,
    pub title_size: f32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            max_width: 768.0,
            padding: 24.0,
            editor_height: 250.0,
            radius: 8.0,
            title_size: 28.0,
        }
    }
}

/// Spinner glyphs shown in place of the button label.
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Lines of background code drawn at once.
pub const BACKGROUND_ROWS: usize = 80;

/// Explanation panel fade-in per animation frame.
pub const REVEAL_STEP: f32 = 0.12;
