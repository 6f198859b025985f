//! Colour palettes for the shell.
//!
//! A [`Theme`] carries one palette per mode. The built-in one can be
//! replaced by a JSON file (see `ui.theme_file` in the config):
//!
//! ```json
//! { "name": "Mine", "dark": { ... }, "light": { ... } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Same colour with its alpha scaled by `factor`.
    pub fn faded(self, factor: f32) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a * factor.clamp(0.0, 1.0))
    }
}

/// Colours for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Window background
    pub background: Color,
    /// Scrolling code behind the panel
    pub background_code: Color,
    /// Main panel
    pub panel: Color,
    /// Explanation card and inputs
    pub surface: Color,
    pub editor: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Explain button
    pub accent: Color,
    pub accent_hover: Color,
    pub selection: Color,
    /// Dimmed layer behind alerts
    pub overlay: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(0.07, 0.09, 0.15),
            background_code: Color::rgba(0.30, 0.85, 0.45, 0.18),
            panel: Color::rgb(0.12, 0.16, 0.22),
            surface: Color::rgb(0.22, 0.25, 0.32),
            editor: Color::rgb(0.16, 0.17, 0.20),
            border: Color::rgb(0.22, 0.25, 0.32),
            text_primary: Color::rgb(0.95, 0.95, 0.95),
            text_secondary: Color::rgb(0.82, 0.84, 0.86),
            text_muted: Color::rgb(0.55, 0.57, 0.60),
            accent: Color::rgb(0.94, 0.27, 0.27),
            accent_hover: Color::rgb(0.86, 0.15, 0.15),
            selection: Color::rgba(0.25, 0.46, 0.85, 0.55),
            overlay: Color::rgba(0.0, 0.0, 0.0, 0.5),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::rgb(0.95, 0.96, 0.96),
            background_code: Color::rgba(0.10, 0.45, 0.20, 0.12),
            panel: Color::rgb(1.0, 1.0, 1.0),
            surface: Color::rgb(0.90, 0.91, 0.92),
            editor: Color::rgb(0.98, 0.98, 0.98),
            border: Color::rgb(0.82, 0.84, 0.86),
            text_primary: Color::rgb(0.07, 0.09, 0.15),
            text_secondary: Color::rgb(0.22, 0.25, 0.32),
            text_muted: Color::rgb(0.42, 0.45, 0.50),
            accent: Color::rgb(0.94, 0.27, 0.27),
            accent_hover: Color::rgb(0.86, 0.15, 0.15),
            selection: Color::rgba(0.25, 0.46, 0.85, 0.30),
            overlay: Color::rgba(0.0, 0.0, 0.0, 0.35),
        }
    }
}

/// A named pair of palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub dark: Palette,
    pub light: Palette,
}

impl Theme {
    pub fn builtin() -> Self {
        Self {
            name: "Explainer".to_string(),
            dark: Palette::dark(),
            light: Palette::light(),
        }
    }

    /// Palette for the current mode.
    pub fn palette(&self, dark_mode: bool) -> &Palette {
        if dark_mode { &self.dark } else { &self.light }
    }

    /// Loads a theme from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the theme to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ThemeError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors loading or saving a theme file.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid theme: {0}")]
    Json(#[from] serde_json::Error),
}
