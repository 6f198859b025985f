//! Languages offered by the picker.
//!
//! The selection is only a label forwarded to the explanation service. It
//! never changes how the submitted code is validated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language selected in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Let the service work it out
    #[default]
    Auto,
    JavaScript,
    Python,
    Java,
    Cpp,
    /// Anything not in the list
    Other,
}

impl Language {
    /// Picker options, in display order.
    pub const ALL: [Language; 6] = [
        Language::Auto,
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Other,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto Detect",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::Other => "Other",
        }
    }

    /// Value sent in the `language` field of a request.
    ///
    /// `Auto` and `Other` both become `"unknown"`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Auto | Self::Other => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a language name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "unknown" => Ok(Self::Auto),
            "javascript" | "js" => Ok(Self::JavaScript),
            "python" | "py" => Ok(Self::Python),
            "java" => Ok(Self::Java),
            "cpp" | "c++" => Ok(Self::Cpp),
            "other" => Ok(Self::Other),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}
