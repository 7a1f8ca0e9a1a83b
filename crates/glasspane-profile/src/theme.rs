#![forbid(unsafe_code)]

//! Light/dark theme flag.
//!
//! The host observes its platform's color-scheme preference and derives a
//! [`Theme`] from it; the rendering surface styles the panel accordingly.

use serde::{Deserialize, Serialize};

/// Rendering theme for the profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Derive the theme from the host's prefers-dark flag.
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Whether the dark palette applies.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
