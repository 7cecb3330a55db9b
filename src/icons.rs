//! Icon service for the task card controls and form fields
//!
//! Supports emoji, Unicode and ASCII glyph sets so the checkbox and delete
//! controls stay readable on terminals with limited font coverage.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Glyphs for the per-task controls
#[derive(Debug, Clone)]
pub struct ControlIcons {
    pub unchecked: &'static str,
    pub checked: &'static str,
    pub delete: &'static str,
}

/// Glyphs shown in front of the input form fields
#[derive(Debug, Clone)]
pub struct FieldIcons {
    pub task: &'static str,
    pub date: &'static str,
    pub time: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub controls: ControlIcons,
    pub fields: FieldIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                controls: ControlIcons {
                    unchecked: "🔳",
                    checked: "✅",
                    delete: "❌",
                },
                fields: FieldIcons {
                    task: "📋",
                    date: "📅",
                    time: "🕒",
                },
            },
            IconTheme::Unicode => IconSet {
                controls: ControlIcons {
                    unchecked: "○",
                    checked: "●",
                    delete: "✕",
                },
                fields: FieldIcons {
                    task: "▶",
                    date: "◷",
                    time: "⧖",
                },
            },
            IconTheme::Ascii => IconSet {
                controls: ControlIcons {
                    unchecked: "[ ]",
                    checked: "[X]",
                    delete: "x",
                },
                fields: FieldIcons {
                    task: ">",
                    date: "@",
                    time: "T",
                },
            },
        }
    }

    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        let controls = self.icons().controls;
        if completed {
            controls.checked
        } else {
            controls.unchecked
        }
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().controls.delete
    }
}
