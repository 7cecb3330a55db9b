//! Visual style definitions for the task window.
//!
//! The theme is plain data: a [`Palette`] of named colors and a fixed set of
//! [`StyleKind`]s that the components ask for when rendering.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Selectable palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Dark,
    HighContrast,
}

/// Named colors of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_medium: Color,
    pub bg_light: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub border: Color,
    pub task_bg: Color,
    pub task_hover: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg_dark: Color::Rgb(0x12, 0x12, 0x12),
        bg_medium: Color::Rgb(0x1a, 0x1a, 0x1a),
        bg_light: Color::Rgb(0x23, 0x23, 0x23),
        accent: Color::Rgb(0xff, 0x91, 0x00),
        accent_hover: Color::Rgb(0xff, 0xa1, 0x22),
        accent_pressed: Color::Rgb(0xe5, 0x7f, 0x00),
        text_primary: Color::White,
        text_secondary: Color::Rgb(0xa0, 0xa0, 0xa0),
        text_disabled: Color::Rgb(0x66, 0x66, 0x66),
        border: Color::Rgb(0x3c, 0x3c, 0x3c),
        task_bg: Color::Rgb(0x25, 0x25, 0x25),
        task_hover: Color::Rgb(0x2d, 0x2d, 0x2d),
        error: Color::Rgb(0xff, 0x00, 0x00),
    };

    /// Named ANSI colors only, for terminals without true color
    pub const HIGH_CONTRAST: Palette = Palette {
        bg_dark: Color::Black,
        bg_medium: Color::Black,
        bg_light: Color::Black,
        accent: Color::Yellow,
        accent_hover: Color::LightYellow,
        accent_pressed: Color::Yellow,
        text_primary: Color::White,
        text_secondary: Color::Gray,
        text_disabled: Color::DarkGray,
        border: Color::Gray,
        task_bg: Color::Black,
        task_hover: Color::DarkGray,
        error: Color::LightRed,
    };
}

/// Every style the rendering layer can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Window,
    Title,
    Subtitle,
    InputPanel,
    Entry,
    EntryFocused,
    Placeholder,
    InputError,
    Button,
    ButtonFocused,
    DeleteButton,
    Checkbox,
    CheckboxChecked,
    TaskNormal,
    TaskCompleted,
    TaskHover,
    TaskDragging,
    TaskSelected,
    TaskText,
    TaskTextCompleted,
    DueText,
    DueTextCompleted,
    DropIndicator,
    StatusBar,
    StatusError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let palette = match name {
            ThemeName::Dark => Palette::DARK,
            ThemeName::HighContrast => Palette::HIGH_CONTRAST,
        };
        Self { name, palette }
    }

    /// Content style (foreground, background, modifiers) for a kind
    pub fn style(&self, kind: StyleKind) -> Style {
        let p = &self.palette;
        match kind {
            StyleKind::Window => Style::default().fg(p.text_primary).bg(p.bg_dark),
            StyleKind::Title => Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            StyleKind::Subtitle => Style::default().fg(p.text_secondary),
            StyleKind::InputPanel => Style::default().fg(p.text_primary).bg(p.bg_light),
            StyleKind::Entry => Style::default().fg(p.text_primary).bg(p.bg_light),
            StyleKind::EntryFocused => Style::default().fg(p.text_primary).bg(p.task_hover),
            StyleKind::Placeholder => Style::default().fg(p.text_disabled).add_modifier(Modifier::ITALIC),
            StyleKind::InputError => Style::default().fg(p.text_primary).bg(p.bg_light),
            StyleKind::Button => Style::default()
                .fg(p.text_primary)
                .bg(p.accent_pressed)
                .add_modifier(Modifier::BOLD),
            StyleKind::ButtonFocused => Style::default()
                .fg(p.text_primary)
                .bg(p.accent_hover)
                .add_modifier(Modifier::BOLD),
            StyleKind::DeleteButton => Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            StyleKind::Checkbox => Style::default().fg(p.text_secondary),
            StyleKind::CheckboxChecked => Style::default().fg(p.accent),
            StyleKind::TaskNormal => Style::default().bg(p.task_bg),
            StyleKind::TaskCompleted => Style::default().bg(p.bg_medium),
            StyleKind::TaskHover => Style::default().bg(p.task_hover),
            StyleKind::TaskDragging => Style::default().bg(p.task_hover).add_modifier(Modifier::DIM),
            StyleKind::TaskSelected => Style::default().bg(p.task_hover).add_modifier(Modifier::BOLD),
            StyleKind::TaskText => Style::default().fg(p.text_primary),
            StyleKind::TaskTextCompleted => Style::default()
                .fg(p.text_disabled)
                .add_modifier(Modifier::CROSSED_OUT),
            StyleKind::DueText => Style::default().fg(p.text_secondary),
            StyleKind::DueTextCompleted => Style::default().fg(p.text_disabled),
            StyleKind::DropIndicator => Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            StyleKind::StatusBar => Style::default().fg(p.text_secondary),
            StyleKind::StatusError => Style::default().fg(p.error),
        }
    }

    /// Border color for framed kinds (cards, fields, panels)
    pub fn border_style(&self, kind: StyleKind) -> Style {
        let p = &self.palette;
        let color = match kind {
            StyleKind::EntryFocused | StyleKind::DropIndicator | StyleKind::ButtonFocused => p.accent,
            StyleKind::InputError => p.error,
            StyleKind::TaskHover | StyleKind::TaskSelected => p.text_secondary,
            StyleKind::TaskDragging => p.accent_pressed,
            StyleKind::TaskCompleted => p.text_disabled,
            _ => p.border,
        };
        Style::default().fg(color)
    }
}
