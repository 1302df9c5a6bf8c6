//! UI state - presentation enums shared by the components

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Top-level portfolio sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Skills,
    Projects,
    Resume,
}

impl Section {
    pub fn all() -> Vec<Section> {
        vec![
            Section::Home,
            Section::Skills,
            Section::Projects,
            Section::Resume,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Resume => "Resume",
        }
    }

    pub fn next(self) -> Section {
        let sections = Section::all();
        let index = sections.iter().position(|s| *s == self).unwrap_or(0);
        sections[(index + 1) % sections.len()]
    }

    pub fn previous(self) -> Section {
        let sections = Section::all();
        let index = sections.iter().position(|s| *s == self).unwrap_or(0);
        sections[(index + sections.len() - 1) % sections.len()]
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Color theme. Only kept in memory for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(5, 5, 5),
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Rgb(16, 185, 129),
                secondary: Color::Rgb(59, 130, 246),
                border: Color::DarkGray,
                highlight_fg: Color::Black,
            },
            Theme::Light => Palette {
                background: Color::Rgb(249, 250, 251),
                text: Color::Rgb(17, 24, 39),
                muted: Color::Gray,
                accent: Color::Rgb(5, 150, 105),
                secondary: Color::Rgb(37, 99, 235),
                border: Color::Gray,
                highlight_fg: Color::White,
            },
        }
    }
}

/// Colors used by every component for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub secondary: Color,
    pub border: Color,
    pub highlight_fg: Color,
}
