//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them, in order, to update state.

use crate::model::Section;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────────────────
    NextSection,
    PrevSection,
    GoToSection(Section),

    // ─────────────────────────────────────────────────────────────────────────
    // Project List
    // ─────────────────────────────────────────────────────────────────────────
    NextProject,
    PrevProject,
    FirstProject,
    LastProject,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the gallery for the project with this id
    SelectProject(String),
    CloseGallery,
    ShowNextImage,
    ShowPreviousImage,
    /// Show the image at a zero-based position
    ShowImageAt(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // External Links
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the repository of the highlighted (or open) project
    OpenRepository,
    /// Open the image currently shown in the gallery
    OpenCurrentImage,
    OpenResume,
    /// Open the n-th contact link
    OpenContact(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals & View
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
    ConfirmModal,
    ToggleTheme,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextSection => write!(f, "NextSection"),
            Action::PrevSection => write!(f, "PrevSection"),
            Action::GoToSection(section) => write!(f, "GoToSection({})", section.name()),
            Action::NextProject => write!(f, "NextProject"),
            Action::PrevProject => write!(f, "PrevProject"),
            Action::FirstProject => write!(f, "FirstProject"),
            Action::LastProject => write!(f, "LastProject"),
            Action::SelectProject(id) => write!(f, "SelectProject({})", id),
            Action::CloseGallery => write!(f, "CloseGallery"),
            Action::ShowNextImage => write!(f, "ShowNextImage"),
            Action::ShowPreviousImage => write!(f, "ShowPreviousImage"),
            Action::ShowImageAt(i) => write!(f, "ShowImageAt({})", i),
            Action::OpenRepository => write!(f, "OpenRepository"),
            Action::OpenCurrentImage => write!(f, "OpenCurrentImage"),
            Action::OpenResume => write!(f, "OpenResume"),
            Action::OpenContact(i) => write!(f, "OpenContact({})", i),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
        }
    }
}
