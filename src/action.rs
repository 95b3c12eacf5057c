//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for periodic updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Filter Bar
    // ─────────────────────────────────────────────────────────────────────────
    /// Move keyboard focus to the next control
    FocusNextControl,
    /// Move keyboard focus to the previous control
    FocusPrevControl,
    /// Activate the control at this position
    ActivateControl(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Grid Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the grid up one row
    ScrollUp,
    /// Scroll the grid down one row
    ScrollDown,
    /// Scroll the grid up one page
    PageUp,
    /// Scroll the grid down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Layout Engine
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch the engine to the other layout mode
    CycleLayoutMode,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery Management
    // ─────────────────────────────────────────────────────────────────────────
    /// Reload the gallery manifest from disk
    ReloadGallery,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNextControl => write!(f, "FocusNextControl"),
            Action::FocusPrevControl => write!(f, "FocusPrevControl"),
            Action::ActivateControl(i) => write!(f, "ActivateControl({})", i),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::CycleLayoutMode => write!(f, "CycleLayoutMode"),
            Action::ReloadGallery => write!(f, "ReloadGallery"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
