//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod filter_bar;
pub mod grid;
pub mod help_dialog;
pub mod layout;

pub use filter_bar::{render_filter_bar, FilterBarComponent};
pub use grid::{render_grid, GridComponent};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
