//! Help popup module
//!
//! Keyboard and mouse reference shown with `?` or F1, and the one-line hint
//! bar at the bottom of the screen.

mod help_content;
pub mod help_line_render;
pub mod help_popup_render;
mod help_state;

pub use help_content::{HELP_ENTRIES, HELP_FOOTER};
pub use help_state::HelpPopupState;
