//! Vertical scroll state shared by the content pane and the help popup

mod scroll_state;

pub use scroll_state::ScrollState;
