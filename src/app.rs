//! Application module
//!
//! Owns the navigation state (active product, section, scroll), the tooltip
//! state and the layout regions of the last render, and routes terminal
//! events to them.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::App;
