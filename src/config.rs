//! Configuration
//!
//! Optional TOML file at `~/.config/payguide/config.toml`. A missing file
//! means defaults; a broken one means defaults plus a warning for the user.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config};
pub use types::{Config, GuideConfig, TooltipConfig};
