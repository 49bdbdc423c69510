// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::SectionTab;
use crate::tooltip::DEFAULT_ANCHOR_OFFSET;

pub const DEFAULT_TOOLTIP_WIDTH: u16 = 60;

/// Tooltip configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TooltipConfig {
    /// Rows between the clicked term and the tooltip
    #[serde(default = "default_offset")]
    pub offset: u16,
    /// Upper bound on tooltip width; the frame may force it narrower
    #[serde(default = "default_width")]
    pub width: u16,
}

fn default_offset() -> u16 {
    DEFAULT_ANCHOR_OFFSET
}

fn default_width() -> u16 {
    DEFAULT_TOOLTIP_WIDTH
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            offset: DEFAULT_ANCHOR_OFFSET,
            width: DEFAULT_TOOLTIP_WIDTH,
        }
    }
}

/// Startup view and catalog source
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub tab: SectionTab,
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub guide: GuideConfig,
}
