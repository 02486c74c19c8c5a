use serde::{Deserialize, Serialize};

use crate::display::DEFAULT_PIP;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dice: DiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Limits for the dice tray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Largest dice count accepted from the input field (default: 30).
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    /// Count pre-filled into the input field on startup.
    #[serde(default)]
    pub default_count: Option<usize>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Glyph drawn for an active pip. Must be a single character.
    #[serde(default = "default_pip")]
    pub pip: String,
}

fn default_max_count() -> usize {
    30
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_pip() -> String {
    DEFAULT_PIP.to_string()
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            default_count: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            pip: default_pip(),
        }
    }
}

impl UiConfig {
    /// First character of `pip`, falling back to the default glyph.
    pub fn pip_char(&self) -> char {
        self.pip.chars().next().unwrap_or(DEFAULT_PIP)
    }
}
