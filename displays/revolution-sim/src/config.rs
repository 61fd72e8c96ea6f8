//! Simulator configuration
//!
//! Read from a TOML file:
//!
//! ```toml
//! [face]
//! date_order = "day_first"
//! hide_leading_zero = true
//! clock_style = "twelve_hour"
//!
//! [simulator]
//! scale = 3
//! theme = "lcd_white"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use anyhow::Context;
use embedded_graphics_simulator::BinaryColorTheme;
use revolution_core::Settings;
use serde::Deserialize;

/// Window color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    OledWhite,
    OledBlue,
    LcdWhite,
    LcdGreen,
    LcdBlue,
    Inverted,
}

impl From<Theme> for BinaryColorTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::OledWhite => BinaryColorTheme::OledWhite,
            Theme::OledBlue => BinaryColorTheme::OledBlue,
            Theme::LcdWhite => BinaryColorTheme::LcdWhite,
            Theme::LcdGreen => BinaryColorTheme::LcdGreen,
            Theme::LcdBlue => BinaryColorTheme::LcdBlue,
            Theme::Inverted => BinaryColorTheme::Inverted,
        }
    }
}

/// Window settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Screen pixels per display pixel
    pub scale: u32,
    pub theme: Theme,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            scale: 3,
            theme: Theme::default(),
        }
    }
}

/// Complete simulator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub face: Settings,
    pub simulator: SimulatorConfig,
}

impl SimConfig {
    /// Parse a TOML document
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let config: SimConfig = toml::from_str(input).context("invalid configuration")?;
        anyhow::ensure!(config.simulator.scale > 0, "simulator.scale must be at least 1");
        Ok(config)
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            log::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
