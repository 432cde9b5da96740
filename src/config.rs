//! Runtime configuration loaded from a TOML file.
//!
//! Every field has a default, so a missing file or missing keys are fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::binomial::{BinomialStrategy, MAX_DEGREE};
use crate::control_points::INLINE_CAPACITY;
use crate::draw::Color;

/// Environment variable overriding [`Config::config_path`]
pub const CONFIG_ENV: &str = "NBEZIER_VIZ_CONFIG";

/// File name of the configuration next to the executable
pub const CONFIG_FILE: &str = "nbezier-viz.toml";

/// All tunable values of the playground.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of the canvas
    pub screen_width: f32,
    /// Height of the canvas
    pub screen_height: f32,
    /// Frames per second the event loop is paced to
    pub fps: u32,

    /// Side of the square drawn for control points and samples, also their hit box
    pub marker_size: f32,
    /// Maximum number of control points
    pub capacity: usize,

    /// Sampling step at startup
    pub initial_step: f32,
    /// Change of the sampling step per wheel notch
    pub step_increment: f32,
    /// Lower bound of the sampling step
    pub min_step: f32,
    /// Upper bound of the sampling step
    pub max_step: f32,

    /// How binomial coefficients are obtained
    pub binomial: BinomialStrategy,

    /// Canvas background
    pub background: Color,
    /// Control points and the polygon connecting them
    pub control: Color,
    /// Samples and the interpolated curve
    pub curve: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen_width: 800.0,
            screen_height: 600.0,
            fps: 60,
            marker_size: 15.0,
            capacity: 64,
            initial_step: 0.05,
            step_increment: 0.001,
            min_step: 0.001,
            max_step: 0.999,
            binomial: BinomialStrategy::Direct,
            background: Color(0x353535FF),
            control: Color(0xDA2C38FF),
            curve: Color(0x87C38FFF),
        }
    }
}

impl Config {
    /// Parses and validates a configuration.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content).context("invalid configuration syntax")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing or malformed file yields the defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("loaded configuration from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "ignoring configuration {}, using defaults: {:#}",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "no configuration at {}, using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(err) => {
                log::warn!(
                    "can't read configuration {}, using defaults: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Path of the configuration file.
    ///
    /// Taken from `NBEZIER_VIZ_CONFIG` if set, otherwise `nbezier-viz.toml` next to the executable.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("nbezier-viz"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE)
    }

    /// Checks the invariants the playground relies on.
    pub fn validate(&self) -> anyhow::Result<()> {
        let max_capacity = INLINE_CAPACITY.min(MAX_DEGREE);
        ensure!(
            (1..=max_capacity).contains(&self.capacity),
            "capacity must be between 1 and {}, got {}",
            max_capacity,
            self.capacity
        );
        ensure!(self.fps > 0, "fps must be positive");
        ensure!(
            self.marker_size > 0.0,
            "marker_size must be positive, got {}",
            self.marker_size
        );
        ensure!(
            self.screen_width > 0.0 && self.screen_height > 0.0,
            "screen size must be positive, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            0.0 < self.min_step
                && self.min_step <= self.initial_step
                && self.initial_step <= self.max_step
                && self.max_step <= 1.0,
            "steps must satisfy 0 < min_step <= initial_step <= max_step <= 1, got {} <= {} <= {}",
            self.min_step,
            self.initial_step,
            self.max_step
        );
        ensure!(
            self.step_increment >= 0.0,
            "step_increment must not be negative, got {}",
            self.step_increment
        );
        Ok(())
    }

    /// Restricts a sampling step to `min_step..=max_step`.
    pub fn clamp_step(&self, step: f32) -> f32 {
        num::clamp(step, self.min_step, self.max_step)
    }

    /// Time between two frames, truncated to whole milliseconds.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis((1000.0 / self.fps as f32).floor() as u64)
    }
}
