use std::time::Duration;

use clap::Parser;
use eframe::egui;
use eframe::egui::viewport::WindowLevel;

use crate::error::OffsetError;
use crate::tracker::{offset_from_parts, offset_from_secs};
use crate::APP_TITLE;

/// A placeholder window that shows a continuously advancing DD:HH:MM:SS timer.
#[derive(Debug, Parser)]
#[command(name = "play-hours-timer", version)]
pub struct Args {
    /// Pretend the timer already ran this many hours (adds to --offset-seconds)
    #[arg(long, value_name = "HOURS", default_value_t = 0.0,
          value_parser = parse_offset, allow_negative_numbers = true)]
    pub offset_hours: f64,

    /// Pretend the timer already ran this many seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0,
          value_parser = parse_offset, allow_negative_numbers = true)]
    pub offset_seconds: f64,

    /// Disable the subtle accent colour pulse
    #[arg(long)]
    pub no_accent_pulse: bool,

    /// Use a more compact window size
    #[arg(long)]
    pub compact: bool,

    /// Keep the window above other windows from the start
    #[arg(long)]
    pub always_on_top: bool,
}

fn parse_offset(s: &str) -> Result<f64, OffsetError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| OffsetError::NotANumber(s.to_string()))?;
    offset_from_secs(value)?;
    Ok(value)
}

impl Args {
    pub fn into_settings(self) -> Result<Settings, OffsetError> {
        Ok(Settings {
            offset: offset_from_parts(self.offset_hours, self.offset_seconds)?,
            accent_pulse: !self.no_accent_pulse,
            compact: self.compact,
            always_on_top: self.always_on_top,
        })
    }
}

/// Startup configuration, fixed for the life of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub offset: Duration,
    pub accent_pulse: bool,
    pub compact: bool,
    pub always_on_top: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            offset: Duration::ZERO,
            accent_pulse: true,
            compact: false,
            always_on_top: false,
        }
    }
}

impl Settings {
    pub fn min_size(&self) -> [f32; 2] {
        if self.compact {
            [400.0, 180.0]
        } else {
            [520.0, 260.0]
        }
    }

    pub fn number_size(&self) -> f32 {
        if self.compact {
            38.0
        } else {
            50.0
        }
    }

    pub fn caption_size(&self) -> f32 {
        if self.compact {
            10.0
        } else {
            11.0
        }
    }

    pub fn viewport(&self) -> egui::ViewportBuilder {
        let level = if self.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(self.min_size())
            .with_min_inner_size(self.min_size())
            .with_window_level(level)
    }
}
