#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod cli;
pub mod display;
pub mod error;
pub mod format;
pub mod pulse;
pub mod tracker;

pub use app::TimerApp;
pub use cli::{Args, Settings};
pub use error::OffsetError;

pub const APP_TITLE: &str = "Steam Play Hours Simulator";
