//! 配置模块
//!
//! Startup configuration: read once from the environment before the window exists and never
//! mutated afterwards.

mod trace;

pub use trace::{TRACE_ENV_VAR, TraceLevel, parse_leading_int};

use crate::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH, WINDOW_X, WINDOW_Y};

/// Placement and title of the main window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            x: WINDOW_X,
            y: WINDOW_Y,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub trace_level: TraceLevel,
    pub window: WindowOptions,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let trace_level = TraceLevel::from_env_value(lookup(TRACE_ENV_VAR).as_deref());
        Self {
            trace_level,
            window: WindowOptions::default(),
        }
    }
}
