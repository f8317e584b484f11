use tracing::debug;

use crate::config::Config;
use crate::error::AppResult;

/// Run the overlay until its window is destroyed; returns the process exit code.
#[cfg(target_os = "windows")]
pub fn run(config: &Config) -> AppResult<i32> {
    debug!(trace_level = config.trace_level.value(), "starting");
    let exit_code = crate::platform::windows::run_main_window(&config.window)?;
    debug!("returning from main");
    Ok(exit_code)
}

#[cfg(not(target_os = "windows"))]
pub fn run(config: &Config) -> AppResult<i32> {
    debug!(trace_level = config.trace_level.value(), "starting");
    Err(crate::error::AppError::Unsupported(
        "the overlay window requires Win32",
    ))
}
