// Unified Error Handling Module
//
// Every failure inside an event handler stays local to that event: handlers
// turn these into a diagnostic line and carry on with the next message.

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Windows API error: {0}")]
    Windows(String),

    #[error("Platform not supported: {0}")]
    Unsupported(&'static str),
}

/// A single failed platform call.
///
/// `call` is the name of the OS function, `message` the system description of
/// the error it reported (or a fixed note for calls that do not set one).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("{call} failed: {message}")]
    Call {
        call: &'static str,
        message: String,
    },
}

impl PlatformError {
    pub fn call(call: &'static str, message: impl Into<String>) -> Self {
        PlatformError::Call {
            call,
            message: message.into(),
        }
    }

    /// Name of the OS call that failed.
    pub fn call_name(&self) -> &'static str {
        match self {
            PlatformError::Call { call, .. } => call,
        }
    }
}

/// Screen capture errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Screen capture failed: {0}")]
    Platform(#[from] PlatformError),

    #[error("Client area is empty ({width}x{height})")]
    EmptyClientArea { width: i32, height: i32 },
}

/// Paint errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("Paint failed: {0}")]
    Platform(#[from] PlatformError),
}

/// Global hotkey errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    #[error("Hotkey {id} is already registered")]
    AlreadyRegistered { id: i32 },

    #[error("Failed to register hotkey {id}: {source}")]
    Register { id: i32, source: PlatformError },

    #[error("Failed to unregister hotkey {id}: {source}")]
    Unregister { id: i32, source: PlatformError },
}

pub type AppResult<T> = Result<T, AppError>;
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Convert Windows HRESULT to AppError
#[cfg(target_os = "windows")]
impl From<windows::core::Error> for AppError {
    fn from(err: windows::core::Error) -> Self {
        AppError::Windows(format!("{} ({:?})", err.message(), err.code()))
    }
}
