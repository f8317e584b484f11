pub mod app;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod logging;
pub mod platform;
pub mod screenshot;
pub mod system;
pub mod ui;

// 重新导出主要类型
pub use config::{Config, TraceLevel};
pub use controller::{ControllerState, WindowController, dispatch_shared};
pub use error::{AppError, AppResult, CaptureError, HotkeyError, PaintError, PlatformError};
pub use platform::{WindowEvent, WindowId};
