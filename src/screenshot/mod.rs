//! 截图模块
//!
//! - [`capture`]: full screen stretched into the window (the F5 action)
//! - [`snapshot`]: full-resolution screenshots kept for later drawing
//! - [`layout`]: aspect-ratio fitting

pub mod capture;
pub mod layout;
pub mod snapshot;

pub use capture::{CaptureReport, capture_to_window};
pub use layout::{Letterbox, height_for_width, letterbox};
pub use snapshot::Screenshot;
