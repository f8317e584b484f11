//! 系统集成模块
//!
//! - [`HotkeyManager`](hotkeys::HotkeyManager): global hotkeys tied to the window lifetime

pub mod hotkeys;

pub use hotkeys::{HotkeyAction, HotkeyBinding, HotkeyManager};
