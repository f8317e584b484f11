//! Windows 平台特定实现
//!
//! - `gdi`: GDI drawing and window side effects behind the platform traits
//! - `hotkeys`: RegisterHotKey/UnregisterHotKey
//! - `app_runner`: window class, window procedure and message loop
//! - `system`: 系统信息查询

pub mod app_runner;
mod event_converter;
pub mod gdi;
pub mod hotkeys;
pub mod system;
pub mod win_api;

pub use app_runner::run_main_window;
pub use event_converter::EventConverter;
pub use gdi::Win32Platform;

use std::ffi::c_void;

use windows::Win32::Foundation::HWND;

use super::WindowId;

#[inline]
pub fn window_id(hwnd: HWND) -> WindowId {
    WindowId::from_raw(hwnd.0 as usize)
}

#[inline]
pub fn hwnd(window: WindowId) -> HWND {
    HWND(window.raw() as *mut c_void)
}
