//! 平台抽象层
//!
//! # 模块结构
//! - [`events`]: window ids, key codes and the decoded event type
//! - [`traits`]: the drawing/window seams the controller is generic over
//! - [`resources`]: scope guards pairing every acquisition with its release
//! - [`windows`]: Win32 implementation (GDI, hotkeys, message loop)

pub mod events;
pub mod resources;
pub mod traits;

#[cfg(target_os = "windows")]
pub mod windows;

pub use events::*;
pub use resources::{ManagedBitmap, MemoryDc, PaintGuard, SelectedObject, WindowDc};
pub use traits::*;
