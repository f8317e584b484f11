// 屏幕捕获功能
//
// Full-screen capture scaled into the window's client area. The copy goes through an off-screen
// bitmap first so the window never shows a half-updated frame.

use tracing::trace;

use crate::error::CaptureError;
use crate::platform::{
    ManagedBitmap, MemoryDc, Platform, Rect, SelectedObject, Size, WindowDc, WindowId,
};

/// Sizes involved in one successful capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureReport {
    /// Primary display extent that was read.
    pub source: Size,
    /// Client area the image was scaled to.
    pub dest: Size,
}

/// Copy the whole screen into `window`, stretched to its current client area.
///
/// The capture is scale-to-fit, not 1:1: the off-screen surface is exactly the client size and the
/// full primary display is stretched into it. On failure the remaining steps are skipped and
/// every handle acquired so far is released.
pub fn capture_to_window<P: Platform>(
    platform: &P,
    window: WindowId,
) -> Result<CaptureReport, CaptureError> {
    let screen_dc = WindowDc::screen(platform)?;
    let window_dc = WindowDc::window(platform, window)?;
    let memory_dc = MemoryDc::compatible_with(platform, window_dc.handle())?;

    let client = platform.client_rect(window)?.size();
    if client.is_empty() {
        return Err(CaptureError::EmptyClientArea {
            width: client.width,
            height: client.height,
        });
    }

    let bitmap = ManagedBitmap::compatible_with(platform, window_dc.handle(), client)?;
    let _selected = SelectedObject::bitmap(platform, memory_dc.handle(), bitmap.handle())?;

    platform.set_best_stretch_mode(memory_dc.handle());

    let screen = platform.screen_size();
    let dest_rect = Rect::from_size(client);
    platform.stretch_blt(
        memory_dc.handle(),
        dest_rect,
        screen_dc.handle(),
        Rect::from_size(screen),
    )?;
    platform.bit_blt(window_dc.handle(), dest_rect, memory_dc.handle(), (0, 0))?;

    trace!(
        screen_width = screen.width,
        screen_height = screen.height,
        width = client.width,
        height = client.height,
        "captured screen into window"
    );

    Ok(CaptureReport {
        source: screen,
        dest: client,
    })
}
