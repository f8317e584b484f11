use chrono::Local;
use tracing::debug;

use super::layout::{height_for_width, letterbox};
use crate::error::CaptureError;
use crate::platform::{
    GdiBackend, ManagedBitmap, MemoryDc, Rect, SelectedObject, Size, WindowDc,
};

/// Timestamp layout, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A full-resolution copy of the screen, kept for later drawing.
///
/// The bitmap belongs to the screenshot and is deleted when it is dropped.
pub struct Screenshot<'a, B: GdiBackend> {
    backend: &'a B,
    bitmap: ManagedBitmap<'a, B>,
    size: Size,
    timestamp: String,
}

impl<'a, B: GdiBackend> Screenshot<'a, B> {
    /// Copy the current screen contents 1:1.
    pub fn capture(backend: &'a B) -> Result<Self, CaptureError> {
        let size = backend.screen_size();
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let screen_dc = WindowDc::screen(backend)?;
        let memory_dc = MemoryDc::compatible_with(backend, screen_dc.handle())?;
        let bitmap = ManagedBitmap::compatible_with(backend, screen_dc.handle(), size)?;
        {
            let _selected = SelectedObject::bitmap(backend, memory_dc.handle(), bitmap.handle())?;
            backend.bit_blt(
                memory_dc.handle(),
                Rect::from_size(size),
                screen_dc.handle(),
                (0, 0),
            )?;
        }

        debug!(width = size.width, height = size.height, %timestamp, "took screenshot");

        Ok(Self {
            backend,
            bitmap,
            size,
            timestamp,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// When the shot was taken, `YYYY-MM-DD hh:mm:ss`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn bitmap(&self) -> B::Bitmap {
        self.bitmap.handle()
    }

    /// Height that keeps the screenshot's aspect ratio at `width`.
    pub fn height_for_width(&self, width: i32) -> i32 {
        height_for_width(self.size, width)
    }

    /// Draw into `area` of `dc`, letterboxed with the window background.
    ///
    /// Empty areas are ignored; an empty screenshot just clears the area.
    pub fn draw_to(&self, dc: B::Dc, area: Rect) -> Result<(), CaptureError> {
        if area.size().is_empty() {
            return Ok(());
        }

        if self.size.is_empty() {
            self.backend.fill_background(dc, area)?;
            return Ok(());
        }

        let memory_dc = MemoryDc::compatible_with(self.backend, dc)?;
        let _selected =
            SelectedObject::bitmap(self.backend, memory_dc.handle(), self.bitmap.handle())?;
        self.backend.set_best_stretch_mode(memory_dc.handle());

        let layout = letterbox(self.size, area);
        for bar in layout.bars.into_iter().flatten() {
            self.backend.fill_background(dc, bar)?;
        }

        self.backend.stretch_blt(
            dc,
            layout.image,
            memory_dc.handle(),
            Rect::from_size(self.size),
        )?;
        Ok(())
    }

    /// Draw at `(x, y)` with width `width` and the matching height; returns that height.
    pub fn draw_to_auto_height(
        &self,
        dc: B::Dc,
        x: i32,
        y: i32,
        width: i32,
    ) -> Result<i32, CaptureError> {
        let height = self.height_for_width(width);
        self.draw_to(dc, Rect::from_xywh(x, y, width, height))?;
        Ok(height)
    }
}
