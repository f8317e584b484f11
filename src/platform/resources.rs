//! Scope guards for GDI resources.
//!
//! Each guard owns exactly one acquired handle and performs the matching release in `Drop`, so the
//! release runs on every exit path, including early `?` returns. Guards release in reverse
//! declaration order, which is also the order GDI requires: restore a selection before deleting
//! the object, delete the object before its DC.
//!
//! ```ignore
//! let screen = WindowDc::screen(backend)?;
//! let memory = MemoryDc::compatible_with(backend, screen.handle())?;
//! let bitmap = ManagedBitmap::compatible_with(backend, screen.handle(), size)?;
//! let _selected = SelectedObject::bitmap(backend, memory.handle(), bitmap.handle())?;
//! // ...
//! // leaving the scope: restore selection, DeleteObject, DeleteDC, ReleaseDC
//! ```

use super::events::WindowId;
use super::traits::{GdiBackend, PaintSession, Rect, Size};
use crate::error::PlatformResult;

/// DC obtained with `GetDC`, released with `ReleaseDC`.
#[derive(Debug)]
pub struct WindowDc<'a, B: GdiBackend> {
    backend: &'a B,
    window: Option<WindowId>,
    dc: B::Dc,
}

impl<'a, B: GdiBackend> WindowDc<'a, B> {
    /// DC covering the whole screen.
    pub fn screen(backend: &'a B) -> PlatformResult<Self> {
        Self::acquire(backend, None)
    }

    /// DC of the client area of `window`.
    pub fn window(backend: &'a B, window: WindowId) -> PlatformResult<Self> {
        Self::acquire(backend, Some(window))
    }

    fn acquire(backend: &'a B, window: Option<WindowId>) -> PlatformResult<Self> {
        let dc = backend.get_dc(window)?;
        Ok(Self { backend, window, dc })
    }

    pub fn handle(&self) -> B::Dc {
        self.dc
    }
}

impl<B: GdiBackend> Drop for WindowDc<'_, B> {
    fn drop(&mut self) {
        self.backend.release_dc(self.window, self.dc);
    }
}

/// Memory DC created with `CreateCompatibleDC`, deleted with `DeleteDC`.
///
/// Not for DCs from `GetDC`; those belong in [`WindowDc`].
#[derive(Debug)]
pub struct MemoryDc<'a, B: GdiBackend> {
    backend: &'a B,
    dc: B::Dc,
}

impl<'a, B: GdiBackend> MemoryDc<'a, B> {
    pub fn compatible_with(backend: &'a B, other: B::Dc) -> PlatformResult<Self> {
        let dc = backend.create_compatible_dc(other)?;
        Ok(Self { backend, dc })
    }

    pub fn handle(&self) -> B::Dc {
        self.dc
    }
}

impl<B: GdiBackend> Drop for MemoryDc<'_, B> {
    fn drop(&mut self) {
        self.backend.delete_dc(self.dc);
    }
}

/// Bitmap created with `CreateCompatibleBitmap`, deleted with `DeleteObject`.
#[derive(Debug)]
pub struct ManagedBitmap<'a, B: GdiBackend> {
    backend: &'a B,
    bitmap: B::Bitmap,
}

impl<'a, B: GdiBackend> ManagedBitmap<'a, B> {
    pub fn compatible_with(backend: &'a B, dc: B::Dc, size: Size) -> PlatformResult<Self> {
        let bitmap = backend.create_compatible_bitmap(dc, size)?;
        Ok(Self { backend, bitmap })
    }

    pub fn handle(&self) -> B::Bitmap {
        self.bitmap
    }
}

impl<B: GdiBackend> Drop for ManagedBitmap<'_, B> {
    fn drop(&mut self) {
        self.backend.delete_bitmap(self.bitmap);
    }
}

/// An object selected into a DC; the previous selection comes back on drop.
///
/// Not usable for regions, whose `SelectObject` contract is different.
#[derive(Debug)]
pub struct SelectedObject<'a, B: GdiBackend> {
    backend: &'a B,
    dc: B::Dc,
    previous: B::Object,
}

impl<'a, B: GdiBackend> SelectedObject<'a, B> {
    pub fn bitmap(backend: &'a B, dc: B::Dc, bitmap: B::Bitmap) -> PlatformResult<Self> {
        let previous = backend.select_bitmap(dc, bitmap)?;
        Ok(Self {
            backend,
            dc,
            previous,
        })
    }

    pub fn font(backend: &'a B, dc: B::Dc, font: B::Font) -> PlatformResult<Self> {
        let previous = backend.select_font(dc, font)?;
        Ok(Self {
            backend,
            dc,
            previous,
        })
    }
}

impl<B: GdiBackend> Drop for SelectedObject<'_, B> {
    fn drop(&mut self) {
        self.backend.restore_object(self.dc, self.previous);
    }
}

/// One `BeginPaint`/`EndPaint` cycle.
pub struct PaintGuard<'a, B: GdiBackend> {
    backend: &'a B,
    window: WindowId,
    session: PaintSession<B::Dc, B::PaintToken>,
}

impl<'a, B: GdiBackend> PaintGuard<'a, B> {
    pub fn begin(backend: &'a B, window: WindowId) -> PlatformResult<Self> {
        let session = backend.begin_paint(window)?;
        Ok(Self {
            backend,
            window,
            session,
        })
    }

    pub fn dc(&self) -> B::Dc {
        self.session.dc
    }

    pub fn dirty_rect(&self) -> Rect {
        self.session.dirty
    }
}

impl<B: GdiBackend> Drop for PaintGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.end_paint(self.window, &self.session);
    }
}
