use crate::error::PlatformResult;
use crate::platform::{GdiBackend, Rect, Size};

/// The part of a DC that a piece of drawing code should stay inside.
///
/// Drawing functions take a cursor instead of a child window, so each region of the client area
/// can be drawn by ordinary composable functions. Copying a cursor has no side effects; it does
/// not own the DC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCursor<D> {
    pub dc: D,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl<D: Copy> DrawCursor<D> {
    /// Cursor at the origin covering the whole client rectangle.
    pub fn new(dc: D, client: Rect) -> Self {
        Self {
            dc,
            x: 0,
            y: 0,
            w: client.width(),
            h: client.height(),
        }
    }

    /// Move the top-left corner in by `(dx, dy)`, shrinking the area to match.
    pub fn inset(mut self, dx: i32, dy: i32) -> Self {
        self.x += dx;
        self.y += dy;
        self.w = (self.w - dx).max(0);
        self.h = (self.h - dy).max(0);
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.w, self.h)
    }

    pub fn fill_background<B>(&self, backend: &B) -> PlatformResult<()>
    where
        B: GdiBackend<Dc = D>,
    {
        backend.fill_background(self.dc, self.rect())
    }

    /// Draw `text` at `(x, y)` and return its extent.
    pub fn text_out<B>(&self, backend: &B, text: &str) -> PlatformResult<Size>
    where
        B: GdiBackend<Dc = D>,
    {
        backend.text_out(self.dc, self.x, self.y, text)
    }

    /// Draw `text` and move down by its height.
    pub fn text_out_inc_y<B>(&mut self, backend: &B, text: &str) -> PlatformResult<Size>
    where
        B: GdiBackend<Dc = D>,
    {
        let extent = self.text_out(backend, text)?;
        self.y += extent.height;
        Ok(extent)
    }
}
