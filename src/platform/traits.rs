use std::fmt::Debug;

use super::events::{HotkeyModifiers, KeyCode, WindowId};
use crate::error::PlatformResult;

/// Width/height pair in device units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Rectangle in device units, right/bottom exclusive (Win32 `RECT` layout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at `(x, y)` with the given size.
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Rectangle anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self::from_xywh(0, 0, size.width, size.height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// State captured by `begin_paint`, handed back to `end_paint`.
#[derive(Debug)]
pub struct PaintSession<D, T> {
    pub dc: D,
    /// Region that needs repainting.
    pub dirty: Rect,
    pub token: T,
}

/// GDI-style drawing surface operations.
///
/// Every `create_*`/`get_*`/`select_*` call has a matching release method. Callers never pair
/// them by hand; the guards in [`crate::platform::resources`] do it on drop.
pub trait GdiBackend {
    type Dc: Copy + Debug;
    type Bitmap: Copy + Debug;
    /// Whatever `SelectObject` hands back: the object previously selected in a DC.
    type Object: Copy + Debug;
    type Font: Copy + Debug;
    type PaintToken;

    /// Size of the primary display in pixels.
    fn screen_size(&self) -> Size;

    /// DC for a window, or the whole screen when `window` is `None`.
    fn get_dc(&self, window: Option<WindowId>) -> PlatformResult<Self::Dc>;
    fn release_dc(&self, window: Option<WindowId>, dc: Self::Dc);

    fn create_compatible_dc(&self, dc: Self::Dc) -> PlatformResult<Self::Dc>;
    fn delete_dc(&self, dc: Self::Dc);

    fn create_compatible_bitmap(&self, dc: Self::Dc, size: Size) -> PlatformResult<Self::Bitmap>;
    fn delete_bitmap(&self, bitmap: Self::Bitmap);

    fn select_bitmap(&self, dc: Self::Dc, bitmap: Self::Bitmap) -> PlatformResult<Self::Object>;
    fn select_font(&self, dc: Self::Dc, font: Self::Font) -> PlatformResult<Self::Object>;
    fn restore_object(&self, dc: Self::Dc, previous: Self::Object);

    /// Best-quality stretch mode. No reliable failure signal, so nothing is returned.
    fn set_best_stretch_mode(&self, dc: Self::Dc);

    fn stretch_blt(
        &self,
        dest: Self::Dc,
        dest_rect: Rect,
        src: Self::Dc,
        src_rect: Rect,
    ) -> PlatformResult<()>;

    /// Unscaled copy of `dest_rect.size()` pixels from `src` at `src_origin`.
    fn bit_blt(
        &self,
        dest: Self::Dc,
        dest_rect: Rect,
        src: Self::Dc,
        src_origin: (i32, i32),
    ) -> PlatformResult<()>;

    /// Fill with the default window background colour.
    fn fill_background(&self, dc: Self::Dc, rect: Rect) -> PlatformResult<()>;

    /// The stock system font.
    fn system_font(&self) -> PlatformResult<Self::Font>;

    /// Draw `text` with its top-left corner at `(x, y)` and return its extent.
    fn text_out(&self, dc: Self::Dc, x: i32, y: i32, text: &str) -> PlatformResult<Size>;

    fn begin_paint(
        &self,
        window: WindowId,
    ) -> PlatformResult<PaintSession<Self::Dc, Self::PaintToken>>;
    fn end_paint(&self, window: WindowId, session: &PaintSession<Self::Dc, Self::PaintToken>);
}

/// Window-level side effects the controller needs from the host.
pub trait WindowHost {
    fn client_rect(&self, window: WindowId) -> PlatformResult<Rect>;

    /// Load the process icon and apply it as both the small and the big window icon.
    fn apply_app_icon(&self, window: WindowId) -> PlatformResult<()>;

    fn register_hotkey(
        &self,
        window: WindowId,
        id: i32,
        modifiers: HotkeyModifiers,
        key: KeyCode,
    ) -> PlatformResult<()>;
    fn unregister_hotkey(&self, window: WindowId, id: i32) -> PlatformResult<()>;

    /// Queue a close request to the window (it arrives later as a normal message).
    fn request_close(&self, window: WindowId) -> PlatformResult<()>;

    /// Ask the message loop to stop after the current message.
    fn quit_message_loop(&self, exit_code: i32);
}

/// Everything the controller drives.
pub trait Platform: GdiBackend + WindowHost {}

impl<T: GdiBackend + WindowHost> Platform for T {}
