//! Recording stand-in for the Win32 backend.
//!
//! Every call is appended to a log, every acquisition bumps an open-handle counter and every
//! release drops it again, so tests can check both ordering and balance. Any call can be made to
//! fail on demand.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use game_todo_list::PlatformError;
use game_todo_list::error::PlatformResult;
use game_todo_list::platform::{
    GdiBackend, HotkeyModifiers, KeyCode, PaintSession, Rect, Size, WindowHost, WindowId,
};

pub const WINDOW: WindowId = WindowId::from_raw(0x1234);
/// What every DC has selected before anyone touches it.
pub const STOCK_OBJECT: u32 = 0;
pub const SYSTEM_FONT: u32 = 900;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetDc(Option<WindowId>),
    ReleaseDc(Option<WindowId>, u32),
    CreateCompatibleDc(u32),
    DeleteDc(u32),
    CreateBitmap { dc: u32, size: Size },
    DeleteBitmap(u32),
    SelectBitmap { dc: u32, bitmap: u32 },
    SelectFont { dc: u32, font: u32 },
    Restore { dc: u32, previous: u32 },
    SetStretchMode(u32),
    StretchBlt { dest: u32, dest_rect: Rect, src: u32, src_rect: Rect },
    BitBlt { dest: u32, dest_rect: Rect, src: u32, src_origin: (i32, i32) },
    FillBackground { dc: u32, rect: Rect },
    TextOut { dc: u32, x: i32, y: i32, text: String },
    BeginPaint(u32),
    EndPaint(u32),
    ApplyIcon,
    RegisterHotkey { id: i32, modifiers: HotkeyModifiers, key: KeyCode },
    UnregisterHotkey(i32),
    RequestClose,
    Quit(i32),
}

impl Call {
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            Call::ReleaseDc(..)
                | Call::DeleteDc(_)
                | Call::DeleteBitmap(_)
                | Call::Restore { .. }
                | Call::EndPaint(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    ScreenDc,
    WindowDc,
    CompatibleDc,
    Bitmap,
    SelectBitmap,
    SelectFont,
    StretchBlt,
    BitBlt,
    FillBackground,
    SystemFont,
    TextOut,
    BeginPaint,
    ClientRect,
    Icon,
    Register(i32),
    Unregister(i32),
    RequestClose,
}

pub struct FakePlatform {
    screen: Cell<Size>,
    client: Cell<Rect>,
    next_handle: Cell<u32>,
    open: Cell<i64>,
    selected: RefCell<HashMap<u32, u32>>,
    failures: RefCell<Vec<FailPoint>>,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new(Size::new(1920, 1080), Rect::new(0, 0, 384, 361))
    }
}

impl FakePlatform {
    pub fn new(screen: Size, client: Rect) -> Self {
        Self {
            screen: Cell::new(screen),
            client: Cell::new(client),
            next_handle: Cell::new(1),
            open: Cell::new(0),
            selected: RefCell::new(HashMap::new()),
            failures: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn set_client(&self, client: Rect) {
        self.client.set(client);
    }

    pub fn fail(&self, point: FailPoint) {
        self.failures.borrow_mut().push(point);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| pred(call)).count()
    }

    /// Acquisitions not yet matched by a release.
    pub fn outstanding(&self) -> i64 {
        self.open.get()
    }

    /// Object currently selected into `dc`.
    pub fn selection(&self, dc: u32) -> u32 {
        self.selected
            .borrow()
            .get(&dc)
            .copied()
            .unwrap_or(STOCK_OBJECT)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check(&self, point: FailPoint, call: &'static str) -> PlatformResult<()> {
        if self.failures.borrow().contains(&point) {
            Err(PlatformError::call(call, "injected failure"))
        } else {
            Ok(())
        }
    }

    fn handle(&self) -> u32 {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        handle
    }

    fn acquire(&self) -> u32 {
        self.open.set(self.open.get() + 1);
        self.handle()
    }

    fn release(&self) {
        self.open.set(self.open.get() - 1);
    }

    fn select(&self, dc: u32, object: u32) -> u32 {
        self.open.set(self.open.get() + 1);
        self.selected
            .borrow_mut()
            .insert(dc, object)
            .unwrap_or(STOCK_OBJECT)
    }
}

impl GdiBackend for FakePlatform {
    type Dc = u32;
    type Bitmap = u32;
    type Object = u32;
    type Font = u32;
    type PaintToken = u32;

    fn screen_size(&self) -> Size {
        self.screen.get()
    }

    fn get_dc(&self, window: Option<WindowId>) -> PlatformResult<u32> {
        self.record(Call::GetDc(window));
        let point = match window {
            Some(_) => FailPoint::WindowDc,
            None => FailPoint::ScreenDc,
        };
        self.check(point, "GetDC")?;
        Ok(self.acquire())
    }

    fn release_dc(&self, window: Option<WindowId>, dc: u32) {
        self.record(Call::ReleaseDc(window, dc));
        self.release();
    }

    fn create_compatible_dc(&self, dc: u32) -> PlatformResult<u32> {
        self.record(Call::CreateCompatibleDc(dc));
        self.check(FailPoint::CompatibleDc, "CreateCompatibleDC")?;
        Ok(self.acquire())
    }

    fn delete_dc(&self, dc: u32) {
        self.record(Call::DeleteDc(dc));
        self.release();
    }

    fn create_compatible_bitmap(&self, dc: u32, size: Size) -> PlatformResult<u32> {
        self.record(Call::CreateBitmap { dc, size });
        self.check(FailPoint::Bitmap, "CreateCompatibleBitmap")?;
        Ok(self.acquire())
    }

    fn delete_bitmap(&self, bitmap: u32) {
        self.record(Call::DeleteBitmap(bitmap));
        self.release();
    }

    fn select_bitmap(&self, dc: u32, bitmap: u32) -> PlatformResult<u32> {
        self.record(Call::SelectBitmap { dc, bitmap });
        self.check(FailPoint::SelectBitmap, "SelectObject")?;
        Ok(self.select(dc, bitmap))
    }

    fn select_font(&self, dc: u32, font: u32) -> PlatformResult<u32> {
        self.record(Call::SelectFont { dc, font });
        self.check(FailPoint::SelectFont, "SelectObject")?;
        Ok(self.select(dc, font))
    }

    fn restore_object(&self, dc: u32, previous: u32) {
        self.record(Call::Restore { dc, previous });
        self.selected.borrow_mut().insert(dc, previous);
        self.release();
    }

    fn set_best_stretch_mode(&self, dc: u32) {
        self.record(Call::SetStretchMode(dc));
    }

    fn stretch_blt(
        &self,
        dest: u32,
        dest_rect: Rect,
        src: u32,
        src_rect: Rect,
    ) -> PlatformResult<()> {
        self.record(Call::StretchBlt {
            dest,
            dest_rect,
            src,
            src_rect,
        });
        self.check(FailPoint::StretchBlt, "StretchBlt")
    }

    fn bit_blt(
        &self,
        dest: u32,
        dest_rect: Rect,
        src: u32,
        src_origin: (i32, i32),
    ) -> PlatformResult<()> {
        self.record(Call::BitBlt {
            dest,
            dest_rect,
            src,
            src_origin,
        });
        self.check(FailPoint::BitBlt, "BitBlt")
    }

    fn fill_background(&self, dc: u32, rect: Rect) -> PlatformResult<()> {
        self.record(Call::FillBackground { dc, rect });
        self.check(FailPoint::FillBackground, "FillRect")
    }

    fn system_font(&self) -> PlatformResult<u32> {
        self.check(FailPoint::SystemFont, "GetStockObject")?;
        Ok(SYSTEM_FONT)
    }

    fn text_out(&self, dc: u32, x: i32, y: i32, text: &str) -> PlatformResult<Size> {
        self.record(Call::TextOut {
            dc,
            x,
            y,
            text: text.to_string(),
        });
        self.check(FailPoint::TextOut, "TextOutW")?;
        Ok(Size::new(8 * text.chars().count() as i32, 16))
    }

    fn begin_paint(&self, _window: WindowId) -> PlatformResult<PaintSession<u32, u32>> {
        self.check(FailPoint::BeginPaint, "BeginPaint")?;
        let dc = self.acquire();
        self.record(Call::BeginPaint(dc));
        Ok(PaintSession {
            dc,
            dirty: self.client.get(),
            token: dc,
        })
    }

    fn end_paint(&self, _window: WindowId, session: &PaintSession<u32, u32>) {
        self.record(Call::EndPaint(session.token));
        self.release();
    }
}

impl WindowHost for FakePlatform {
    fn client_rect(&self, _window: WindowId) -> PlatformResult<Rect> {
        self.check(FailPoint::ClientRect, "GetClientRect")?;
        Ok(self.client.get())
    }

    fn apply_app_icon(&self, _window: WindowId) -> PlatformResult<()> {
        self.record(Call::ApplyIcon);
        self.check(FailPoint::Icon, "LoadIconW")
    }

    fn register_hotkey(
        &self,
        _window: WindowId,
        id: i32,
        modifiers: HotkeyModifiers,
        key: KeyCode,
    ) -> PlatformResult<()> {
        self.record(Call::RegisterHotkey { id, modifiers, key });
        self.check(FailPoint::Register(id), "RegisterHotKey")
    }

    fn unregister_hotkey(&self, _window: WindowId, id: i32) -> PlatformResult<()> {
        self.record(Call::UnregisterHotkey(id));
        self.check(FailPoint::Unregister(id), "UnregisterHotKey")
    }

    fn request_close(&self, _window: WindowId) -> PlatformResult<()> {
        self.record(Call::RequestClose);
        self.check(FailPoint::RequestClose, "PostMessageW")
    }

    fn quit_message_loop(&self, exit_code: i32) {
        self.record(Call::Quit(exit_code));
    }
}
