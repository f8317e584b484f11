// Windows GDI backend
//
// Thin, one-call-per-method wrappers; all pairing of acquire/release lives in the scope guards.

use tracing::warn;
use windows::Win32::Foundation::{RECT, SIZE};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, DeleteDC, DeleteObject,
    EndPaint, FillRect, GetDC, GetStockObject, GetTextExtentPoint32W, HALFTONE, HBITMAP, HDC,
    HFONT, HGDIOBJ, PAINTSTRUCT, ReleaseDC, SRCCOPY, SYSTEM_FONT, SelectObject,
    SetStretchBltMode, StretchBlt, TextOutW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    ICON_BIG, ICON_SMALL, LoadIconW, WM_CLOSE, WM_SETICON,
};
use windows::core::PCWSTR;

use super::{hotkeys, hwnd, system, win_api};
use crate::constants::APP_ICON_RESOURCE_ID;
use crate::error::{PlatformError, PlatformResult};
use crate::platform::{
    GdiBackend, HotkeyModifiers, KeyCode, PaintSession, Rect, Size, WindowHost, WindowId,
};

/// GDI calls that do not set `GetLastError` only tell us that they failed.
const NO_LAST_ERROR: &str = "call returned no handle";

fn to_rect(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

fn to_win_rect(rect: Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}

/// The Win32 implementation of both platform seams.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Platform;

impl Win32Platform {
    pub fn new() -> Self {
        Self
    }
}

impl GdiBackend for Win32Platform {
    type Dc = HDC;
    type Bitmap = HBITMAP;
    type Object = HGDIOBJ;
    type Font = HFONT;
    type PaintToken = PAINTSTRUCT;

    fn screen_size(&self) -> Size {
        let (width, height) = system::get_screen_size();
        Size::new(width, height)
    }

    fn get_dc(&self, window: Option<WindowId>) -> PlatformResult<HDC> {
        let dc = unsafe { GetDC(window.map(hwnd)) };
        if dc.is_invalid() {
            return Err(PlatformError::call("GetDC", NO_LAST_ERROR));
        }
        Ok(dc)
    }

    fn release_dc(&self, window: Option<WindowId>, dc: HDC) {
        if unsafe { ReleaseDC(window.map(hwnd), dc) } == 0 {
            warn!("ReleaseDC failed");
        }
    }

    fn create_compatible_dc(&self, dc: HDC) -> PlatformResult<HDC> {
        let memory_dc = unsafe { CreateCompatibleDC(Some(dc)) };
        if memory_dc.is_invalid() {
            return Err(PlatformError::call("CreateCompatibleDC", NO_LAST_ERROR));
        }
        Ok(memory_dc)
    }

    fn delete_dc(&self, dc: HDC) {
        if !unsafe { DeleteDC(dc) }.as_bool() {
            warn!("DeleteDC failed");
        }
    }

    fn create_compatible_bitmap(&self, dc: HDC, size: Size) -> PlatformResult<HBITMAP> {
        let bitmap = unsafe { CreateCompatibleBitmap(dc, size.width, size.height) };
        if bitmap.is_invalid() {
            return Err(PlatformError::call("CreateCompatibleBitmap", NO_LAST_ERROR));
        }
        Ok(bitmap)
    }

    fn delete_bitmap(&self, bitmap: HBITMAP) {
        if !unsafe { DeleteObject(bitmap.into()) }.as_bool() {
            warn!("DeleteObject failed");
        }
    }

    fn select_bitmap(&self, dc: HDC, bitmap: HBITMAP) -> PlatformResult<HGDIOBJ> {
        let previous = unsafe { SelectObject(dc, bitmap.into()) };
        if previous.is_invalid() {
            return Err(PlatformError::call("SelectObject", NO_LAST_ERROR));
        }
        Ok(previous)
    }

    fn select_font(&self, dc: HDC, font: HFONT) -> PlatformResult<HGDIOBJ> {
        let previous = unsafe { SelectObject(dc, font.into()) };
        if previous.is_invalid() {
            return Err(PlatformError::call("SelectObject", NO_LAST_ERROR));
        }
        Ok(previous)
    }

    fn restore_object(&self, dc: HDC, previous: HGDIOBJ) {
        unsafe {
            SelectObject(dc, previous);
        }
    }

    fn set_best_stretch_mode(&self, dc: HDC) {
        // HALFTONE is the documented highest quality mode.
        unsafe {
            SetStretchBltMode(dc, HALFTONE);
        }
    }

    fn stretch_blt(
        &self,
        dest: HDC,
        dest_rect: Rect,
        src: HDC,
        src_rect: Rect,
    ) -> PlatformResult<()> {
        let ok = unsafe {
            StretchBlt(
                dest,
                dest_rect.left,
                dest_rect.top,
                dest_rect.width(),
                dest_rect.height(),
                Some(src),
                src_rect.left,
                src_rect.top,
                src_rect.width(),
                src_rect.height(),
                SRCCOPY,
            )
        };
        if !ok.as_bool() {
            return Err(win_api::last_error("StretchBlt"));
        }
        Ok(())
    }

    fn bit_blt(
        &self,
        dest: HDC,
        dest_rect: Rect,
        src: HDC,
        src_origin: (i32, i32),
    ) -> PlatformResult<()> {
        unsafe {
            BitBlt(
                dest,
                dest_rect.left,
                dest_rect.top,
                dest_rect.width(),
                dest_rect.height(),
                Some(src),
                src_origin.0,
                src_origin.1,
                SRCCOPY,
            )
        }
        .map_err(|err| win_api::win_error("BitBlt", err))
    }

    fn fill_background(&self, dc: HDC, rect: Rect) -> PlatformResult<()> {
        let rect = to_win_rect(rect);
        if unsafe { FillRect(dc, &rect, win_api::window_background_brush()) } == 0 {
            return Err(win_api::last_error("FillRect"));
        }
        Ok(())
    }

    fn system_font(&self) -> PlatformResult<HFONT> {
        let font = unsafe { GetStockObject(SYSTEM_FONT) };
        if font.is_invalid() {
            return Err(PlatformError::call("GetStockObject", NO_LAST_ERROR));
        }
        Ok(HFONT(font.0))
    }

    fn text_out(&self, dc: HDC, x: i32, y: i32, text: &str) -> PlatformResult<Size> {
        let wide = win_api::to_wide_slice(text);
        if !unsafe { TextOutW(dc, x, y, &wide) }.as_bool() {
            return Err(win_api::last_error("TextOutW"));
        }

        let mut extent = SIZE::default();
        if !unsafe { GetTextExtentPoint32W(dc, &wide, &mut extent) }.as_bool() {
            return Err(win_api::last_error("GetTextExtentPoint32W"));
        }
        Ok(Size::new(extent.cx, extent.cy))
    }

    fn begin_paint(&self, window: WindowId) -> PlatformResult<PaintSession<HDC, PAINTSTRUCT>> {
        let mut ps = PAINTSTRUCT::default();
        let dc = unsafe { BeginPaint(hwnd(window), &mut ps) };
        if dc.is_invalid() {
            return Err(PlatformError::call("BeginPaint", NO_LAST_ERROR));
        }
        Ok(PaintSession {
            dc,
            dirty: to_rect(ps.rcPaint),
            token: ps,
        })
    }

    fn end_paint(&self, window: WindowId, session: &PaintSession<HDC, PAINTSTRUCT>) {
        unsafe {
            let _ = EndPaint(hwnd(window), &session.token);
        }
    }
}

impl WindowHost for Win32Platform {
    fn client_rect(&self, window: WindowId) -> PlatformResult<Rect> {
        win_api::get_client_rect(hwnd(window))
            .map(to_rect)
            .map_err(|err| win_api::win_error("GetClientRect", err))
    }

    fn apply_app_icon(&self, window: WindowId) -> PlatformResult<()> {
        let instance = win_api::get_module_handle()
            .map_err(|err| win_api::win_error("GetModuleHandleW", err))?;
        // MAKEINTRESOURCE
        let resource = PCWSTR(APP_ICON_RESOURCE_ID as usize as *const u16);
        let icon = unsafe { LoadIconW(Some(instance.into()), resource) }
            .map_err(|err| win_api::win_error("LoadIconW", err))?;

        let hwnd = hwnd(window);
        win_api::send_message(hwnd, WM_SETICON, ICON_SMALL as usize, icon.0 as isize);
        win_api::send_message(hwnd, WM_SETICON, ICON_BIG as usize, icon.0 as isize);
        Ok(())
    }

    fn register_hotkey(
        &self,
        window: WindowId,
        id: i32,
        modifiers: HotkeyModifiers,
        key: KeyCode,
    ) -> PlatformResult<()> {
        hotkeys::register_hotkey(hwnd(window), id, modifiers.0, key.0)
            .map_err(|err| win_api::win_error("RegisterHotKey", err))
    }

    fn unregister_hotkey(&self, window: WindowId, id: i32) -> PlatformResult<()> {
        hotkeys::unregister_hotkey(hwnd(window), id)
            .map_err(|err| win_api::win_error("UnregisterHotKey", err))
    }

    fn request_close(&self, window: WindowId) -> PlatformResult<()> {
        win_api::post_message(hwnd(window), WM_CLOSE, 0, 0)
            .map_err(|err| win_api::win_error("PostMessageW", err))
    }

    fn quit_message_loop(&self, exit_code: i32) {
        win_api::quit_message_loop(exit_code);
    }
}
