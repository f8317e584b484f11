use std::{ffi::OsStr, ffi::c_void, iter::once, os::windows::ffi::OsStrExt};

use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::PCWSTR;

use crate::error::PlatformError;

/// Error for a call that reported failure through `GetLastError`.
pub fn last_error(call: &'static str) -> PlatformError {
    // SAFETY: GetLastError only reads thread-local state.
    let code = unsafe { GetLastError() };
    let message = windows::core::Error::from(code.to_hresult()).message();
    PlatformError::call(call, format!("{message} ({:#x})", code.0))
}

/// Error for a `windows::core::Result` failure.
pub fn win_error(call: &'static str, err: windows::core::Error) -> PlatformError {
    PlatformError::call(call, format!("{} ({:?})", err.message(), err.code()))
}

#[inline]
pub fn get_window_user_data(hwnd: HWND) -> isize {
    unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) }
}

#[inline]
pub fn set_window_user_data(hwnd: HWND, data: isize) -> isize {
    unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, data) }
}

#[inline]
pub fn def_window_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

#[inline]
pub fn get_module_handle() -> windows::core::Result<HMODULE> {
    unsafe { GetModuleHandleW(None) }
}

#[inline]
pub fn load_cursor_arrow() -> windows::core::Result<HCURSOR> {
    unsafe { LoadCursorW(None, IDC_ARROW) }
}

/// Register a window class with the default window background brush.
pub fn register_window_class(
    class_name: &[u16],
    window_proc: unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT,
) -> windows::core::Result<()> {
    let instance = get_module_handle()?;

    let window_class = WNDCLASSW {
        lpfnWndProc: Some(window_proc),
        hInstance: instance.into(),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        hbrBackground: window_background_brush(),
        hCursor: load_cursor_arrow()?,
        style: CS_HREDRAW | CS_VREDRAW,
        ..Default::default()
    };

    if unsafe { RegisterClassW(&window_class) } == 0 {
        // SAFETY: GetLastError only reads thread-local state.
        let code = unsafe { GetLastError() };
        return Err(windows::core::Error::from(code.to_hresult()));
    }
    Ok(())
}

/// Create an overlapped top-level window.
pub fn create_overlapped_window(
    class_name: &[u16],
    title: &[u16],
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    create_params: Option<*const c_void>,
) -> windows::core::Result<HWND> {
    let instance = get_module_handle()?;
    unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            x,
            y,
            width,
            height,
            None,
            None,
            Some(instance.into()),
            create_params,
        )
    }
}

/// 显示窗口
#[inline]
pub fn show_window(hwnd: HWND) {
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOWDEFAULT);
    }
}

/// `COLOR_WINDOW + 1`, the system convention for "default window background" brushes.
#[inline]
pub fn window_background_brush() -> HBRUSH {
    HBRUSH((COLOR_WINDOW.0 as usize + 1) as *mut c_void)
}

/// 退出消息循环
#[inline]
pub fn quit_message_loop(exit_code: i32) {
    unsafe {
        PostQuitMessage(exit_code);
    }
}

/// Pump messages until `WM_QUIT`; returns its exit code.
pub fn run_message_loop() -> i32 {
    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
    msg.wParam.0 as i32
}

/// 发送自定义消息到窗口
#[inline]
pub fn post_message(
    hwnd: HWND,
    msg: u32,
    wparam: usize,
    lparam: isize,
) -> windows::core::Result<()> {
    unsafe { PostMessageW(Some(hwnd), msg, WPARAM(wparam), LPARAM(lparam)) }
}

/// 发送同步消息到窗口
#[inline]
pub fn send_message(hwnd: HWND, msg: u32, wparam: usize, lparam: isize) -> LRESULT {
    unsafe { SendMessageW(hwnd, msg, Some(WPARAM(wparam)), Some(LPARAM(lparam))) }
}

/// 获取客户区矩形
#[inline]
pub fn get_client_rect(hwnd: HWND) -> windows::core::Result<RECT> {
    let mut rect = RECT::default();
    unsafe {
        GetClientRect(hwnd, &mut rect)?;
    }
    Ok(rect)
}

/// Convert a Rust string to a NUL-terminated UTF-16 buffer for Win32 APIs.
#[inline]
pub fn to_wide_chars(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(once(0)).collect()
}

/// UTF-16 without the terminating NUL, for APIs that take a length.
#[inline]
pub fn to_wide_slice(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().collect()
}
