use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, RegisterHotKey, UnregisterHotKey,
};

/// Register a global hotkey for `hwnd`.
///
/// `modifiers` is a Win32 HOT_KEY_MODIFIERS bitmask.
pub fn register_hotkey(
    hwnd: HWND,
    hotkey_id: i32,
    modifiers: u32,
    key: u32,
) -> windows::core::Result<()> {
    // SAFETY: RegisterHotKey is an OS API. Caller provides the target HWND and key/modifier values.
    unsafe { RegisterHotKey(Some(hwnd), hotkey_id, HOT_KEY_MODIFIERS(modifiers), key) }
}

/// Unregister a global hotkey associated with a window.
pub fn unregister_hotkey(hwnd: HWND, hotkey_id: i32) -> windows::core::Result<()> {
    // SAFETY: UnregisterHotKey is an OS API.
    unsafe { UnregisterHotKey(Some(hwnd), hotkey_id) }
}
