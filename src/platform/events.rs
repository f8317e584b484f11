/// Opaque window identifier.
///
/// Keeps platform window handles (e.g. Win32 `HWND`) out of the controller. Platform backends
/// convert to/from raw handles as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

impl WindowId {
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> usize {
        self.0
    }
}

/// Virtual key code (platform-agnostic key identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const UP: KeyCode = KeyCode(0x26);
    pub const A: KeyCode = KeyCode(0x41);
    pub const Q: KeyCode = KeyCode(0x51);
    pub const F5: KeyCode = KeyCode(0x74);
}

/// Hotkey modifier bitmask, same bit layout as Win32 `MOD_*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotkeyModifiers(pub u32);

impl HotkeyModifiers {
    pub const NONE: HotkeyModifiers = HotkeyModifiers(0);
}

/// One event delivered to the window, already decoded from the raw message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window was just allocated and is not yet shown.
    Created,
    /// The window is being destroyed; last event of its life.
    Destroyed,
    /// Part of the client area needs repainting.
    Paint,
    /// A registered global hotkey fired.
    Hotkey { id: i32 },
    /// A key was pressed while the window had focus.
    KeyDown { key: KeyCode },
    /// Anything else; always left to the default window procedure.
    Other { msg: u32, wparam: usize, lparam: isize },
}
