use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    WM_CREATE, WM_DESTROY, WM_HOTKEY, WM_KEYDOWN, WM_PAINT,
};

use crate::platform::{KeyCode, WindowEvent};

/// Decode raw Win32 window messages into [`WindowEvent`]s.
pub struct EventConverter;

impl EventConverter {
    /// Messages the controller does not know come back as [`WindowEvent::Other`].
    pub fn convert(msg: u32, wparam: WPARAM, lparam: LPARAM) -> WindowEvent {
        match msg {
            WM_CREATE => WindowEvent::Created,
            WM_DESTROY => WindowEvent::Destroyed,
            WM_PAINT => WindowEvent::Paint,
            WM_HOTKEY => WindowEvent::Hotkey {
                id: wparam.0 as i32,
            },
            WM_KEYDOWN => WindowEvent::KeyDown {
                key: KeyCode(wparam.0 as u32),
            },
            _ => WindowEvent::Other {
                msg,
                wparam: wparam.0,
                lparam: lparam.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::WM_MOUSEMOVE;

    #[test]
    fn hotkey_id_comes_from_wparam() {
        let event = EventConverter::convert(WM_HOTKEY, WPARAM(1), LPARAM(0x0074_0000));
        assert_eq!(event, WindowEvent::Hotkey { id: 1 });
    }

    #[test]
    fn keydown_carries_virtual_key() {
        let event = EventConverter::convert(WM_KEYDOWN, WPARAM(0x51), LPARAM(0));
        assert_eq!(event, WindowEvent::KeyDown { key: KeyCode::Q });
    }

    #[test]
    fn unknown_messages_pass_through() {
        let event = EventConverter::convert(WM_MOUSEMOVE, WPARAM(0), LPARAM(0x0010_0020));
        assert_eq!(
            event,
            WindowEvent::Other {
                msg: WM_MOUSEMOVE,
                wparam: 0,
                lparam: 0x0010_0020,
            }
        );
    }
}
