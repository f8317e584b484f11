use crate::platform::{HotkeyModifiers, KeyCode};
use crate::system::hotkeys::{HotkeyAction, HotkeyBinding};

pub const WINDOW_CLASS_NAME: &str = "GameTodoListMainWindow";
pub const WINDOW_TITLE: &str = "Game TODO List";

// 窗口初始位置和尺寸
pub const WINDOW_X: i32 = 200;
pub const WINDOW_Y: i32 = 200;
pub const WINDOW_WIDTH: i32 = 400;
pub const WINDOW_HEIGHT: i32 = 400;

/// Resource id of the process icon.
pub const APP_ICON_RESOURCE_ID: u16 = 1;

/// Text drawn until the list itself exists.
pub const PLACEHOLDER_TEXT: &str = "Sample text";
pub const PLACEHOLDER_X: i32 = 10;
pub const PLACEHOLDER_Y: i32 = 10;

pub const CAPTURE_HOTKEY_ID: i32 = 1;
pub const UP_HOTKEY_ID: i32 = 2;

/// F5: capture the screen into the window.
pub const CAPTURE_HOTKEY: HotkeyBinding = HotkeyBinding {
    id: CAPTURE_HOTKEY_ID,
    modifiers: HotkeyModifiers::NONE,
    key: KeyCode::F5,
    action: HotkeyAction::Capture,
};

/// Up arrow: bound but not acted on yet.
pub const UP_HOTKEY: HotkeyBinding = HotkeyBinding {
    id: UP_HOTKEY_ID,
    modifiers: HotkeyModifiers::NONE,
    key: KeyCode::UP,
    action: HotkeyAction::Reserved,
};

/// Registered in this order on window creation.
pub const HOTKEYS: [HotkeyBinding; 2] = [CAPTURE_HOTKEY, UP_HOTKEY];

/// Exit code of the normal destroy path.
pub const EXIT_CODE_OK: i32 = 0;
