//! Main window controller.
//!
//! Owns the window id and turns the decoded event stream into actions. Two states: `Live` from
//! creation until destruction, `Terminated` afterwards. Nothing here ever ends the process except
//! the destroy path; every other failure is logged and the next event is processed normally.

use std::cell::RefCell;

use tracing::{debug, error, info, trace, warn};

use crate::constants::{EXIT_CODE_OK, HOTKEYS};
use crate::platform::{KeyCode, Platform, WindowEvent, WindowId};
use crate::screenshot::capture_to_window;
use crate::system::{HotkeyAction, HotkeyManager};
use crate::ui::paint_window;

/// Lifecycle state of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Live,
    Terminated,
}

/// Result value for a handled message.
pub const HANDLED: isize = 0;

/// Dispatch `event` to a controller shared with the window procedure.
///
/// The procedure can be re-entered while a handler is still running (`BeginPaint` sends
/// `WM_ERASEBKGND`, for one). Such an event finds the controller borrowed and gets `None`, so it
/// goes to default processing.
pub fn dispatch_shared<P: Platform>(
    shared: &RefCell<WindowController<P>>,
    event: WindowEvent,
) -> Option<isize> {
    match shared.try_borrow_mut() {
        Ok(mut controller) => controller.handle_event(event),
        Err(_) => {
            trace!(?event, "re-entrant event left to default processing");
            None
        }
    }
}

pub struct WindowController<P: Platform> {
    platform: P,
    window: WindowId,
    hotkeys: HotkeyManager,
    state: ControllerState,
}

impl<P: Platform> WindowController<P> {
    /// Controller for a window that has just been allocated.
    ///
    /// The window is considered live from here on; [`WindowEvent::Created`] does the setup.
    pub fn new(platform: P, window: WindowId) -> Self {
        Self {
            platform,
            window,
            hotkeys: HotkeyManager::new(),
            state: ControllerState::Live,
        }
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn hotkeys(&self) -> &HotkeyManager {
        &self.hotkeys
    }

    /// Dispatch one event.
    ///
    /// `Some(result)` means handled; `None` means the caller should run the default window
    /// procedure.
    pub fn handle_event(&mut self, event: WindowEvent) -> Option<isize> {
        if self.state == ControllerState::Terminated {
            return None;
        }

        match event {
            WindowEvent::Created => {
                self.on_create();
                Some(HANDLED)
            }
            WindowEvent::Destroyed => {
                self.on_destroy();
                Some(HANDLED)
            }
            WindowEvent::Paint => {
                self.on_paint();
                Some(HANDLED)
            }
            WindowEvent::Hotkey { id } => {
                self.on_hotkey(id);
                Some(HANDLED)
            }
            WindowEvent::KeyDown { key } => self.on_key_down(key).then_some(HANDLED),
            WindowEvent::Other { .. } => None,
        }
    }

    fn on_create(&mut self) {
        if let Err(err) = self.platform.apply_app_icon(self.window) {
            warn!(%err, "could not set window icon");
        }

        for binding in HOTKEYS {
            match self.hotkeys.register(&self.platform, self.window, binding) {
                Ok(()) => debug!(id = binding.id, key = binding.key.0, "registered hotkey"),
                Err(err) => error!(%err, "hotkey registration failed"),
            }
        }
    }

    fn on_destroy(&mut self) {
        info!("received WM_DESTROY");

        for err in self.hotkeys.unregister_all(&self.platform, self.window) {
            error!(%err, "hotkey unregistration failed");
        }

        self.platform.quit_message_loop(EXIT_CODE_OK);
        self.state = ControllerState::Terminated;
    }

    fn on_paint(&mut self) {
        if let Err(err) = paint_window(&self.platform, self.window) {
            warn!(%err, "paint failed");
        }
    }

    fn on_hotkey(&mut self, id: i32) {
        debug!(id, "hotkey pressed");

        match self.hotkeys.action_for(id) {
            Some(HotkeyAction::Capture) => {
                if let Err(err) = capture_to_window(&self.platform, self.window) {
                    error!(%err, "screen capture failed");
                }
            }
            Some(HotkeyAction::Reserved) | None => {}
        }
    }

    /// Returns true if the key was handled.
    fn on_key_down(&mut self, key: KeyCode) -> bool {
        debug!("key down: {:#x}", key.0);

        if key == KeyCode::Q {
            info!("saw Q keypress");
            if let Err(err) = self.platform.request_close(self.window) {
                error!(%err, "could not post close request");
            }
            return true;
        }

        false
    }
}
