use crate::error::HotkeyError;
use crate::platform::{HotkeyModifiers, KeyCode, WindowHost, WindowId};

/// What a hotkey does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Capture the screen into the window.
    Capture,
    /// Bound, but nothing happens yet.
    Reserved,
}

/// A global hotkey bound to the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub id: i32,
    pub modifiers: HotkeyModifiers,
    pub key: KeyCode,
    pub action: HotkeyAction,
}

/// 热键管理器
///
/// Tracks which ids are currently registered for the window so that each id is registered at most
/// once and every successful registration gets exactly one unregistration.
#[derive(Debug, Default)]
pub struct HotkeyManager {
    registered: Vec<HotkeyBinding>,
}

impl HotkeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `binding` for `window`.
    ///
    /// An id that is already registered is refused without asking the OS.
    pub fn register<H: WindowHost + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
        binding: HotkeyBinding,
    ) -> Result<(), HotkeyError> {
        if self.is_registered(binding.id) {
            return Err(HotkeyError::AlreadyRegistered { id: binding.id });
        }

        host.register_hotkey(window, binding.id, binding.modifiers, binding.key)
            .map_err(|source| HotkeyError::Register {
                id: binding.id,
                source,
            })?;
        self.registered.push(binding);
        Ok(())
    }

    /// Unregister everything, best-effort.
    ///
    /// A failure does not stop the remaining unregistrations. Afterwards nothing is considered
    /// registered, whatever the OS said; the failures are returned for reporting.
    pub fn unregister_all<H: WindowHost + ?Sized>(
        &mut self,
        host: &H,
        window: WindowId,
    ) -> Vec<HotkeyError> {
        self.registered
            .drain(..)
            .filter_map(|binding| {
                host.unregister_hotkey(window, binding.id)
                    .err()
                    .map(|source| HotkeyError::Unregister {
                        id: binding.id,
                        source,
                    })
            })
            .collect()
    }

    pub fn is_registered(&self, id: i32) -> bool {
        self.registered.iter().any(|binding| binding.id == id)
    }

    /// Action bound to a registered id.
    pub fn action_for(&self, id: i32) -> Option<HotkeyAction> {
        self.registered
            .iter()
            .find(|binding| binding.id == id)
            .map(|binding| binding.action)
    }

    pub fn registered_ids(&self) -> Vec<i32> {
        self.registered.iter().map(|binding| binding.id).collect()
    }
}
