//! The global cycle hotkey.
//!
//! Registered once against the list window at startup and unregistered at
//! shutdown; `WM_HOTKEY` arrives in the main window procedure.

use tracing::{info, warn};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, MOD_NOREPEAT,
};

use crate::engine::InputError;
use crate::model::constants::HOTKEY_CYCLE_ID;
use crate::model::Settings;

/// Register the cycle hotkey. Failure disables cycling for this session.
pub fn register_cycle_hotkey(hwnd: HWND, settings: &Settings) -> Result<(), InputError> {
    let modifiers = HOT_KEY_MODIFIERS(settings.hotkey_modifiers.bits() | MOD_NOREPEAT.0);
    let result = unsafe { RegisterHotKey(Some(hwnd), HOTKEY_CYCLE_ID, modifiers, settings.hotkey_vk) };
    match result {
        Ok(()) => {
            info!(
                event = "platform.hotkey.registered",
                hotkey = %settings.hotkey_label()
            );
            Ok(())
        }
        Err(e) => {
            let err = InputError::Hotkey {
                code: e.code().0 as u32,
            };
            warn!(
                event = "platform.hotkey.register_failed",
                hotkey = %settings.hotkey_label(),
                error = %err,
                hint = "another application may own this hotkey"
            );
            Err(err)
        }
    }
}

pub fn unregister_cycle_hotkey(hwnd: HWND) {
    if let Err(e) = unsafe { UnregisterHotKey(Some(hwnd), HOTKEY_CYCLE_ID) } {
        warn!(event = "platform.hotkey.unregister_failed", error = %e);
    }
}
