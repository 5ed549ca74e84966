//! Low-level mouse and keyboard hooks.
//!
//! The hook procedures are free functions the OS calls on the UI thread.
//! They reach the core only through `app::state::with_switcher`, and pass
//! the event on untouched if the switcher is busy (re-entrant delivery).
//! They must return quickly: a slow hook stalls input system-wide.

use tracing::{debug, warn};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::GetAsyncKeyState;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, HOOKPROC, KBDLLHOOKSTRUCT,
    MSLLHOOKSTRUCT, WH_KEYBOARD_LL, WH_MOUSE_LL, WINDOWS_HOOK_ID, WM_KEYDOWN, WM_KEYUP,
    WM_LBUTTONDOWN, WM_SYSKEYDOWN, WM_SYSKEYUP,
};

use crate::engine::{HookChannel, InputError, InputHooks};
use crate::model::constants::{VK_LWIN_CODE, VK_RWIN_CODE};
use crate::model::ScreenPoint;
use crate::platform::windows::app::state::with_switcher;

/// Owner of the two hook handles.
#[derive(Default)]
pub struct Win32Hooks {
    pointer: Option<HHOOK>,
    keyboard: Option<HHOOK>,
}

impl Win32Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, channel: HookChannel) -> &mut Option<HHOOK> {
        match channel {
            HookChannel::Pointer => &mut self.pointer,
            HookChannel::Keyboard => &mut self.keyboard,
        }
    }
}

fn hook_kind(channel: HookChannel) -> (WINDOWS_HOOK_ID, HOOKPROC) {
    match channel {
        HookChannel::Pointer => (WH_MOUSE_LL, Some(pointer_hook_proc)),
        HookChannel::Keyboard => (WH_KEYBOARD_LL, Some(keyboard_hook_proc)),
    }
}

impl InputHooks for Win32Hooks {
    fn install(&mut self, channel: HookChannel) -> Result<(), InputError> {
        if self.slot(channel).is_some() {
            return Ok(());
        }
        let (id, proc) = hook_kind(channel);
        let hook = unsafe {
            let module = GetModuleHandleW(None).map_err(|e| InputError::Install {
                channel,
                code: e.code().0 as u32,
            })?;
            SetWindowsHookExW(id, proc, Some(module.into()), 0)
        }
        .map_err(|e| InputError::Install {
            channel,
            code: e.code().0 as u32,
        })?;

        *self.slot(channel) = Some(hook);
        debug!(event = "platform.hooks.installed", channel = %channel);
        Ok(())
    }

    fn uninstall(&mut self, channel: HookChannel) {
        let Some(hook) = self.slot(channel).take() else {
            return;
        };
        if let Err(e) = unsafe { UnhookWindowsHookEx(hook) } {
            warn!(event = "platform.hooks.uninstall_failed", channel = %channel, error = %e);
        } else {
            debug!(event = "platform.hooks.uninstalled", channel = %channel);
        }
    }

    fn is_installed(&self, channel: HookChannel) -> bool {
        match channel {
            HookChannel::Pointer => self.pointer.is_some(),
            HookChannel::Keyboard => self.keyboard.is_some(),
        }
    }

    fn is_key_down(&self, vk: u32) -> bool {
        let down = |vk: u32| (unsafe { GetAsyncKeyState(vk as i32) } as u16 & 0x8000) != 0;
        // The left Win code stands for either Win key
        down(vk) || (vk == VK_LWIN_CODE && down(VK_RWIN_CODE))
    }
}

impl Drop for Win32Hooks {
    fn drop(&mut self) {
        self.uninstall_all();
    }
}

/// Low-level mouse hook: a primary-button press while selecting picks a window.
unsafe extern "system" fn pointer_hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code >= 0 && wparam.0 as u32 == WM_LBUTTONDOWN {
        let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);
        let point = ScreenPoint::new(info.pt.x, info.pt.y);
        if with_switcher(|s| s.on_pointer_down(point)).unwrap_or(false) {
            return LRESULT(1);
        }
    }
    CallNextHookEx(None, code, wparam, lparam)
}

/// Low-level keyboard hook: Escape while selecting, modifier release while cycling.
unsafe extern "system" fn keyboard_hook_proc(
    code: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if code >= 0 {
        let info = &*(lparam.0 as *const KBDLLHOOKSTRUCT);
        let vk = info.vkCode;
        let consumed = match wparam.0 as u32 {
            WM_KEYDOWN | WM_SYSKEYDOWN => with_switcher(|s| s.on_key_down(vk)),
            WM_KEYUP | WM_SYSKEYUP => with_switcher(|s| s.on_key_up(vk)),
            _ => None,
        };
        if consumed.unwrap_or(false) {
            return LRESULT(1);
        }
    }
    CallNextHookEx(None, code, wparam, lparam)
}
