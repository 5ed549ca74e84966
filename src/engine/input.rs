//! Global input interception, as seen by the core.
//!
//! Two low-level channels (pointer and keyboard) can be installed and
//! removed independently. The platform layer owns the real hook handles;
//! the core only decides *when* each channel must be live.

use std::fmt;

use crate::model::constants::*;

use super::errors::InputError;

/// One of the two low-level interception channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookChannel {
    /// Mouse hook, live only while selecting a window.
    Pointer,
    /// Keyboard hook, live while selecting (Escape) or while the list was
    /// opened by the hotkey (modifier release).
    Keyboard,
}

impl fmt::Display for HookChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookChannel::Pointer => f.write_str("pointer"),
            HookChannel::Keyboard => f.write_str("keyboard"),
        }
    }
}

/// Installs and removes the OS-global hooks.
///
/// Both operations must be idempotent: installing a live channel is `Ok`,
/// removing a channel that is not installed does nothing.
pub trait InputHooks {
    fn install(&mut self, channel: HookChannel) -> Result<(), InputError>;

    fn uninstall(&mut self, channel: HookChannel);

    fn is_installed(&self, channel: HookChannel) -> bool;

    /// Is the key physically held right now?
    fn is_key_down(&self, vk: u32) -> bool;

    fn uninstall_all(&mut self) {
        self.uninstall(HookChannel::Pointer);
        self.uninstall(HookChannel::Keyboard);
    }
}

/// Does a key reported by the keyboard hook match a configured key?
///
/// Low-level hooks report the sided codes (VK_LMENU, VK_RMENU, ...) while
/// settings store the generic ones, so both spellings are accepted.
pub fn key_matches(configured: u32, reported: u32) -> bool {
    if configured == reported {
        return true;
    }
    match configured {
        DEFAULT_CYCLE_MODIFIER_VK => matches!(reported, VK_LMENU_CODE | VK_RMENU_CODE),
        VK_CONTROL_CODE => matches!(reported, VK_LCONTROL_CODE | VK_RCONTROL_CODE),
        VK_SHIFT_CODE => matches!(reported, VK_LSHIFT_CODE | VK_RSHIFT_CODE),
        VK_LWIN_CODE => reported == VK_RWIN_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sided_alt_matches_generic_alt() {
        assert!(key_matches(DEFAULT_CYCLE_MODIFIER_VK, VK_LMENU_CODE));
        assert!(key_matches(DEFAULT_CYCLE_MODIFIER_VK, VK_RMENU_CODE));
        assert!(key_matches(DEFAULT_CYCLE_MODIFIER_VK, DEFAULT_CYCLE_MODIFIER_VK));
        assert!(key_matches(VK_CONTROL_CODE, VK_RCONTROL_CODE));
        assert!(key_matches(VK_LWIN_CODE, VK_RWIN_CODE));
    }

    #[test]
    fn unrelated_keys_do_not_match() {
        assert!(!key_matches(DEFAULT_CYCLE_MODIFIER_VK, VK_LSHIFT_CODE));
        assert!(!key_matches(VK_ESCAPE_CODE, DEFAULT_CYCLE_MODIFIER_VK));
        assert!(!key_matches(VK_LMENU_CODE, DEFAULT_CYCLE_MODIFIER_VK));
    }

    #[test]
    fn channel_display() {
        assert_eq!(HookChannel::Pointer.to_string(), "pointer");
        assert_eq!(HookChannel::Keyboard.to_string(), "keyboard");
    }
}
