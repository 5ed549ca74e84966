//! User settings (pure Rust, no FFI).
//!
//! Serialised to JSON by `platform::windows::storage::config`. Unknown or
//! missing fields fall back to defaults, so older config files keep loading.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Modifier keys that must be held with the hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyModifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub win: bool,
}

impl Default for HotkeyModifiers {
    fn default() -> Self {
        Self {
            alt: true,
            ctrl: false,
            shift: false,
            win: false,
        }
    }
}

impl HotkeyModifiers {
    /// `RegisterHotKey` modifier bits (MOD_ALT = 1, MOD_CONTROL = 2,
    /// MOD_SHIFT = 4, MOD_WIN = 8).
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.alt {
            bits |= 0x1;
        }
        if self.ctrl {
            bits |= 0x2;
        }
        if self.shift {
            bits |= 0x4;
        }
        if self.win {
            bits |= 0x8;
        }
        bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits() == 0
    }

    /// Generic virtual keys of the selected modifiers, Ctrl first.
    pub fn virtual_keys(&self) -> Vec<u32> {
        [
            (self.ctrl, VK_CONTROL_CODE),
            (self.alt, DEFAULT_CYCLE_MODIFIER_VK),
            (self.shift, VK_SHIFT_CODE),
            (self.win, VK_LWIN_CODE),
        ]
        .into_iter()
        .filter_map(|(on, vk)| on.then_some(vk))
        .collect()
    }

    /// Is `vk` (generic or left/right code) one of the selected modifiers?
    pub fn includes_key(&self, vk: u32) -> bool {
        match vk {
            VK_CONTROL_CODE | VK_LCONTROL_CODE | VK_RCONTROL_CODE => self.ctrl,
            DEFAULT_CYCLE_MODIFIER_VK | VK_LMENU_CODE | VK_RMENU_CODE => self.alt,
            VK_SHIFT_CODE | VK_LSHIFT_CODE | VK_RSHIFT_CODE => self.shift,
            VK_LWIN_CODE | VK_RWIN_CODE => self.win,
            _ => false,
        }
    }

    /// Human-readable prefix such as `"Alt+"` or `"Ctrl+Shift+"`.
    pub fn label(&self) -> String {
        let mut out = String::new();
        if self.ctrl {
            out.push_str("Ctrl+");
        }
        if self.alt {
            out.push_str("Alt+");
        }
        if self.shift {
            out.push_str("Shift+");
        }
        if self.win {
            out.push_str("Win+");
        }
        out
    }
}

/// Application settings loaded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Modifiers of the cycle hotkey.
    pub hotkey_modifiers: HotkeyModifiers,
    /// Virtual key of the cycle hotkey.
    pub hotkey_vk: u32,
    /// Key whose release activates the cycled window.
    pub cycle_modifier_vk: u32,
    /// List window size in pixels.
    pub window_width: i32,
    pub window_height: i32,
    /// Drop records of destroyed windows on every hotkey press.
    pub prune_on_hotkey: bool,
    /// `tracing` filter directive, e.g. `"info"` or `"tabstash=debug"`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkey_modifiers: HotkeyModifiers::default(),
            hotkey_vk: DEFAULT_HOTKEY_VK,
            cycle_modifier_vk: DEFAULT_CYCLE_MODIFIER_VK,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            prune_on_hotkey: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Validates and clamps all values to usable ranges.
    pub fn validate(&mut self) {
        self.window_width = self
            .window_width
            .clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
        self.window_height = self
            .window_height
            .clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
        if self.hotkey_vk == 0 || self.hotkey_vk > 0xFE {
            self.hotkey_vk = DEFAULT_HOTKEY_VK;
        }
        if self.cycle_modifier_vk == 0 || self.cycle_modifier_vk > 0xFE {
            self.cycle_modifier_vk = DEFAULT_CYCLE_MODIFIER_VK;
        }
        // A bare key would swallow normal typing system-wide.
        if self.hotkey_modifiers.is_empty() {
            self.hotkey_modifiers = HotkeyModifiers::default();
        }
        // The session ends when this key is up, so it must be held with the hotkey.
        if !self.hotkey_modifiers.includes_key(self.cycle_modifier_vk) {
            if let Some(&vk) = self.hotkey_modifiers.virtual_keys().first() {
                self.cycle_modifier_vk = vk;
            }
        }
        if self.log_level.trim().is_empty() {
            self.log_level = DEFAULT_LOG_LEVEL.to_string();
        }
    }

    /// Label shown in the list window header and tray menu, e.g. `"Alt+]"`.
    pub fn hotkey_label(&self) -> String {
        format!(
            "{}{}",
            self.hotkey_modifiers.label(),
            key_name(self.hotkey_vk)
        )
    }
}

/// Short display name for a virtual key.
pub fn key_name(vk: u32) -> String {
    match vk {
        0x30..=0x39 | 0x41..=0x5A => char::from_u32(vk)
            .map(|c| c.to_string())
            .unwrap_or_default(),
        0x70..=0x87 => format!("F{}", vk - 0x6F),
        0xBA => ";".into(),
        0xBB => "=".into(),
        0xBC => ",".into(),
        0xBD => "-".into(),
        0xBE => ".".into(),
        0xBF => "/".into(),
        0xC0 => "`".into(),
        0xDB => "[".into(),
        0xDC => "\\".into(),
        0xDD => "]".into(),
        0xDE => "'".into(),
        0x10 | 0xA0 | 0xA1 => "Shift".into(),
        0x11 | 0xA2 | 0xA3 => "Ctrl".into(),
        0x12 | 0xA4 | 0xA5 => "Alt".into(),
        0x5B | 0x5C => "Win".into(),
        0x20 => "Space".into(),
        0x09 => "Tab".into(),
        _ => format!("VK({:#04X})", vk),
    }
}
