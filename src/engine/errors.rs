use crate::model::WindowId;

use super::input::HookChannel;

/// Failures reported by a `Desktop` implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesktopError {
    #[error("Window {handle} no longer exists")]
    InvalidWindow { handle: WindowId },

    #[error("Failed to update extended style of window {handle} (os error {code})")]
    StyleUpdate { handle: WindowId, code: u32 },
}

/// Failures of `WindowRegistry` mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Window {handle} is already hidden")]
    AlreadyHidden { handle: WindowId },

    #[error("Could not hide window {handle}: {source}")]
    Attribute {
        handle: WindowId,
        #[source]
        source: DesktopError,
    },
}

/// Failures installing global input interception.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Failed to install {channel} hook (os error {code})")]
    Install { channel: HookChannel, code: u32 },

    #[error("Failed to register global hotkey (os error {code})")]
    Hotkey { code: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_window() {
        let err = RegistryError::AlreadyHidden {
            handle: WindowId(0x42),
        };
        assert_eq!(err.to_string(), "Window 0x42 is already hidden");
    }

    #[test]
    fn attribute_error_keeps_source() {
        use std::error::Error;

        let err = RegistryError::Attribute {
            handle: WindowId(1),
            source: DesktopError::StyleUpdate {
                handle: WindowId(1),
                code: 5,
            },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("os error 5"));
    }

    #[test]
    fn install_error_names_channel() {
        let err = InputError::Install {
            channel: HookChannel::Keyboard,
            code: 1428,
        };
        assert_eq!(
            err.to_string(),
            "Failed to install keyboard hook (os error 1428)"
        );
    }
}
