//! The thread-local slot holding the process's one `Switcher`.
//!
//! The entry point builds the switcher and installs it here; hook
//! procedures and the dispatcher borrow it through `with_switcher`. Nothing
//! else can reach it.

use std::cell::RefCell;

use crate::engine::Switcher;
use crate::platform::windows::ffi::Win32Desktop;
use crate::platform::windows::input::Win32Hooks;

pub type AppSwitcher = Switcher<Win32Desktop, Win32Hooks>;

thread_local! {
    static SWITCHER: RefCell<Option<AppSwitcher>> = const { RefCell::new(None) };
}

/// Install the switcher. Returns it back if one is already installed.
pub fn install_switcher(switcher: AppSwitcher) -> Result<(), AppSwitcher> {
    SWITCHER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(switcher);
        }
        *slot = Some(switcher);
        Ok(())
    })
}

/// Remove the switcher from the slot (shutdown).
pub fn take_switcher() -> Option<AppSwitcher> {
    SWITCHER.with(|slot| slot.borrow_mut().take())
}

/// Run `f` against the switcher.
///
/// Returns `None` if no switcher is installed or if it is already borrowed,
/// which happens when an OS call made by the core re-enters a hook.
pub fn with_switcher<R>(f: impl FnOnce(&mut AppSwitcher) -> R) -> Option<R> {
    SWITCHER.with(|slot| {
        let mut guard = slot.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}
