//! Window-manager primitives the core needs, and the Alt+Tab eligibility
//! check built on top of them.
//!
//! `platform::windows::ffi::Win32Desktop` implements the trait with Win32
//! calls; tests use an in-memory fake.

use crate::model::constants::MAX_POPUP_WALK;
use crate::model::{CursorId, ExStyle, ScreenPoint, WindowId};

use super::errors::DesktopError;

/// Access to the OS window manager.
///
/// Every method takes a handle that may already be dead. Implementations
/// must tolerate that and return neutral values (false, empty, NULL).
pub trait Desktop {
    /// Is `handle` still a live window?
    fn is_window(&self, handle: WindowId) -> bool;

    fn is_visible(&self, handle: WindowId) -> bool;

    /// Topmost window under `point`, if any.
    fn window_at(&self, point: ScreenPoint) -> Option<WindowId>;

    /// Root window of `handle` by walking the parent chain (`GA_ROOT`).
    fn root(&self, handle: WindowId) -> WindowId;

    /// Root of the owner chain (`GA_ROOTOWNER`).
    fn root_owner(&self, handle: WindowId) -> WindowId;

    /// Most recently active popup owned by `handle`, or `handle` itself.
    fn last_active_popup(&self, handle: WindowId) -> WindowId;

    fn ex_style(&self, handle: WindowId) -> ExStyle;

    fn set_ex_style(&mut self, handle: WindowId, style: ExStyle) -> Result<(), DesktopError>;

    /// Is the window hidden by the compositor (e.g. on another virtual desktop)?
    fn is_cloaked(&self, handle: WindowId) -> bool;

    /// Caption text, empty if none.
    fn title(&self, handle: WindowId) -> String;

    /// Show maximized and bring to the foreground.
    fn show_maximized_foreground(&mut self, handle: WindowId);

    fn current_cursor(&self) -> CursorId;

    /// Switch the pointer to the crosshair shown during selection.
    fn set_selection_cursor(&mut self);

    fn set_cursor(&mut self, cursor: CursorId);
}

/// Would the OS list `handle` in its Alt+Tab switcher?
///
/// All of these must hold:
/// 1. the window is visible;
/// 2. walking the owner's last-active-popup chain lands on `handle`;
/// 3. neither `WS_EX_TOOLWINDOW` nor `WS_EX_NOACTIVATE` is set;
/// 4. DWM does not report it as cloaked.
pub fn is_switchable<D: Desktop + ?Sized>(desktop: &D, handle: WindowId) -> bool {
    if handle.is_null() || !desktop.is_visible(handle) {
        return false;
    }

    let mut walk = desktop.root_owner(handle);
    let mut steps = 0;
    loop {
        let next = desktop.last_active_popup(walk);
        if next == walk {
            break;
        }
        if desktop.is_visible(next) {
            break;
        }
        walk = next;
        steps += 1;
        if steps > MAX_POPUP_WALK {
            return false;
        }
    }
    if walk != handle {
        return false;
    }

    if desktop.ex_style(handle).excludes_from_switcher() {
        return false;
    }

    !desktop.is_cloaked(handle)
}
