//! In-memory window manager and hook table shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use tabstash::engine::{DesktopError, HookChannel, InputError};
use tabstash::model::{CursorId, ExStyle, ScreenPoint, WindowId};
use tabstash::{Desktop, InputHooks};

pub const ARROW: CursorId = CursorId(100);
pub const CROSSHAIR: CursorId = CursorId(200);

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub visible: bool,
    pub style: ExStyle,
    pub cloaked: bool,
    pub title: String,
    /// Parent in the child chain, for `root`.
    pub parent: Option<WindowId>,
    /// Owner in the owner chain, for `root_owner`.
    pub owner: Option<WindowId>,
    /// Answer for `last_active_popup`; defaults to the window itself.
    pub last_popup: Option<WindowId>,
}

impl FakeWindow {
    pub fn app(title: &str) -> Self {
        Self {
            visible: true,
            style: ExStyle::default(),
            cloaked: false,
            title: title.to_string(),
            parent: None,
            owner: None,
            last_popup: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeDesktop {
    pub windows: HashMap<WindowId, FakeWindow>,
    pub hit_map: HashMap<(i32, i32), WindowId>,
    pub failing_styles: HashSet<WindowId>,
    pub style_writes: Vec<(WindowId, ExStyle)>,
    pub activations: Vec<WindowId>,
    pub cursor: CursorId,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self {
            cursor: ARROW,
            ..Self::default()
        }
    }

    /// Add a normal top-level application window.
    pub fn add_app(&mut self, id: isize, title: &str) -> WindowId {
        self.add(id, FakeWindow::app(title))
    }

    pub fn add(&mut self, id: isize, window: FakeWindow) -> WindowId {
        let handle = WindowId(id);
        self.windows.insert(handle, window);
        handle
    }

    /// Make `handle` the window found at `(x, y)`.
    pub fn place(&mut self, x: i32, y: i32, handle: WindowId) {
        self.hit_map.insert((x, y), handle);
    }

    pub fn destroy(&mut self, handle: WindowId) {
        self.windows.remove(&handle);
    }

    pub fn fail_style_updates(&mut self, handle: WindowId) {
        self.failing_styles.insert(handle);
    }

    pub fn style_of(&self, handle: WindowId) -> ExStyle {
        self.windows
            .get(&handle)
            .map(|w| w.style)
            .unwrap_or_default()
    }

    pub fn is_hidden_from_switcher(&self, handle: WindowId) -> bool {
        self.style_of(handle).contains(ExStyle::TOOLWINDOW)
    }
}

impl Desktop for FakeDesktop {
    fn is_window(&self, handle: WindowId) -> bool {
        self.windows.contains_key(&handle)
    }

    fn is_visible(&self, handle: WindowId) -> bool {
        self.windows.get(&handle).is_some_and(|w| w.visible)
    }

    fn window_at(&self, point: ScreenPoint) -> Option<WindowId> {
        self.hit_map.get(&(point.x, point.y)).copied()
    }

    fn root(&self, handle: WindowId) -> WindowId {
        let mut current = handle;
        while let Some(parent) = self.windows.get(&current).and_then(|w| w.parent) {
            current = parent;
        }
        current
    }

    fn root_owner(&self, handle: WindowId) -> WindowId {
        let mut current = self.root(handle);
        while let Some(owner) = self.windows.get(&current).and_then(|w| w.owner) {
            current = owner;
        }
        current
    }

    fn last_active_popup(&self, handle: WindowId) -> WindowId {
        self.windows
            .get(&handle)
            .and_then(|w| w.last_popup)
            .unwrap_or(handle)
    }

    fn ex_style(&self, handle: WindowId) -> ExStyle {
        self.style_of(handle)
    }

    fn set_ex_style(&mut self, handle: WindowId, style: ExStyle) -> Result<(), DesktopError> {
        if self.failing_styles.contains(&handle) {
            return Err(DesktopError::StyleUpdate { handle, code: 5 });
        }
        let window = self
            .windows
            .get_mut(&handle)
            .ok_or(DesktopError::InvalidWindow { handle })?;
        window.style = style;
        self.style_writes.push((handle, style));
        Ok(())
    }

    fn is_cloaked(&self, handle: WindowId) -> bool {
        self.windows.get(&handle).is_some_and(|w| w.cloaked)
    }

    fn title(&self, handle: WindowId) -> String {
        self.windows
            .get(&handle)
            .map(|w| w.title.clone())
            .unwrap_or_default()
    }

    fn show_maximized_foreground(&mut self, handle: WindowId) {
        self.activations.push(handle);
    }

    fn current_cursor(&self) -> CursorId {
        self.cursor
    }

    fn set_selection_cursor(&mut self) {
        self.cursor = CROSSHAIR;
    }

    fn set_cursor(&mut self, cursor: CursorId) {
        self.cursor = cursor;
    }
}

/// Hook table that counts real state changes only.
#[derive(Debug, Default)]
pub struct FakeHooks {
    pub installed: HashSet<HookChannel>,
    pub failing: HashSet<HookChannel>,
    pub installs: usize,
    pub uninstalls: usize,
    pub keys_down: HashSet<u32>,
}

impl FakeHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(channel: HookChannel) -> Self {
        let mut hooks = Self::default();
        hooks.failing.insert(channel);
        hooks
    }

    pub fn press(&mut self, vk: u32) {
        self.keys_down.insert(vk);
    }

    pub fn release(&mut self, vk: u32) {
        self.keys_down.remove(&vk);
    }
}

impl InputHooks for FakeHooks {
    fn install(&mut self, channel: HookChannel) -> Result<(), InputError> {
        if self.installed.contains(&channel) {
            return Ok(());
        }
        if self.failing.contains(&channel) {
            return Err(InputError::Install { channel, code: 1428 });
        }
        self.installed.insert(channel);
        self.installs += 1;
        Ok(())
    }

    fn uninstall(&mut self, channel: HookChannel) {
        if self.installed.remove(&channel) {
            self.uninstalls += 1;
        }
    }

    fn is_installed(&self, channel: HookChannel) -> bool {
        self.installed.contains(&channel)
    }

    fn is_key_down(&self, vk: u32) -> bool {
        self.keys_down.contains(&vk)
    }
}
