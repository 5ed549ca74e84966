//! Tests for `WindowRegistry` against the in-memory desktop.

mod common;

use common::FakeDesktop;
use tabstash::engine::{DesktopError, RegistryError};
use tabstash::model::{ExStyle, WindowId};
use tabstash::WindowRegistry;

fn desktop_with(titles: &[&str]) -> (FakeDesktop, Vec<WindowId>) {
    let mut desktop = FakeDesktop::new();
    let handles = titles
        .iter()
        .enumerate()
        .map(|(i, title)| desktop.add_app(i as isize + 1, title))
        .collect();
    (desktop, handles)
}

// === hide ===

#[test]
fn hide_appends_in_order_and_sets_toolwindow() {
    let (mut desktop, h) = desktop_with(&["Editor", "Browser"]);
    let mut registry = WindowRegistry::new();

    registry.hide(&mut desktop, h[0], "Editor").unwrap();
    registry.hide(&mut desktop, h[1], "Browser").unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.snapshot().titles, vec!["Editor", "Browser"]);
    assert!(desktop.is_hidden_from_switcher(h[0]));
    assert!(desktop.is_hidden_from_switcher(h[1]));
}

#[test]
fn hide_clears_appwindow() {
    let (mut desktop, h) = desktop_with(&["Editor"]);
    desktop.windows.get_mut(&h[0]).unwrap().style = ExStyle(ExStyle::APPWINDOW);
    let mut registry = WindowRegistry::new();

    registry.hide(&mut desktop, h[0], "Editor").unwrap();

    let style = desktop.style_of(h[0]);
    assert!(style.contains(ExStyle::TOOLWINDOW));
    assert!(!style.contains(ExStyle::APPWINDOW));
}

#[test]
fn hide_rejects_duplicates() {
    let (mut desktop, h) = desktop_with(&["Editor"]);
    let mut registry = WindowRegistry::new();
    registry.hide(&mut desktop, h[0], "Editor").unwrap();

    let err = registry.hide(&mut desktop, h[0], "Editor").unwrap_err();

    assert_eq!(err, RegistryError::AlreadyHidden { handle: h[0] });
    assert_eq!(registry.len(), 1);
    assert_eq!(desktop.style_writes.len(), 1);
}

#[test]
fn failed_style_update_leaves_registry_unchanged() {
    let (mut desktop, h) = desktop_with(&["Locked"]);
    desktop.fail_style_updates(h[0]);
    let mut registry = WindowRegistry::new();

    let err = registry.hide(&mut desktop, h[0], "Locked").unwrap_err();

    assert!(matches!(
        err,
        RegistryError::Attribute {
            source: DesktopError::StyleUpdate { .. },
            ..
        }
    ));
    assert!(registry.is_empty());
}

// === restore ===

#[test]
fn restore_last_pops_the_most_recent() {
    let (mut desktop, h) = desktop_with(&["A", "B", "C"]);
    let mut registry = WindowRegistry::new();
    for (handle, title) in h.iter().zip(["A", "B", "C"]) {
        registry.hide(&mut desktop, *handle, title).unwrap();
    }

    let record = registry.restore_last(&mut desktop).unwrap();

    assert_eq!(record.title, "C");
    assert_eq!(registry.snapshot().titles, vec!["A", "B"]);
    assert!(!desktop.is_hidden_from_switcher(h[2]));
    assert!(desktop.is_hidden_from_switcher(h[1]));
}

#[test]
fn restore_only_clears_toolwindow() {
    let (mut desktop, h) = desktop_with(&["Editor"]);
    desktop.windows.get_mut(&h[0]).unwrap().style = ExStyle(ExStyle::APPWINDOW);
    let mut registry = WindowRegistry::new();
    registry.hide(&mut desktop, h[0], "Editor").unwrap();

    registry.restore_last(&mut desktop);

    assert_eq!(desktop.style_of(h[0]), ExStyle(0));
}

#[test]
fn restore_last_on_empty_registry_is_a_no_op() {
    let mut desktop = FakeDesktop::new();
    let mut registry = WindowRegistry::new();

    assert!(registry.restore_last(&mut desktop).is_none());
    assert!(desktop.style_writes.is_empty());
}

#[test]
fn restore_last_drops_dead_window_without_touching_it() {
    let (mut desktop, h) = desktop_with(&["Gone"]);
    let mut registry = WindowRegistry::new();
    registry.hide(&mut desktop, h[0], "Gone").unwrap();
    desktop.destroy(h[0]);

    let record = registry.restore_last(&mut desktop).unwrap();

    assert_eq!(record.handle, h[0]);
    assert!(registry.is_empty());
    assert_eq!(desktop.style_writes.len(), 1);
}

#[test]
fn restore_last_clamps_cursor() {
    let (mut desktop, h) = desktop_with(&["A", "B"]);
    let mut registry = WindowRegistry::new();
    registry.hide(&mut desktop, h[0], "A").unwrap();
    registry.hide(&mut desktop, h[1], "B").unwrap();
    registry.cycle_next();
    assert_eq!(registry.cursor(), 1);

    registry.restore_last(&mut desktop);

    assert_eq!(registry.cursor(), 0);
}

#[test]
fn restore_all_restores_live_windows_and_empties() {
    let (mut desktop, h) = desktop_with(&["A", "B", "C"]);
    let mut registry = WindowRegistry::new();
    for (handle, title) in h.iter().zip(["A", "B", "C"]) {
        registry.hide(&mut desktop, *handle, title).unwrap();
    }
    registry.cycle_next();
    desktop.destroy(h[1]);

    let restored = registry.restore_all(&mut desktop);

    assert_eq!(restored, 2);
    assert!(registry.is_empty());
    assert_eq!(registry.cursor(), 0);
    assert!(!desktop.is_hidden_from_switcher(h[0]));
    assert!(!desktop.is_hidden_from_switcher(h[2]));
}

// === cycle / activate ===

#[test]
fn cycle_next_wraps_around() {
    let (mut desktop, h) = desktop_with(&["A", "B", "C"]);
    let mut registry = WindowRegistry::new();
    for (handle, title) in h.iter().zip(["A", "B", "C"]) {
        registry.hide(&mut desktop, *handle, title).unwrap();
    }

    let seen: Vec<usize> = (0..4).map(|_| registry.cycle_next()).collect();

    assert_eq!(seen, vec![1, 2, 0, 1]);
}

#[test]
fn cycle_next_on_empty_registry_stays_at_zero() {
    let mut registry = WindowRegistry::new();
    assert_eq!(registry.cycle_next(), 0);
    assert_eq!(registry.cursor(), 0);
}

#[test]
fn activate_shows_the_window_and_keeps_the_record() {
    let (mut desktop, h) = desktop_with(&["A", "B"]);
    let mut registry = WindowRegistry::new();
    registry.hide(&mut desktop, h[0], "A").unwrap();
    registry.hide(&mut desktop, h[1], "B").unwrap();

    assert!(registry.activate(&mut desktop, 1));

    assert_eq!(desktop.activations, vec![h[1]]);
    assert_eq!(registry.len(), 2);
    assert!(desktop.is_hidden_from_switcher(h[1]));
}

#[test]
fn activate_skips_dead_and_out_of_range() {
    let (mut desktop, h) = desktop_with(&["A"]);
    let mut registry = WindowRegistry::new();
    registry.hide(&mut desktop, h[0], "A").unwrap();
    desktop.destroy(h[0]);

    assert!(!registry.activate(&mut desktop, 0));
    assert!(!registry.activate(&mut desktop, 7));
    assert!(desktop.activations.is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn prune_dead_removes_only_destroyed_windows() {
    let (mut desktop, h) = desktop_with(&["A", "B", "C"]);
    let mut registry = WindowRegistry::new();
    for (handle, title) in h.iter().zip(["A", "B", "C"]) {
        registry.hide(&mut desktop, *handle, title).unwrap();
    }
    registry.cycle_next();
    registry.cycle_next();
    desktop.destroy(h[2]);

    assert_eq!(registry.prune_dead(&desktop), 1);

    assert_eq!(registry.snapshot().titles, vec!["A", "B"]);
    assert_eq!(registry.cursor(), 1);
}
