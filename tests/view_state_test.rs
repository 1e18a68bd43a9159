//! View-state flags and the transition window

use std::time::{Duration, Instant};

use admindash::domain::view_state::DEFAULT_TRANSITION;
use admindash::domain::{ViewStateChange, ViewStateStore};

#[test]
fn test_theme_flips_immediately() {
    let mut store = ViewStateStore::default();
    let t0 = Instant::now();
    assert!(store.apply(ViewStateChange::ToggleTheme, t0));
    assert!(store.dark_theme());
    assert!(store.in_transition());
}

#[test]
fn test_window_closes_after_duration() {
    let mut store = ViewStateStore::default();
    let t0 = Instant::now();
    store.apply(ViewStateChange::ToggleLeftPanel, t0);
    store.tick(t0 + Duration::from_millis(299));
    assert!(store.in_transition());
    assert!(store.tick(t0 + DEFAULT_TRANSITION));
    assert!(!store.in_transition());
    assert!(store.left_panel_collapsed());
}

#[test]
fn test_rapid_toggles_keep_latest_window() {
    let mut store = ViewStateStore::default();
    let t0 = Instant::now();
    for offset in [0, 100, 200] {
        let at = t0 + Duration::from_millis(offset);
        store.apply(ViewStateChange::ToggleTheme, at);
    }
    assert!(store.dark_theme());

    // The first window would have closed at 300ms.
    store.tick(t0 + Duration::from_millis(350));
    assert!(store.in_transition());
    store.tick(t0 + Duration::from_millis(500));
    assert!(!store.in_transition());
}

#[test]
fn test_redundant_set_opens_no_window() {
    let mut store = ViewStateStore::default();
    let t0 = Instant::now();
    assert!(!store.apply(ViewStateChange::SetRightPanel(false), t0));
    assert!(!store.in_transition());
    assert!(store.apply(ViewStateChange::SetRightPanel(true), t0));
    assert!(store.right_panel_collapsed());
}

#[test]
fn test_flags_are_independent() {
    let mut store = ViewStateStore::default();
    let t0 = Instant::now();
    store.apply(ViewStateChange::ToggleLeftPanel, t0);
    store.apply(ViewStateChange::ToggleRightPanel, t0);
    assert!(store.left_panel_collapsed());
    assert!(store.right_panel_collapsed());
    assert!(!store.dark_theme());
}
