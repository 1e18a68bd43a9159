//! Shared state handed to every module

use std::time::Duration;

use crate::domain::{NavigationState, ViewStateStore};

use super::Route;

/// State owned by the shell and lent to modules.
///
/// Modules never keep their own copies of these; they receive the context on
/// every call.
#[derive(Debug, Default)]
pub struct Context {
    pub view_state: ViewStateStore,
    pub navigation: NavigationState,
    pub route: Route,
}

impl Context {
    pub fn new(transition_window: Duration) -> Self {
        Self {
            view_state: ViewStateStore::new(transition_window),
            navigation: NavigationState::default(),
            route: Route::default(),
        }
    }

    pub fn dark(&self) -> bool {
        self.view_state.dark_theme()
    }
}
