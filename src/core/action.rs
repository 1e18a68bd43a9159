//! Actions that modules return to the shell

use super::Route;

/// What the shell should do after a module handled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch the main view
    Navigate(Route),

    /// Resolve a link path through the router, then switch
    OpenPath(String),

    /// Show a message on the status line
    Notify(String, NotifyLevel),

    /// Open the command palette, optionally pre-filled
    OpenCommand(Option<String>),

    /// Open the orders search prompt
    OpenFilter,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
