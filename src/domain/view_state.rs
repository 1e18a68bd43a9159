//! Global UI flags shared by every view
//!
//! The store is the only writer of [`ViewStateFlags`]. Each effective change
//! flips the flag immediately and (re)arms a short transition window so the
//! renderer can apply a fade while the change settles.

use std::time::{Duration, Instant};

use tracing::debug;

/// Length of the transition window after a flag change.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// The three independent shell flags. Every combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStateFlags {
    pub left_panel_collapsed: bool,
    pub right_panel_collapsed: bool,
    pub dark_theme: bool,
}

/// A mutation request against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStateChange {
    ToggleLeftPanel,
    ToggleRightPanel,
    SetLeftPanel(bool),
    SetRightPanel(bool),
    ToggleTheme,
}

/// Single-slot cancellable timer.
///
/// Arming while already armed replaces the deadline, so there is never more
/// than one pending clear.
#[derive(Debug, Clone)]
pub struct TransitionTimer {
    window: Duration,
    deadline: Option<Instant>,
    generation: u64,
}

impl TransitionTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            generation: 0,
        }
    }

    /// Arm or re-arm the timer, returning the new generation token.
    pub fn arm(&mut self, now: Instant) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now + self.window);
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Token of the most recent arm. Bumps on every re-arm.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear the timer if its deadline has passed. Returns true when this
    /// call performed the clear.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewStateStore {
    flags: ViewStateFlags,
    transition: TransitionTimer,
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

impl ViewStateStore {
    /// All flags start false.
    pub fn new(transition_window: Duration) -> Self {
        Self {
            flags: ViewStateFlags::default(),
            transition: TransitionTimer::new(transition_window),
        }
    }

    pub fn flags(&self) -> ViewStateFlags {
        self.flags
    }

    pub fn left_panel_collapsed(&self) -> bool {
        self.flags.left_panel_collapsed
    }

    pub fn right_panel_collapsed(&self) -> bool {
        self.flags.right_panel_collapsed
    }

    pub fn dark_theme(&self) -> bool {
        self.flags.dark_theme
    }

    /// True while the transition window of the latest change is open.
    pub fn in_transition(&self) -> bool {
        self.transition.is_active()
    }

    pub fn transition(&self) -> &TransitionTimer {
        &self.transition
    }

    pub fn toggle_left_panel(&mut self) {
        self.apply(ViewStateChange::ToggleLeftPanel, Instant::now());
    }

    pub fn toggle_right_panel(&mut self) {
        self.apply(ViewStateChange::ToggleRightPanel, Instant::now());
    }

    pub fn set_left_panel(&mut self, collapsed: bool) {
        self.apply(ViewStateChange::SetLeftPanel(collapsed), Instant::now());
    }

    pub fn set_right_panel(&mut self, collapsed: bool) {
        self.apply(ViewStateChange::SetRightPanel(collapsed), Instant::now());
    }

    pub fn toggle_theme(&mut self) {
        self.apply(ViewStateChange::ToggleTheme, Instant::now());
    }

    /// Apply a change as of `now`. Returns false when the change left the
    /// flags untouched (an explicit set to the current value); such calls
    /// do not open a transition window.
    pub fn apply(&mut self, change: ViewStateChange, now: Instant) -> bool {
        let before = self.flags;
        match change {
            ViewStateChange::ToggleLeftPanel => {
                self.flags.left_panel_collapsed = !self.flags.left_panel_collapsed;
            }
            ViewStateChange::ToggleRightPanel => {
                self.flags.right_panel_collapsed = !self.flags.right_panel_collapsed;
            }
            ViewStateChange::SetLeftPanel(collapsed) => {
                self.flags.left_panel_collapsed = collapsed;
            }
            ViewStateChange::SetRightPanel(collapsed) => {
                self.flags.right_panel_collapsed = collapsed;
            }
            ViewStateChange::ToggleTheme => {
                self.flags.dark_theme = !self.flags.dark_theme;
            }
        }

        if self.flags == before {
            return false;
        }

        let token = self.transition.arm(now);
        debug!(?change, flags = ?self.flags, token, "view state changed");
        true
    }

    /// Close the transition window once it has elapsed. Returns true when
    /// the transitional flag was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let cleared = self.transition.expire(now);
        if cleared {
            let token = self.transition.generation();
            debug!(token, "view transition settled");
        }
        cleared
    }
}
