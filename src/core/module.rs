//! Module trait for the shell's components

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// A component that renders into a region and may handle input while
/// focused.
pub trait Module {
    fn id(&self) -> &'static str;

    /// Handle keyboard input.
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context);
}
