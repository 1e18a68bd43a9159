//! Notifications module - right-hand panel with notifications, activities
//! and contacts

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::data::{ACTIVITIES, CONTACTS, NOTIFICATIONS};
use crate::ui::theme::Palette;

#[derive(Debug, Clone, Default)]
pub struct NotificationsPanel {
    scroll: u16,
    pub focused: bool,
}

impl NotificationsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_by(&mut self, down: bool) {
        let max = Self::line_count().saturating_sub(1);
        self.scroll = if down {
            (self.scroll + 1).min(max)
        } else {
            self.scroll.saturating_sub(1)
        };
    }

    fn line_count() -> u16 {
        Self::lines(&Palette::light()).len() as u16
    }

    fn lines(palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled("Notifications", palette.heading()))];
        for notification in NOTIFICATIONS.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", notification.kind.glyph()), palette.text()),
                Span::styled(notification.message, palette.text()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", notification.time),
                palette.muted(),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Activities", palette.heading())));
        for activity in ACTIVITIES.iter() {
            lines.push(Line::from(vec![
                Span::styled("• ", palette.muted()),
                Span::styled(activity.action, palette.text()),
            ]));
            lines.push(Line::from(Span::styled(format!("  {}", activity.time), palette.muted())));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Contacts", palette.heading())));
        for contact in CONTACTS.iter() {
            lines.push(Line::from(vec![
                Span::styled("☺ ", palette.muted()),
                Span::styled(*contact, palette.text()),
            ]));
        }
        lines
    }
}

impl Module for NotificationsPanel {
    fn id(&self) -> &'static str {
        "notifications"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(true),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(false),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        if area.width == 0 {
            return;
        }
        let palette = Palette::resolve(&ctx.view_state);
        let paragraph = Paragraph::new(Self::lines(&palette))
            .style(palette.base())
            .block(palette.block("Notifications", self.focused))
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
