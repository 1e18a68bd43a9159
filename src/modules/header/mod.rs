//! Header module - breadcrumb, favorite star and the shell toggles

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::TransitionTimer;
use crate::ui::theme::Palette;

/// How long the bell and clock glyphs stay animated after a press.
pub const ICON_ANIMATION: Duration = Duration::from_millis(700);

#[derive(Debug, Clone)]
pub struct Header {
    starred: bool,
    bell: TransitionTimer,
    clock: TransitionTimer,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self {
            starred: false,
            bell: TransitionTimer::new(ICON_ANIMATION),
            clock: TransitionTimer::new(ICON_ANIMATION),
        }
    }

    pub fn starred(&self) -> bool {
        self.starred
    }

    pub fn toggle_star(&mut self) {
        self.starred = !self.starred;
    }

    pub fn bell_animating(&self) -> bool {
        self.bell.is_active()
    }

    pub fn clock_animating(&self) -> bool {
        self.clock.is_active()
    }

    pub fn ring_bell(&mut self, now: Instant) {
        self.bell.arm(now);
    }

    pub fn spin_clock(&mut self, now: Instant) {
        self.clock.arm(now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.bell.expire(now);
        self.clock.expire(now);
    }

    pub fn breadcrumb(ctx: &Context) -> String {
        format!("Dashboards / {}", ctx.navigation.active_leaf())
    }
}

impl Module for Header {
    fn id(&self) -> &'static str {
        "header"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('*') => self.toggle_star(),
            KeyCode::Char('b') => self.ring_bell(Instant::now()),
            KeyCode::Char('c') => self.spin_clock(Instant::now()),
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let palette = Palette::resolve(&ctx.view_state);
        let block = palette.block("", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let flags = ctx.view_state.flags();
        let left_glyph = if flags.left_panel_collapsed { "▷" } else { "◧" };
        let star = if self.starred {
            Span::styled("★", palette.fade(Style::default().fg(palette.star)))
        } else {
            Span::styled("☆", palette.muted())
        };
        let left = Line::from(vec![
            Span::styled(format!("{left_glyph} "), palette.text()),
            star,
            Span::raw(" "),
            Span::styled("Dashboards", palette.muted()),
            Span::styled(" / ", palette.muted()),
            Span::styled(ctx.navigation.active_leaf(), palette.text()),
        ]);
        frame.render_widget(Paragraph::new(left), halves[0]);

        let animated = palette.fade(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
        let theme_glyph = if flags.dark_theme { "☾" } else { "☀" };
        let right_glyph = if flags.right_panel_collapsed {
            "◁"
        } else {
            "◨"
        };
        let right = Line::from(vec![
            Span::styled("⌕ Search  ", palette.muted()),
            Span::styled(format!("{theme_glyph} "), palette.text()),
            if self.clock_animating() {
                Span::styled("↻ ", animated)
            } else {
                Span::styled("⟲ ", palette.text())
            },
            if self.bell_animating() {
                Span::styled("♪ ", animated)
            } else {
                Span::styled("♫ ", palette.text())
            },
            Span::styled(right_glyph, palette.text()),
        ]);
        let right = Paragraph::new(right).alignment(Alignment::Right);
        frame.render_widget(right, halves[1]);
    }
}
