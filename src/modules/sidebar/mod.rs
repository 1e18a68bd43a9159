//! Sidebar module - profile, favorites and the dashboards/pages menu

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::warn;

use crate::core::{Action, Context, Module, NotifyLevel, Route};
use crate::data::{FAVORITES, PROFILE_NAME, RECENT};
use crate::domain::MenuRow;
use crate::ui::layout::rect_inner;
use crate::ui::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoritesTab {
    #[default]
    Favorites,
    Recent,
}

impl FavoritesTab {
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            FavoritesTab::Favorites => &FAVORITES,
            FavoritesTab::Recent => &RECENT,
        }
    }

    fn toggled(self) -> Self {
        match self {
            FavoritesTab::Favorites => FavoritesTab::Recent,
            FavoritesTab::Recent => FavoritesTab::Favorites,
        }
    }
}

/// One rendered line of the sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarLine {
    Profile,
    Tabs,
    Favorite(&'static str),
    Heading(&'static str),
    Blank,
    /// Index into the visible menu rows.
    Menu(usize, MenuRow),
}

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    cursor: usize,
    tab: FavoritesTab,
    selected_favorite: Option<&'static str>,
    pub focused: bool,
}

impl Sidebar {
    pub fn new() -> Self {
        Self {
            selected_favorite: FAVORITES.first().copied(),
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tab(&self) -> FavoritesTab {
        self.tab
    }

    pub fn selected_favorite(&self) -> Option<&'static str> {
        self.selected_favorite
    }

    pub fn switch_tab(&mut self) {
        self.tab = self.tab.toggled();
    }

    /// Advance the favorite marker through the current tab's items.
    pub fn cycle_favorite(&mut self) {
        let items = self.tab.items();
        let next = match self
            .selected_favorite
            .and_then(|current| items.iter().position(|item| *item == current))
        {
            Some(pos) => (pos + 1) % items.len(),
            None => 0,
        };
        self.selected_favorite = items.get(next).copied();
    }

    pub fn select_favorite(&mut self, item: &'static str) {
        self.selected_favorite = Some(item);
    }

    pub fn move_cursor(&mut self, down: bool, ctx: &Context) {
        let len = ctx.navigation.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = if down {
            (self.cursor + 1).min(len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    /// Put the cursor on `label`'s row, if it is visible.
    pub fn focus_row(&mut self, label: &str, ctx: &Context) {
        if let Some(pos) = ctx
            .navigation
            .visible_rows()
            .iter()
            .position(|row| row.label() == label)
        {
            self.cursor = pos;
        }
    }

    /// Select the leaf or toggle the group under the cursor.
    pub fn activate(&mut self, ctx: &mut Context) -> Action {
        let rows = ctx.navigation.visible_rows();
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        let Some(row) = rows.get(self.cursor).copied() else {
            return Action::None;
        };
        self.activate_row(row, ctx)
    }

    fn activate_row(&mut self, row: MenuRow, ctx: &mut Context) -> Action {
        match row {
            MenuRow::Group { label, .. } => match ctx.navigation.toggle_group(label) {
                Ok(_) => Action::None,
                Err(err) => {
                    warn!(%err, "sidebar group toggle failed");
                    Action::Notify(err.to_string(), NotifyLevel::Error)
                }
            },
            MenuRow::Dashboard(label) | MenuRow::Leaf { label, .. } => {
                match ctx.navigation.select_leaf(label) {
                    Ok(()) if matches!(row, MenuRow::Dashboard(_)) => {
                        Action::Navigate(Route::Dashboard)
                    }
                    Ok(()) => Action::None,
                    Err(err) => Action::Notify(err.to_string(), NotifyLevel::Error),
                }
            }
        }
    }

    /// Flatten the sidebar into display lines.
    pub fn lines(&self, ctx: &Context) -> Vec<SidebarLine> {
        let mut lines = vec![SidebarLine::Profile, SidebarLine::Blank, SidebarLine::Tabs];
        lines.extend(self.tab.items().iter().copied().map(SidebarLine::Favorite));
        lines.push(SidebarLine::Blank);

        let rows = ctx.navigation.visible_rows();
        let mut pages_heading = false;
        lines.push(SidebarLine::Heading("Dashboards"));
        for (index, row) in rows.into_iter().enumerate() {
            if !pages_heading && !matches!(row, MenuRow::Dashboard(_)) {
                lines.push(SidebarLine::Blank);
                lines.push(SidebarLine::Heading("Pages"));
                pages_heading = true;
            }
            lines.push(SidebarLine::Menu(index, row));
        }
        lines
    }

    /// First line shown so the cursor row stays inside `height` lines.
    pub fn scroll_offset(&self, lines: &[SidebarLine], height: usize) -> usize {
        let cursor_line = lines
            .iter()
            .position(|line| matches!(line, SidebarLine::Menu(index, _) if *index == self.cursor))
            .unwrap_or(0);
        if height == 0 || cursor_line < height {
            0
        } else {
            cursor_line + 1 - height
        }
    }

    /// Handle a left click at terminal position (`col`, `row`) inside `area`.
    pub fn click(&mut self, area: Rect, col: u16, row: u16, ctx: &mut Context) -> Action {
        let inner = rect_inner(area);
        if row < inner.y || row >= inner.y + inner.height || col < inner.x {
            return Action::None;
        }
        let lines = self.lines(ctx);
        let offset = self.scroll_offset(&lines, inner.height as usize);
        let Some(line) = lines.get(offset + (row - inner.y) as usize).copied() else {
            return Action::None;
        };
        match line {
            SidebarLine::Tabs => {
                // "Favorites" occupies the first ten columns.
                self.tab = if col - inner.x < 10 {
                    FavoritesTab::Favorites
                } else {
                    FavoritesTab::Recent
                };
                Action::None
            }
            SidebarLine::Favorite(item) => {
                self.select_favorite(item);
                Action::None
            }
            SidebarLine::Menu(index, row) => {
                self.cursor = index;
                self.activate_row(row, ctx)
            }
            SidebarLine::Profile | SidebarLine::Heading(_) | SidebarLine::Blank => Action::None,
        }
    }

    fn render_line(&self, line: SidebarLine, ctx: &Context, palette: &Palette) -> Line<'static> {
        match line {
            SidebarLine::Profile => Line::from(vec![
                Span::styled("◉ ", palette.text()),
                Span::styled(PROFILE_NAME, palette.heading()),
            ]),
            SidebarLine::Tabs => {
                let style = |tab: FavoritesTab| {
                    if self.tab == tab {
                        palette.heading()
                    } else {
                        palette.muted()
                    }
                };
                Line::from(vec![
                    Span::styled("Favorites", style(FavoritesTab::Favorites)),
                    Span::raw(" "),
                    Span::styled("Recent", style(FavoritesTab::Recent)),
                ])
            }
            SidebarLine::Favorite(item) => {
                if self.selected_favorite == Some(item) {
                    Line::from(vec![
                        Span::styled(" ● ", palette.text()),
                        Span::styled(item, palette.selected()),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled(" ○ ", palette.muted()),
                        Span::styled(item, palette.muted()),
                    ])
                }
            }
            SidebarLine::Heading(text) => Line::from(Span::styled(text, palette.muted())),
            SidebarLine::Blank => Line::from(""),
            SidebarLine::Menu(index, row) => {
                let active = row.label() == ctx.navigation.active_leaf();
                let cursor = self.focused && index == self.cursor;
                let (indent, glyph) = match row {
                    MenuRow::Dashboard(_) => ("  ", "▪ "),
                    MenuRow::Group { expanded, .. } => ("", if expanded { "▾ " } else { "▸ " }),
                    MenuRow::Leaf { .. } => ("    ", ""),
                };
                let mut style = if active {
                    palette.selected()
                } else {
                    palette.text()
                };
                if cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(format!("{glyph}{}", row.label()), style),
                ])
            }
        }
    }
}

impl Module for Sidebar {
    fn id(&self) -> &'static str {
        "sidebar"
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(true, ctx);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(false, ctx);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(ctx),
            KeyCode::Char('f') => {
                self.switch_tab();
                Action::None
            }
            KeyCode::Char('v') => {
                self.cycle_favorite();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        if area.width == 0 {
            return;
        }
        let palette = Palette::resolve(&ctx.view_state);
        let block = palette.block("Menu", self.focused);
        let inner = block.inner(area);

        let lines = self.lines(ctx);
        let offset = self.scroll_offset(&lines, inner.height as usize);
        let text: Vec<Line> = lines
            .iter()
            .skip(offset)
            .map(|line| self.render_line(*line, ctx, &palette))
            .collect();

        frame.render_widget(
            Paragraph::new(text).style(palette.base()).block(block),
            area,
        );
    }
}
