use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::core::{parse_command, Action, Command, Context, Module, NotifyLevel, Route, Router};
use crate::modules::dashboard::Dashboard;
use crate::modules::header::Header;
use crate::modules::notifications::NotificationsPanel;
use crate::modules::orders::OrdersView;
use crate::modules::sidebar::Sidebar;
use crate::ui::layout::{self, rect_contains};

/// Status messages disappear after this long.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Main,
    Notifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

pub struct App {
    pub ctx: Context,
    pub router: Router,
    pub sidebar: Sidebar,
    pub header: Header,
    pub dashboard: Dashboard,
    pub orders: OrdersView,
    pub notifications: NotificationsPanel,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(crate::domain::view_state::DEFAULT_TRANSITION)
    }
}

impl App {
    pub fn new(transition_window: Duration) -> Self {
        let mut app = Self {
            ctx: Context::new(transition_window),
            router: Router::default(),
            sidebar: Sidebar::new(),
            header: Header::new(),
            dashboard: Dashboard::new(),
            orders: OrdersView::default(),
            notifications: NotificationsPanel::new(),
            focus: Focus::Main,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
        };
        app.sync_focus();
        app
    }

    pub fn route(&self) -> Route {
        self.ctx.route
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    /// Expire timed state: the view-state transition, header animations and
    /// the status message.
    pub fn on_tick(&mut self, now: Instant) {
        self.ctx.view_state.tick(now);
        self.header.tick(now);
        if let Some(status) = self.status.as_ref() {
            if now.saturating_duration_since(status.since) > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if self.ctx.route != route {
            info!(route = %route, "route changed");
        }
        self.ctx.route = route;
        self.focus = Focus::Main;
        self.sync_focus();
    }

    /// Resolve `path` through the router and switch to its view.
    pub fn open_path(&mut self, path: &str) -> bool {
        match self.router.resolve(path) {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => {
                warn!(path, "no view for path");
                self.set_status(format!("Unknown route: {path}"), StatusLevel::Warn);
                false
            }
        }
    }

    /// Keep focus off collapsed panels and mirror it into the modules.
    pub fn sync_focus(&mut self) {
        let flags = self.ctx.view_state.flags();
        if (self.focus == Focus::Sidebar && flags.left_panel_collapsed)
            || (self.focus == Focus::Notifications && flags.right_panel_collapsed)
        {
            self.focus = Focus::Main;
        }
        self.sidebar.focused = self.focus == Focus::Sidebar;
        self.notifications.focused = self.focus == Focus::Notifications;
        self.dashboard.focused = self.focus == Focus::Main;
        self.orders.focused = self.focus == Focus::Main;
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let flags = self.ctx.view_state.flags();
        let order = [Focus::Sidebar, Focus::Main, Focus::Notifications];
        let available: Vec<Focus> = order
            .into_iter()
            .filter(|focus| match focus {
                Focus::Sidebar => !flags.left_panel_collapsed,
                Focus::Notifications => !flags.right_panel_collapsed,
                Focus::Main => true,
            })
            .collect();
        let pos = available
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % available.len()
        } else {
            (pos + available.len() - 1) % available.len()
        };
        self.focus = available[next];
        self.sync_focus();
    }

    pub fn focus_label(&self) -> &'static str {
        match self.focus {
            Focus::Sidebar => "Sidebar",
            Focus::Main => self.ctx.route.title(),
            Focus::Notifications => "Notifications",
        }
    }

    fn toggle_theme(&mut self) {
        self.ctx.view_state.toggle_theme();
    }

    fn toggle_left_panel(&mut self) {
        self.ctx.view_state.toggle_left_panel();
        self.sync_focus();
    }

    fn toggle_right_panel(&mut self) {
        self.ctx.view_state.toggle_right_panel();
        self.sync_focus();
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn enter_filter(&mut self) {
        if self.ctx.route != Route::Orders {
            self.navigate(Route::Orders);
        }
        self.input_mode = InputMode::Filter;
        self.command.input = self
            .orders
            .filter()
            .map(|filter| filter.raw.clone())
            .unwrap_or_default();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }
        let cmd = parse_command(&input);
        self.exit_command();
        self.command.last = Some(input);
        let action = self.execute_command(&cmd);
        self.apply_action(action);
    }

    pub fn apply_filter(&mut self) {
        let input = self.command.input.trim().to_string();
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
        if input.is_empty() {
            self.orders.clear_filter();
            self.set_status("Filter cleared", StatusLevel::Info);
        } else {
            self.orders.set_filter(&input);
            let total = self.orders.total();
            self.set_status(
                format!("Filter applied: {input} ({total} orders)"),
                StatusLevel::Info,
            );
        }
    }

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Dashboard => Action::Navigate(Route::Dashboard),
            Command::Orders => Action::Navigate(Route::Orders),
            Command::Go(path) => Action::OpenPath(path.clone()),

            Command::Theme => {
                self.toggle_theme();
                let theme = if self.ctx.dark() { "dark" } else { "light" };
                Action::Notify(format!("Theme: {theme}"), NotifyLevel::Info)
            }
            Command::ToggleLeft => {
                self.toggle_left_panel();
                Action::None
            }
            Command::ToggleRight => {
                self.toggle_right_panel();
                Action::None
            }
            Command::SetLeft(collapsed) => {
                self.ctx.view_state.set_left_panel(*collapsed);
                self.sync_focus();
                Action::None
            }
            Command::SetRight(collapsed) => {
                self.ctx.view_state.set_right_panel(*collapsed);
                self.sync_focus();
                Action::None
            }

            Command::Select(label) => match self.ctx.navigation.select_leaf(label) {
                Ok(()) => {
                    self.sidebar.focus_row(label, &self.ctx);
                    Action::Notify(format!("Selected {label}"), NotifyLevel::Info)
                }
                Err(err) => Action::Notify(err.to_string(), NotifyLevel::Error),
            },
            Command::Group(label) => match self.ctx.navigation.toggle_group(label) {
                Ok(expanded) => {
                    let state = if expanded { "expanded" } else { "collapsed" };
                    Action::Notify(format!("{label} {state}"), NotifyLevel::Info)
                }
                Err(err) => {
                    warn!(%err, "group command rejected");
                    Action::Notify(err.to_string(), NotifyLevel::Error)
                }
            },

            Command::Page(number) => {
                self.navigate(Route::Orders);
                let count = self.orders.page_count();
                if count == 0 {
                    return Action::Notify("No matching orders".to_string(), NotifyLevel::Warn);
                }
                let shown = self.orders.go_to_page(number - 1) + 1;
                if *number > count {
                    Action::Notify(
                        format!("Page {number} out of range, showing {shown} of {count}"),
                        NotifyLevel::Warn,
                    )
                } else {
                    Action::Notify(format!("Page {number} of {count}"), NotifyLevel::Info)
                }
            }
            Command::Filter(Some(query)) => {
                self.navigate(Route::Orders);
                self.orders.set_filter(query);
                Action::Notify(format!("Filter applied: {query}"), NotifyLevel::Info)
            }
            Command::Filter(None) => Action::OpenFilter,

            Command::Help => {
                self.help_open = true;
                Action::None
            }
            Command::Quit => Action::Quit,

            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {s}"), NotifyLevel::Warn)
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => self.navigate(route),
            Action::OpenPath(path) => {
                self.open_path(&path);
            }
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::OpenCommand(prefill) => {
                self.enter_command();
                if let Some(text) = prefill {
                    self.command.input = text;
                }
            }
            Action::OpenFilter => self.enter_filter(),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_open {
            if matches!(
                key.code,
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
            ) {
                self.help_open = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Command | InputMode::Filter => self.handle_input_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Char(':') => self.apply_action(Action::OpenCommand(None)),
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('[') => self.toggle_left_panel(),
            KeyCode::Char(']') => self.toggle_right_panel(),
            KeyCode::Char('1') => self.navigate(Route::Dashboard),
            KeyCode::Char('2') => self.navigate(Route::Orders),
            KeyCode::Char('*' | 'b' | 'c') => {
                self.header.handle_key(key, &mut self.ctx);
            }
            KeyCode::Char('/') if self.focus != Focus::Main || self.ctx.route != Route::Orders => {
                self.apply_action(Action::OpenFilter)
            }
            _ => {
                let action = self.dispatch_to_focused(key);
                self.apply_action(action);
            }
        }
    }

    fn dispatch_to_focused(&mut self, key: KeyEvent) -> Action {
        match self.focus {
            Focus::Sidebar => self.sidebar.handle_key(key, &mut self.ctx),
            Focus::Notifications => self.notifications.handle_key(key, &mut self.ctx),
            Focus::Main => match self.ctx.route {
                Route::Dashboard => self.dashboard.handle_key(key, &mut self.ctx),
                Route::Orders => self.orders.handle_key(key, &mut self.ctx),
            },
        }
    }

    fn handle_input_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.exit_command(),
            KeyCode::Enter => match self.input_mode {
                InputMode::Filter => self.apply_filter(),
                _ => self.apply_command(),
            },
            KeyCode::Backspace => {
                self.command.input.pop();
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                self.command.input.push(ch);
            }
            _ => {}
        }
    }

    /// Route a mouse event against the layout for a terminal of `size`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, size: Rect) {
        if self.help_open || self.input_mode != InputMode::Normal {
            return;
        }
        let areas = layout::areas(size, self.ctx.view_state.flags());
        let (col, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if rect_contains(areas.sidebar, col, row) {
                    self.focus = Focus::Sidebar;
                    self.sync_focus();
                    let action = self.sidebar.click(areas.sidebar, col, row, &mut self.ctx);
                    self.apply_action(action);
                } else if rect_contains(areas.notifications, col, row) {
                    self.focus = Focus::Notifications;
                    self.sync_focus();
                } else if rect_contains(areas.main, col, row) {
                    self.focus = Focus::Main;
                    self.sync_focus();
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let down = mouse.kind == MouseEventKind::ScrollDown;
                if rect_contains(areas.main, col, row) && self.ctx.route == Route::Orders {
                    self.orders.move_row(down);
                } else if rect_contains(areas.notifications, col, row) {
                    self.notifications.scroll_by(down);
                } else if rect_contains(areas.sidebar, col, row) {
                    self.sidebar.move_cursor(down, &self.ctx);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_command(app: &mut App, text: &str) {
        press(app, KeyCode::Char(':'));
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_starts_on_dashboard_with_main_focus() {
        let app = App::default();
        assert_eq!(app.route(), Route::Dashboard);
        assert_eq!(app.focus, Focus::Main);
        assert!(app.dashboard.focused);
        assert!(!app.sidebar.focused);
    }

    #[test]
    fn test_focus_skips_collapsed_panels() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Notifications);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Main);

        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Main);
    }

    #[test]
    fn test_collapsing_focused_panel_moves_focus() {
        let mut app = App::default();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Sidebar);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.focus, Focus::Main);
    }

    #[test]
    fn test_go_command_resolves_through_router() {
        let mut app = App::default();
        type_command(&mut app, "go /orders");
        assert_eq!(app.route(), Route::Orders);

        type_command(&mut app, "go /nowhere");
        assert_eq!(app.route(), Route::Orders);
        assert_eq!(
            app.status_text(),
            Some(("Unknown route: /nowhere", StatusLevel::Warn))
        );
    }

    #[test]
    fn test_select_unknown_leaf_reports_error() {
        let mut app = App::default();
        type_command(&mut app, "select Nowhere");
        assert_eq!(app.ctx.navigation.active_leaf(), "Default");
        assert_eq!(
            app.status_text().map(|(_, level)| level),
            Some(StatusLevel::Error)
        );
    }

    #[test]
    fn test_page_command_clamps() {
        let mut app = App::default();
        type_command(&mut app, "page 7");
        assert_eq!(app.route(), Route::Orders);
        assert_eq!(app.orders.page_index(), 1);
        assert_eq!(
            app.status_text().map(|(_, level)| level),
            Some(StatusLevel::Warn)
        );
    }

    #[test]
    fn test_page_command_on_empty_filter() {
        let mut app = App::default();
        type_command(&mut app, "filter nobody");
        assert_eq!(app.orders.total(), 0);
        type_command(&mut app, "page 1");
        assert_eq!(app.orders.page_index(), 0);
        assert_eq!(
            app.status_text(),
            Some(("No matching orders", StatusLevel::Warn))
        );
    }

    #[test]
    fn test_panel_commands_set_and_toggle() {
        let mut app = App::default();
        type_command(&mut app, "left hide");
        assert!(app.ctx.view_state.left_panel_collapsed());
        assert!(app.ctx.view_state.in_transition());
        type_command(&mut app, "left hide");
        assert!(app.ctx.view_state.left_panel_collapsed());
        type_command(&mut app, "left");
        assert!(!app.ctx.view_state.left_panel_collapsed());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Notifications);
        type_command(&mut app, "right hide");
        assert!(app.ctx.view_state.right_panel_collapsed());
        assert_eq!(app.focus, Focus::Main);
        type_command(&mut app, "right show");
        assert!(!app.ctx.view_state.right_panel_collapsed());
    }

    #[test]
    fn test_filter_prompt_applies_on_enter() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Filter);
        assert_eq!(app.route(), Route::Orders);
        for ch in "status:approved".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.orders.total(), 4);
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let mut app = App::default();
        app.set_status("hello", StatusLevel::Info);
        let since = app.status.as_ref().unwrap().since;
        app.on_tick(since + Duration::from_secs(2));
        assert!(app.status.is_some());
        app.on_tick(since + Duration::from_secs(4));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route(), Route::Dashboard);
        press(&mut app, KeyCode::Esc);
        assert!(!app.help_open);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        type_command(&mut app, "quit");
        assert!(app.should_quit);
    }
}
