use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod charts;
pub mod layout;
pub mod theme;
pub mod widgets;

use crate::app::{App, Focus, InputMode, StatusLevel};
use crate::core::{Module, Route};
use crate::modules::header::Header;
use theme::Palette;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();
    let palette = Palette::resolve(&app.ctx.view_state);
    let areas = layout::areas(size, app.ctx.view_state.flags());

    f.render_widget(Block::default().style(palette.base()), size);

    app.sidebar.render(f, areas.sidebar, &app.ctx);
    app.header.render(f, areas.header, &app.ctx);
    match app.ctx.route {
        Route::Dashboard => app.dashboard.render(f, areas.main, &app.ctx),
        Route::Orders => app.orders.render(f, areas.main, &app.ctx),
    }
    app.notifications.render(f, areas.notifications, &app.ctx);

    draw_status_line(f, areas.status_line, app, &palette);
    draw_command_line(f, areas.command_line, app, &palette);

    if app.help_open {
        draw_help_popup(f, areas.size, app, &palette);
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let flags = app.ctx.view_state.flags();
    let theme = if flags.dark_theme { "dark" } else { "light" };
    let breadcrumb = Header::breadcrumb(&app.ctx);
    let mut spans = vec![
        Span::styled("View ", palette.muted()),
        Span::styled(format!("{}  ", app.ctx.route.path()), palette.text()),
        Span::styled("Menu ", palette.muted()),
        Span::styled(format!("{breadcrumb}  "), palette.text()),
        Span::styled("Focus ", palette.muted()),
        Span::styled(format!("{}  ", app.focus_label()), palette.text()),
        Span::styled("Theme ", palette.muted()),
        Span::styled(theme, palette.text()),
    ];
    if app.ctx.route == Route::Orders {
        let page_count = app.orders.page_count();
        let page = if page_count == 0 {
            0
        } else {
            app.orders.page_index() + 1
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Page ", palette.muted()));
        spans.push(Span::styled(format!("{page}/{page_count}"), palette.text()));
        if let Some(filter) = app.orders.filter() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("Filter ", palette.muted()));
            spans.push(Span::styled(filter.raw.clone(), palette.text()));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(palette.base())
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Open the dashboard"),
        ("orders", "Open the order list"),
        ("go", "Open a path (/ or /orders)"),
        ("theme", "Toggle light/dark theme"),
        ("left", "Toggle the menu panel, or left hide|show"),
        ("right", "Toggle the notifications panel, or right hide|show"),
        ("select", "Select a menu leaf"),
        ("group", "Expand/collapse a menu group"),
        ("page", "Jump to an orders page"),
        ("filter", "Filter orders"),
        ("help", "Show key bindings"),
        ("quit", "Exit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input).unwrap_or("Enter=run Esc=cancel");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::styled(app.command.input.as_str(), palette.text()),
                Span::styled(format!("  {hint}"), palette.muted()),
            ])
        }
        InputMode::Filter => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::LightCyan)),
            Span::styled(app.command.input.as_str(), palette.text()),
            Span::styled(
                "  id: user: project: address: status: (empty=clear, Enter=ok Esc=cancel)",
                palette.muted(),
            ),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", palette.muted()),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints(app, palette)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(palette.base());
    f.render_widget(paragraph, area);
}

const GLOBAL_HINTS: [(&str, &str); 4] = [
    ("Tab", "focus"),
    ("t", "theme"),
    ("?", "help"),
    ("q", "quit"),
];

fn action_hints(app: &App, palette: &Palette) -> Line<'static> {
    let hints: &[(&str, &str)] = match (app.focus, app.ctx.route) {
        (Focus::Sidebar, _) => &[("j/k", "move"), ("Enter", "select"), ("f", "tab")],
        (Focus::Notifications, _) => &[("j/k", "scroll")],
        (Focus::Main, Route::Dashboard) => &[("n/p", "panel"), ("h/l", "card"), ("Enter", "open")],
        (Focus::Main, Route::Orders) => &[
            ("h/l", "page"),
            ("Space", "check"),
            ("/", "search"),
            ("o", "sort"),
        ],
    };
    let mut spans = Vec::new();
    for (key, label) in hints.iter().chain(GLOBAL_HINTS.iter()) {
        spans.push(Span::styled(key.to_string(), palette.heading()));
        spans.push(Span::styled(format!(" {label}  "), palette.muted()));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let popup_area = layout::centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Shell"),
        Line::from("  Tab / S-Tab  Cycle focus"),
        Line::from("  1 / 2        Dashboard / Orders"),
        Line::from("  [ / ]        Toggle menu / notifications panel"),
        Line::from("  t            Toggle theme"),
        Line::from("  * / b / c    Star / bell / history"),
        Line::from("  :            Command palette"),
        Line::from("  ?            Toggle help"),
        Line::from("  q            Quit"),
        Line::from(""),
        Line::from("Menu"),
        Line::from("  j / k        Move cursor"),
        Line::from("  Enter        Select leaf / expand group"),
        Line::from("  f / v        Favorites tab / next favorite"),
        Line::from(""),
        Line::from("Dashboard"),
        Line::from("  n / p        Next / previous panel"),
        Line::from("  h / l        Move card focus"),
        Line::from("  Enter        Open focused card"),
        Line::from(""),
        Line::from("Orders"),
        Line::from("  h / l        Previous / next page"),
        Line::from("  g / G        First / last page"),
        Line::from("  j / k        Move row"),
        Line::from("  Space / x    Check row / page"),
        Line::from("  /            Search (status:approved user:lane)"),
        Line::from("  o / O        Cycle sort / reverse"),
        Line::from("  Esc          Clear search"),
        Line::from(""),
        Line::from(format!("Active view: {}", app.ctx.route.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(palette.base())
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}
