//! Full-frame rendering against a test backend

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use admindash::app::App;
use admindash::ui;

fn render(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

#[test]
fn test_dashboard_frame_shows_all_regions() {
    let app = App::default();
    let screen = render(&app, 200, 60);
    assert!(screen.contains("ByeWind"));
    assert!(screen.contains("Dashboards"));
    assert!(screen.contains("Customers"));
    assert!(screen.contains("Koray Occumos"));
}

#[test]
fn test_orders_frame_lists_first_page() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('2'));
    let screen = render(&app, 200, 60);
    assert!(screen.contains("Order List"));
    assert!(screen.contains("#CM9801"));
    assert!(screen.contains("#CM9805"));
    assert!(!screen.contains("#CM9806"));
}

#[test]
fn test_collapsed_panels_are_not_drawn() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char(']'));
    let screen = render(&app, 200, 60);
    assert!(!screen.contains("ByeWind"));
    assert!(!screen.contains("Koray Occumos"));
    assert!(screen.contains("Customers"));
}

#[test]
fn test_help_popup_renders() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&app, 200, 60);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Cycle focus"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::default();
    render(&app, 10, 4);
    press(&mut app, KeyCode::Char('2'));
    render(&app, 1, 1);
}
