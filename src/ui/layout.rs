use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::domain::ViewStateFlags;

/// Width of the open navigation panel, in columns.
pub const LEFT_PANEL_WIDTH: u16 = 28;
/// Width of the open notifications panel, in columns.
pub const RIGHT_PANEL_WIDTH: u16 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    pub size: Rect,
    pub sidebar: Rect,
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Panel widths as a pure function of the flags: collapsed is zero.
pub fn panel_widths(flags: ViewStateFlags) -> (u16, u16) {
    let left = if flags.left_panel_collapsed {
        0
    } else {
        LEFT_PANEL_WIDTH
    };
    let right = if flags.right_panel_collapsed {
        0
    } else {
        RIGHT_PANEL_WIDTH
    };
    (left, right)
}

pub fn areas(size: Rect, flags: ViewStateFlags) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let (left, right) = panel_widths(flags);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left),
            Constraint::Min(0),
            Constraint::Length(right),
        ])
        .split(vertical[0]);

    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    UiAreas {
        size,
        sidebar: columns[0],
        header: center[0],
        main: center[1],
        notifications: columns[2],
        status_line: vertical[1],
        command_line: vertical[2],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 160, 40)
    }

    #[test]
    fn test_open_panels_use_fixed_widths() {
        let areas = areas(screen(), ViewStateFlags::default());
        assert_eq!(areas.sidebar.width, LEFT_PANEL_WIDTH);
        assert_eq!(areas.notifications.width, RIGHT_PANEL_WIDTH);
        let main_width = 160 - LEFT_PANEL_WIDTH - RIGHT_PANEL_WIDTH;
        assert_eq!(areas.main.width, main_width);
    }

    #[test]
    fn test_collapsed_panels_have_zero_width() {
        let flags = ViewStateFlags {
            left_panel_collapsed: true,
            right_panel_collapsed: true,
            dark_theme: false,
        };
        let areas = areas(screen(), flags);
        assert_eq!(areas.sidebar.width, 0);
        assert_eq!(areas.notifications.width, 0);
        assert_eq!(areas.main.width, 160);
        assert_eq!(areas.header.width, 160);
    }

    #[test]
    fn test_theme_does_not_affect_widths() {
        let light = panel_widths(ViewStateFlags::default());
        let dark = panel_widths(ViewStateFlags {
            dark_theme: true,
            ..ViewStateFlags::default()
        });
        assert_eq!(light, dark);
    }

    #[test]
    fn test_footer_rows() {
        let areas = areas(screen(), ViewStateFlags::default());
        assert_eq!(areas.status_line.y, 38);
        assert_eq!(areas.command_line.y, 39);
        assert_eq!(areas.header.height, 3);
    }
}
