//! Single-line ratio meter for progress-style values

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const FILLED: char = '━';
const TRACK: char = '─';

/// Horizontal bar filled to `value / max` of its width
pub struct RatioMeter {
    value: f64,
    max: f64,
    style: Style,
    track_style: Style,
}

impl RatioMeter {
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            style: Style::default().fg(Color::Cyan),
            track_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }
}

/// Cells to fill out of `width`. Non-positive `max` fills nothing.
fn filled_cells(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    ((ratio * width as f64).round() as usize).min(width)
}

impl Widget for RatioMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let filled = filled_cells(self.value, self.max, width);
        for i in 0..width {
            let x = area.x + i as u16;
            let (ch, style) = if i < filled {
                (FILLED, self.style)
            } else {
                (TRACK, self.track_style)
            };
            buf.get_mut(x, area.y).set_char(ch).set_style(style);
        }
    }
}

/// Meter as plain text (for tables and status messages)
pub fn ratio_text(value: f64, max: f64, width: usize) -> String {
    let filled = filled_cells(value, max, width);
    let mut text = String::with_capacity(width * 3);
    text.extend(std::iter::repeat(FILLED).take(filled));
    text.extend(std::iter::repeat(TRACK).take(width - filled));
    text
}
