//! Chart rendering from declarative series descriptions
//!
//! Views describe a chart as a [`ChartSpec`] and hand it to [`render_chart`];
//! nothing outside this file touches the ratatui chart widgets.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Widget};
use ratatui::Frame;

use super::theme::Palette;

const BAR: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One column per x position. Later series sit on top of earlier ones
    /// and only show the part above them.
    StackedBar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    /// Ordered by `x`.
    pub points: Vec<Point>,
    pub color: Color,
}

impl Series {
    /// y at integer position `index`, 0 when the series has no point there.
    pub fn value_at(&self, index: usize) -> f64 {
        self.points
            .iter()
            .find(|point| point.x == index as f64)
            .map_or(0.0, |point| point.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub kind: ChartKind,
    /// Category names for integer x positions.
    pub x_labels: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Largest y across all series (0 when there is no data).
    pub fn y_max(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|series| series.points.iter())
            .map(|point| point.y)
            .fold(0.0, f64::max)
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let xs = self
            .series
            .iter()
            .flat_map(|series| series.points.iter())
            .map(|point| point.x);
        let (min, max) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
        if min.is_finite() && max.is_finite() {
            [min, max]
        } else {
            [0.0, 1.0]
        }
    }
}

/// Draw `spec` into `area`. The caller owns the surrounding block.
pub fn render_chart(frame: &mut Frame, area: Rect, spec: &ChartSpec, palette: &Palette) {
    // Axes and labels need a minimum canvas.
    if area.width < 8 || area.height < 3 {
        return;
    }
    match spec.kind {
        ChartKind::StackedBar => frame.render_widget(StackedBars { spec, palette }, area),
        ChartKind::Line => render_lines(frame, area, spec, palette),
    }
}

/// Rows covered by each layer of one stacked column, bottom first.
///
/// A layer reaches from the top of the layers below it up to its own value,
/// so a value under the running top adds nothing.
pub fn stack_heights(values: &[f64], y_max: f64, height: u16) -> Vec<u16> {
    if y_max <= 0.0 {
        return vec![0; values.len()];
    }
    let mut top = 0u16;
    values
        .iter()
        .map(|value| {
            let ratio = (value.max(0.0) / y_max).min(1.0);
            let reach = (ratio * f64::from(height)).round() as u16;
            let layer = reach.saturating_sub(top);
            top = top.max(reach);
            layer
        })
        .collect()
}

struct StackedBars<'a> {
    spec: &'a ChartSpec,
    palette: &'a Palette,
}

impl Widget for StackedBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.spec.x_labels.len() as u16;
        if columns == 0 || area.height < 2 || area.width < columns {
            return;
        }

        let slot = area.width / columns;
        let bar_width = slot.saturating_sub(1).clamp(1, 5);
        let canvas = area.height - 1;
        let label_y = area.y + canvas;
        let y_max = self.spec.y_max();

        for (index, label) in self.spec.x_labels.iter().enumerate() {
            let left = area.x + index as u16 * slot;
            let bar_left = left + (slot - bar_width) / 2;
            let values: Vec<f64> = self
                .spec
                .series
                .iter()
                .map(|series| series.value_at(index))
                .collect();

            let mut row = label_y;
            let layers = stack_heights(&values, y_max, canvas);
            for (series, layer) in self.spec.series.iter().zip(layers) {
                let style = self.palette.fade(Style::default().fg(series.color));
                for _ in 0..layer {
                    row -= 1;
                    for x in bar_left..bar_left + bar_width {
                        buf.get_mut(x, row).set_char(BAR).set_style(style);
                    }
                }
            }

            let label: String = label.chars().take(slot as usize).collect();
            let label_x = left + (slot - label.chars().count() as u16) / 2;
            buf.set_string(label_x, label_y, label, self.palette.muted());
        }
    }
}

fn render_lines(frame: &mut Frame, area: Rect, spec: &ChartSpec, palette: &Palette) {
    let data: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|series| series.points.iter().map(|p| (p.x, p.y)).collect())
        .collect();

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(data.iter())
        .map(|(series, points)| {
            Dataset::default()
                .name(series.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(palette.fade(Style::default().fg(series.color)))
                .data(points)
        })
        .collect();

    let y_top = (spec.y_max() * 1.1).ceil().max(1.0);
    let x_labels: Vec<Span> = spec
        .x_labels
        .iter()
        .map(|label| Span::styled(*label, palette.muted()))
        .collect();
    let y_labels = vec![
        Span::styled("0", palette.muted()),
        Span::styled(format!("{:.0}", y_top / 2.0), palette.muted()),
        Span::styled(format!("{y_top:.0}"), palette.muted()),
    ];

    let chart = Chart::new(datasets)
        .style(palette.base())
        .x_axis(
            Axis::default()
                .style(palette.fade(Style::default().fg(palette.grid)))
                .bounds(spec.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(palette.fade(Style::default().fg(palette.grid)))
                .bounds([0.0, y_top])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
