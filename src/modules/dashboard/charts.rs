//! Chart series derived from the sales and traffic datasets

use ratatui::style::Color;

use crate::data::{SalesPoint, TrafficSource};
use crate::ui::charts::{ChartKind, ChartSpec, Point, Series};

const ACTUAL_BAR: Color = Color::Rgb(0xa8, 0xc5, 0xda);
const PROJECTION_BAR: Color = Color::Rgb(0xce, 0xdf, 0xe9);

const CURRENT_WEEK_LIGHT: Color = Color::Rgb(0x1c, 0x1c, 0x1c);
const CURRENT_WEEK_DARK: Color = Color::Rgb(0xb5, 0xba, 0xff);
const PREVIOUS_WEEK_LIGHT: Color = Color::Rgb(0xb5, 0xd6, 0xf6);
const PREVIOUS_WEEK_DARK: Color = Color::Rgb(0xae, 0xe2, 0xff);

pub const TRAFFIC_COLORS: [Color; 4] = [
    CURRENT_WEEK_LIGHT,
    Color::Rgb(0xb9, 0xed, 0xbd),
    Color::Rgb(0xb1, 0xe3, 0xfe),
    Color::Rgb(0x95, 0xa4, 0xfd),
];

fn series(
    name: &'static str,
    sales: &[SalesPoint],
    value: impl Fn(&SalesPoint) -> u64,
    color: Color,
) -> Series {
    Series {
        name,
        points: sales
            .iter()
            .enumerate()
            .map(|(index, point)| Point {
                x: index as f64,
                y: value(point) as f64,
            })
            .collect(),
        color,
    }
}

/// Projections vs Actuals, one bar per month with the actual at the bottom.
pub fn projections_chart(sales: &[SalesPoint]) -> ChartSpec {
    ChartSpec {
        title: "Projections vs Actuals",
        kind: ChartKind::StackedBar,
        x_labels: sales.iter().map(|point| point.month).collect(),
        series: vec![
            series("Actual", sales, |p| p.actual, ACTUAL_BAR),
            series("Projection", sales, |p| p.projection, PROJECTION_BAR),
        ],
    }
}

/// Revenue lines: actuals as the current week, projections as the previous.
pub fn revenue_chart(sales: &[SalesPoint], dark: bool) -> ChartSpec {
    let (current, previous) = if dark {
        (CURRENT_WEEK_DARK, PREVIOUS_WEEK_DARK)
    } else {
        (CURRENT_WEEK_LIGHT, PREVIOUS_WEEK_LIGHT)
    };
    ChartSpec {
        title: "Revenue",
        kind: ChartKind::Line,
        x_labels: sales.iter().map(|point| point.month).collect(),
        series: vec![
            series("Previous Week", sales, |p| p.projection, previous),
            series("Current Week", sales, |p| p.actual, current),
        ],
    }
}

/// Each source's percentage of the total. All zeros when the total is zero.
pub fn traffic_share(sources: &[TrafficSource]) -> Vec<(&'static str, f64)> {
    let total: f64 = sources.iter().map(|source| source.value).sum();
    sources
        .iter()
        .map(|source| {
            let share = if total > 0.0 {
                source.value / total * 100.0
            } else {
                0.0
            };
            (source.name, share)
        })
        .collect()
}
