//! Dashboard module - summary cards, charts and top products

pub mod charts;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::data::{
    PRODUCTS, REVENUE_BY_LOCATION, REVENUE_TOTALS, SALES, SUMMARY_CARDS, TRAFFIC_SOURCES,
};
use crate::ui::charts::{render_chart, ChartSpec};
use crate::ui::theme::Palette;
use crate::ui::widgets::{ratio_text, RatioMeter};

use charts::{projections_chart, revenue_chart, traffic_share, TRAFFIC_COLORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPanel {
    #[default]
    Cards,
    Projections,
    Revenue,
    Locations,
    Products,
    Traffic,
}

impl DashboardPanel {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardPanel::Cards => "Summary",
            DashboardPanel::Projections => "Projections vs Actuals",
            DashboardPanel::Revenue => "Revenue",
            DashboardPanel::Locations => "Revenue by Location",
            DashboardPanel::Products => "Top Selling Products",
            DashboardPanel::Traffic => "Total Sales",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    active_panel: DashboardPanel,
    card: usize,
    product_scroll: usize,
    pub focused: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_panel(&self) -> DashboardPanel {
        self.active_panel
    }

    pub fn selected_card(&self) -> usize {
        self.card
    }

    pub fn product_scroll(&self) -> usize {
        self.product_scroll
    }

    pub fn next_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Cards => DashboardPanel::Projections,
            DashboardPanel::Projections => DashboardPanel::Revenue,
            DashboardPanel::Revenue => DashboardPanel::Locations,
            DashboardPanel::Locations => DashboardPanel::Products,
            DashboardPanel::Products => DashboardPanel::Traffic,
            DashboardPanel::Traffic => DashboardPanel::Cards,
        };
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Cards => DashboardPanel::Traffic,
            DashboardPanel::Projections => DashboardPanel::Cards,
            DashboardPanel::Revenue => DashboardPanel::Projections,
            DashboardPanel::Locations => DashboardPanel::Revenue,
            DashboardPanel::Products => DashboardPanel::Locations,
            DashboardPanel::Traffic => DashboardPanel::Products,
        };
    }

    fn move_card(&mut self, forward: bool) {
        let last = SUMMARY_CARDS.len() - 1;
        self.card = if forward {
            (self.card + 1).min(last)
        } else {
            self.card.saturating_sub(1)
        };
    }

    fn scroll_products(&mut self, down: bool) {
        let last = PRODUCTS.len().saturating_sub(1);
        self.product_scroll = if down {
            (self.product_scroll + 1).min(last)
        } else {
            self.product_scroll.saturating_sub(1)
        };
    }

    fn panel_block(&self, palette: &Palette, panel: DashboardPanel) -> Block<'static> {
        palette.block(panel.title(), self.focused && self.active_panel == panel)
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (index, (card, column)) in SUMMARY_CARDS.iter().zip(columns.iter()).enumerate() {
            let selected =
                self.focused && self.active_panel == DashboardPanel::Cards && index == self.card;
            let bg = if index % 3 == 0 {
                palette.card_alt
            } else {
                palette.card
            };
            let fg = if index % 3 == 0 {
                palette.card_alt_fg
            } else {
                palette.fg
            };
            let mut style = palette.fade(Style::default().fg(fg).bg(bg));
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let trend = if card.trending_up() { "↗" } else { "↘" };
            let lines = vec![
                Line::from(Span::styled(card.name, style.add_modifier(Modifier::BOLD))),
                Line::from(vec![
                    Span::styled(card.value, style.add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {} {}", card.trend, trend), style),
                ]),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .style(style)
                    .block(palette.block("", selected).style(style)),
                *column,
            );
        }
    }

    fn render_chart_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        panel: DashboardPanel,
        spec: &ChartSpec,
        legend: Line<'static>,
    ) {
        let block = self.panel_block(palette, panel);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 {
            return;
        }
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(Paragraph::new(legend), rows[0]);
        render_chart(frame, rows[1], spec, palette);
    }

    fn render_locations(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = self.panel_block(palette, DashboardPanel::Locations);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut y = inner.y;
        for location in REVENUE_BY_LOCATION.iter() {
            if y + 1 >= inner.y + inner.height {
                break;
            }
            let label = Line::from(vec![
                Span::styled(location.location, palette.text()),
                Span::styled(format!("  {}K", location.revenue), palette.muted()),
            ]);
            frame.render_widget(Paragraph::new(label), Rect::new(inner.x, y, inner.width, 1));
            frame.render_widget(
                RatioMeter::new(location.revenue as f64, location.max_revenue as f64)
                    .style(palette.fade(Style::default().fg(palette.accent)))
                    .track_style(palette.fade(Style::default().fg(palette.grid))),
                Rect::new(inner.x, y + 1, inner.width, 1),
            );
            y += 3;
        }
    }

    fn render_products(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let header = Row::new(vec!["Name", "Price", "Quantity", "Amount"])
            .style(palette.muted().add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = PRODUCTS
            .iter()
            .skip(self.product_scroll)
            .map(|product| {
                Row::new(vec![
                    product.name.to_string(),
                    product.price.to_string(),
                    product.quantity.to_string(),
                    product.amount.to_string(),
                ])
                .style(palette.text())
            })
            .collect();
        let widths = [
            Constraint::Percentage(46),
            Constraint::Percentage(18),
            Constraint::Percentage(14),
            Constraint::Percentage(22),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(self.panel_block(palette, DashboardPanel::Products));
        frame.render_widget(table, area);
    }

    fn render_traffic(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let shares = traffic_share(&TRAFFIC_SOURCES);
        let lines: Vec<Line> = TRAFFIC_SOURCES
            .iter()
            .zip(shares.iter())
            .enumerate()
            .map(|(index, (source, (_, share)))| {
                let color = if index == 0 {
                    palette.fg
                } else {
                    TRAFFIC_COLORS[index % TRAFFIC_COLORS.len()]
                };
                Line::from(vec![
                    Span::styled("● ", palette.fade(Style::default().fg(color))),
                    Span::styled(format!("{:<11}", source.name), palette.text()),
                    Span::styled(format!("${:>7.2}", source.value), palette.text()),
                    Span::styled(format!(" {share:>5.1}% "), palette.muted()),
                    Span::styled(
                        ratio_text(*share, 100.0, 8),
                        palette.fade(Style::default().fg(color)),
                    ),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(self.panel_block(palette, DashboardPanel::Traffic)),
            area,
        );
    }
}

fn projections_legend(palette: &Palette, spec: &ChartSpec) -> Line<'static> {
    let mut spans = Vec::new();
    for series in &spec.series {
        spans.push(Span::styled("■ ", palette.fade(Style::default().fg(series.color))));
        spans.push(Span::styled(format!("{}  ", series.name), palette.muted()));
    }
    Line::from(spans)
}

fn revenue_legend(palette: &Palette, spec: &ChartSpec) -> Line<'static> {
    let mut spans = Vec::new();
    // Totals are listed current week first; series are drawn previous first.
    for (series, total) in spec.series.iter().rev().zip(REVENUE_TOTALS.iter()) {
        spans.push(Span::styled("● ", palette.fade(Style::default().fg(series.color))));
        spans.push(Span::styled(format!("{} ", total.title), palette.muted()));
        spans.push(Span::styled(format!("{}  ", total.value), palette.heading()));
    }
    Line::from(spans)
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('n') => self.next_panel(),
            KeyCode::Char('p') => self.prev_panel(),
            KeyCode::Char('h') | KeyCode::Left if self.active_panel == DashboardPanel::Cards => {
                self.move_card(false)
            }
            KeyCode::Char('l') | KeyCode::Right if self.active_panel == DashboardPanel::Cards => {
                self.move_card(true)
            }
            KeyCode::Char('j') | KeyCode::Down if self.active_panel == DashboardPanel::Products => {
                self.scroll_products(true)
            }
            KeyCode::Char('k') | KeyCode::Up if self.active_panel == DashboardPanel::Products => {
                self.scroll_products(false)
            }
            KeyCode::Enter if self.active_panel == DashboardPanel::Cards => {
                return match SUMMARY_CARDS.get(self.card) {
                    Some(card) => Action::OpenPath(card.link.to_string()),
                    None => Action::None,
                };
            }
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let palette = Palette::resolve(&ctx.view_state);
        frame.render_widget(Paragraph::new("").style(palette.base()), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Percentage(50),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_cards(frame, rows[0], &palette);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        let projections = projections_chart(&SALES);
        let legend = projections_legend(&palette, &projections);
        self.render_chart_panel(
            frame,
            middle[0],
            &palette,
            DashboardPanel::Projections,
            &projections,
            legend,
        );

        let revenue = revenue_chart(&SALES, palette.dark);
        let legend = revenue_legend(&palette, &revenue);
        self.render_chart_panel(
            frame,
            middle[1],
            &palette,
            DashboardPanel::Revenue,
            &revenue,
            legend,
        );

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(45),
                Constraint::Percentage(30),
            ])
            .split(rows[2]);

        self.render_locations(frame, bottom[0], &palette);
        self.render_products(frame, bottom[1], &palette);
        self.render_traffic(frame, bottom[2], &palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_panel_cycle_wraps() {
        let mut dashboard = Dashboard::new();
        dashboard.prev_panel();
        assert_eq!(dashboard.active_panel(), DashboardPanel::Traffic);
        for _ in 0..6 {
            dashboard.next_panel();
        }
        assert_eq!(dashboard.active_panel(), DashboardPanel::Traffic);
    }

    #[test]
    fn test_orders_card_opens_orders_path() {
        let mut ctx = Context::default();
        let mut dashboard = Dashboard::new();
        dashboard.handle_key(key(KeyCode::Char('l')), &mut ctx);
        assert_eq!(dashboard.selected_card(), 1);
        assert_eq!(
            dashboard.handle_key(key(KeyCode::Enter), &mut ctx),
            Action::OpenPath("/orders".to_string())
        );
    }

    #[test]
    fn test_card_focus_clamps() {
        let mut ctx = Context::default();
        let mut dashboard = Dashboard::new();
        for _ in 0..10 {
            dashboard.handle_key(key(KeyCode::Char('l')), &mut ctx);
        }
        assert_eq!(dashboard.selected_card(), SUMMARY_CARDS.len() - 1);
        dashboard.handle_key(key(KeyCode::Char('h')), &mut ctx);
        assert_eq!(dashboard.selected_card(), SUMMARY_CARDS.len() - 2);
    }

    #[test]
    fn test_product_scroll_only_on_products_panel() {
        let mut ctx = Context::default();
        let mut dashboard = Dashboard::new();
        dashboard.handle_key(key(KeyCode::Char('j')), &mut ctx);
        assert_eq!(dashboard.product_scroll(), 0);

        while dashboard.active_panel() != DashboardPanel::Products {
            dashboard.next_panel();
        }
        dashboard.handle_key(key(KeyCode::Char('j')), &mut ctx);
        dashboard.handle_key(key(KeyCode::Char('j')), &mut ctx);
        assert_eq!(dashboard.product_scroll(), 2);
        assert_eq!(
            dashboard.handle_key(key(KeyCode::Enter), &mut ctx),
            Action::None
        );
    }
}
