//! Orders module - paginated, filterable order list

pub mod filter;

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table};
use ratatui::Frame;
use tracing::debug;

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::data::{OrderRecord, ORDERS};
use crate::domain::{classify, PageSlot, PaginationState};
use crate::ui::theme::Palette;

pub use filter::OrderFilter;

/// Fixed page size of the order list.
pub const ORDERS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

const COLUMNS: [&str; 7] = [
    "", "Order ID", "User", "Project", "Address", "Date", "Status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Customer,
    Project,
    Status,
}

impl SortKey {
    pub fn title(&self) -> &'static str {
        match self {
            SortKey::Id => "Order ID",
            SortKey::Customer => "User",
            SortKey::Project => "Project",
            SortKey::Status => "Status",
        }
    }

    fn next(self) -> Self {
        match self {
            SortKey::Id => SortKey::Customer,
            SortKey::Customer => SortKey::Project,
            SortKey::Project => SortKey::Status,
            SortKey::Status => SortKey::Id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrdersView {
    records: &'static [OrderRecord],
    pagination: PaginationState,
    filter: Option<OrderFilter>,
    sort: SortKey,
    descending: bool,
    checked: BTreeSet<&'static str>,
    cursor: usize,
    pub focused: bool,
}

impl Default for OrdersView {
    fn default() -> Self {
        Self::new(&ORDERS)
    }
}

impl OrdersView {
    pub fn new(records: &'static [OrderRecord]) -> Self {
        Self {
            records,
            pagination: PaginationState::from(ORDERS_PER_PAGE),
            filter: None,
            sort: SortKey::default(),
            descending: false,
            checked: BTreeSet::new(),
            cursor: 0,
            focused: false,
        }
    }

    /// Filtered and sorted records, before pagination.
    pub fn rows(&self) -> Vec<&'static OrderRecord> {
        let mut rows: Vec<&'static OrderRecord> = self
            .records
            .iter()
            .filter(|order| self.filter.as_ref().map_or(true, |f| f.matches(order)))
            .collect();
        let sort = self.sort;
        rows.sort_by(|a, b| {
            let primary = match sort {
                SortKey::Id => a.id.cmp(b.id),
                SortKey::Customer => a.customer.cmp(b.customer),
                SortKey::Project => a.project.cmp(b.project),
                SortKey::Status => a.status.cmp(&b.status),
            };
            primary.then_with(|| a.id.cmp(b.id))
        });
        if self.descending {
            rows.reverse();
        }
        rows
    }

    pub fn total(&self) -> usize {
        self.rows().len()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total())
    }

    /// Current page index, clamped against the current row count.
    pub fn page_index(&self) -> usize {
        self.pagination.clamped_index(self.total())
    }

    /// Rows shown on the current page.
    pub fn visible(&self) -> Vec<&'static OrderRecord> {
        let rows = self.rows();
        self.pagination.page(&rows).visible.to_vec()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter(&self) -> Option<&OrderFilter> {
        self.filter.as_ref()
    }

    pub fn sort(&self) -> (SortKey, bool) {
        (self.sort, self.descending)
    }

    pub fn checked(&self) -> &BTreeSet<&'static str> {
        &self.checked
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    fn after_page_change(&mut self) {
        self.cursor = 0;
        debug!(page = self.pagination.page_index(), "orders page changed");
    }

    fn reclamp(&mut self) {
        let total = self.total();
        self.pagination.clamp(total);
        let visible = self.visible().len();
        self.cursor = self.cursor.min(visible.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        let total = self.total();
        let before = self.pagination.page_index();
        if self.pagination.next(total) != before {
            self.after_page_change();
        }
    }

    pub fn prev_page(&mut self) {
        let total = self.total();
        let before = self.pagination.page_index();
        if self.pagination.prev(total) != before {
            self.after_page_change();
        }
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
        self.after_page_change();
    }

    pub fn last_page(&mut self) {
        let total = self.total();
        self.pagination.last(total);
        self.after_page_change();
    }

    /// Jump to a zero-based page; out-of-range indexes land on the last page.
    pub fn go_to_page(&mut self, index: usize) -> usize {
        let total = self.total();
        let page = self.pagination.go_to(index, total);
        self.after_page_change();
        page
    }

    /// Move the row cursor, crossing into the neighbouring page at either
    /// edge.
    pub fn move_row(&mut self, down: bool) {
        let visible = self.visible().len();
        if down {
            if self.cursor + 1 < visible {
                self.cursor += 1;
            } else if self.page_index() + 1 < self.page_count() {
                self.next_page();
            }
        } else if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.page_index() > 0 {
            self.prev_page();
            self.cursor = self.visible().len().saturating_sub(1);
        }
    }

    /// Flip the checkbox of the row under the cursor.
    pub fn toggle_check(&mut self) -> Option<bool> {
        let id = self.visible().get(self.cursor)?.id;
        if self.checked.remove(id) {
            Some(false)
        } else {
            self.checked.insert(id);
            Some(true)
        }
    }

    /// Check every row on the page, or clear them all if they were all
    /// checked already.
    pub fn toggle_page_checks(&mut self) {
        let ids: Vec<&'static str> = self.visible().iter().map(|order| order.id).collect();
        if ids.iter().all(|id| self.checked.contains(id)) {
            for id in ids {
                self.checked.remove(id);
            }
        } else {
            self.checked.extend(ids);
        }
    }

    pub fn set_filter(&mut self, input: &str) {
        self.filter = OrderFilter::parse(input);
        debug!(filter = input, "orders filter set");
        self.reclamp();
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.reclamp();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.reclamp();
    }

    pub fn reverse_sort(&mut self) {
        self.descending = !self.descending;
        self.reclamp();
    }

    /// Page strip: one page at each end and one either side of the current.
    pub fn page_slots(&self) -> Vec<PageSlot> {
        self.pagination.window(self.total(), 1, 1)
    }

    fn toolbar(&self, palette: &Palette) -> Line<'static> {
        let arrow = if self.descending { "↓" } else { "↑" };
        let search = match &self.filter {
            Some(filter) => Span::styled(format!("⌕ {}", filter.raw), palette.text()),
            None => Span::styled("⌕ Search", palette.muted()),
        };
        Line::from(vec![
            Span::styled("+  ", palette.text()),
            Span::styled(format!("⇅ {} {arrow}", self.sort.title()), palette.text()),
            Span::styled(
                format!("   {} selected   ", self.checked.len()),
                palette.muted(),
            ),
            search,
        ])
    }

    fn footer(&self, palette: &Palette) -> Line<'static> {
        let current = self.page_index();
        let mut spans = vec![Span::styled("<  ", palette.heading())];
        for slot in self.page_slots() {
            match slot {
                PageSlot::Page(index) if index == current => {
                    spans.push(Span::styled(format!(" {} ", index + 1), palette.active_page()));
                }
                PageSlot::Page(index) => {
                    spans.push(Span::styled(format!(" {} ", index + 1), palette.heading()));
                }
                PageSlot::Break => spans.push(Span::styled(" … ", palette.muted())),
            }
        }
        spans.push(Span::styled("  >", palette.heading()));
        Line::from(spans)
    }
}

impl Module for OrdersView {
    fn id(&self) -> &'static str {
        "orders"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => self.next_page(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => self.prev_page(),
            KeyCode::Char('g') | KeyCode::Home => self.first_page(),
            KeyCode::Char('G') | KeyCode::End => self.last_page(),
            KeyCode::Char('j') | KeyCode::Down => self.move_row(true),
            KeyCode::Char('k') | KeyCode::Up => self.move_row(false),
            KeyCode::Char(' ') => {
                self.toggle_check();
            }
            KeyCode::Char('x') => self.toggle_page_checks(),
            KeyCode::Char('o') => self.cycle_sort(),
            KeyCode::Char('O') => self.reverse_sort(),
            KeyCode::Char('/') => return Action::OpenFilter,
            KeyCode::Esc if self.filter.is_some() => {
                self.clear_filter();
                return Action::Notify("Filter cleared".to_string(), NotifyLevel::Info);
            }
            _ => {}
        }
        Action::None
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let palette = Palette::resolve(&ctx.view_state);
        let block = palette.block("Order List", self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(self.toolbar(&palette)), chunks[0]);

        let header = Row::new(COLUMNS)
            .style(palette.muted().add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        let rows: Vec<Row> = self
            .visible()
            .into_iter()
            .enumerate()
            .map(|(index, order)| {
                let check = if self.is_checked(order.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let status_style =
                    palette.fade(Style::default().fg(classify(order.status).color()));
                let mut style = palette.text();
                if self.focused && index == self.cursor {
                    style = palette.selected();
                }
                Row::new(vec![
                    Line::from(check),
                    Line::from(order.id),
                    Line::from(order.customer),
                    Line::from(order.project),
                    Line::from(order.address),
                    Line::from(order.relative_date),
                    Line::from(Span::styled(order.status.title(), status_style)),
                ])
                .style(style)
            })
            .collect();
        let widths = [
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(24),
            Constraint::Length(13),
            Constraint::Length(12),
        ];
        frame.render_widget(Table::new(rows, widths).header(header), chunks[1]);

        let footer = if self.total() == 0 {
            Line::from(Span::styled("No matching orders", palette.muted()))
        } else {
            self.footer(&palette)
        };
        frame.render_widget(Paragraph::new(footer), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rows: &[&OrderRecord]) -> Vec<&'static str> {
        rows.iter().map(|order| order.id).collect()
    }

    #[test]
    fn test_first_page_holds_five() {
        let view = OrdersView::default();
        assert_eq!(view.page_count(), 2);
        assert_eq!(
            ids(&view.visible()),
            vec!["#CM9801", "#CM9802", "#CM9803", "#CM9804", "#CM9805"]
        );
    }

    #[test]
    fn test_second_page_holds_remaining_four() {
        let mut view = OrdersView::default();
        view.next_page();
        assert_eq!(view.page_index(), 1);
        assert_eq!(
            ids(&view.visible()),
            vec!["#CM9806", "#CM9807", "#CM9808", "#CM9809"]
        );
        view.next_page();
        assert_eq!(view.page_index(), 1);
    }

    #[test]
    fn test_filter_clamps_page() {
        let mut view = OrdersView::default();
        view.last_page();
        view.set_filter("status:pending");
        assert_eq!(view.page_index(), 0);
        assert_eq!(ids(&view.visible()), vec!["#CM9803"]);

        view.clear_filter();
        assert_eq!(view.page_count(), 2);
    }

    #[test]
    fn test_filter_with_no_matches() {
        let mut view = OrdersView::default();
        view.set_filter("nobody");
        assert_eq!(view.page_count(), 0);
        assert_eq!(view.page_index(), 0);
        assert!(view.visible().is_empty());
        assert_eq!(view.toggle_check(), None);
    }

    #[test]
    fn test_sort_uses_id_tiebreak() {
        let mut view = OrdersView::default();
        view.cycle_sort();
        assert_eq!(view.sort(), (SortKey::Customer, false));
        let rows = view.rows();
        let parker: Vec<&str> = rows
            .iter()
            .filter(|order| order.customer == "Parker Lane")
            .map(|order| order.id)
            .collect();
        assert_eq!(parker, vec!["#CM9807", "#CM9808", "#CM9809"]);
        assert_eq!(rows[0].customer, "Andi Lane");

        view.reverse_sort();
        assert_eq!(view.rows()[0].id, "#CM9809");
    }

    #[test]
    fn test_checkbox_follows_cursor() {
        let mut view = OrdersView::default();
        view.move_row(true);
        assert_eq!(view.toggle_check(), Some(true));
        assert!(view.is_checked("#CM9802"));
        assert_eq!(view.toggle_check(), Some(false));
        assert!(view.checked().is_empty());

        view.toggle_page_checks();
        assert_eq!(view.checked().len(), 5);
        view.toggle_page_checks();
        assert!(view.checked().is_empty());
    }

    #[test]
    fn test_row_cursor_crosses_pages() {
        let mut view = OrdersView::default();
        for _ in 0..5 {
            view.move_row(true);
        }
        assert_eq!(view.page_index(), 1);
        assert_eq!(view.cursor(), 0);
        view.move_row(false);
        assert_eq!(view.page_index(), 0);
        assert_eq!(view.cursor(), 4);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut view = OrdersView::default();
        assert_eq!(view.go_to_page(9), 1);
        assert_eq!(view.go_to_page(0), 0);
    }

    #[test]
    fn test_slash_opens_filter() {
        let mut ctx = Context::default();
        let mut view = OrdersView::default();
        assert_eq!(
            view.handle_key(KeyEvent::from(KeyCode::Char('/')), &mut ctx),
            Action::OpenFilter
        );
    }

    #[test]
    fn test_page_slots_for_two_pages() {
        let view = OrdersView::default();
        assert_eq!(
            view.page_slots(),
            vec![PageSlot::Page(0), PageSlot::Page(1)]
        );
    }
}
