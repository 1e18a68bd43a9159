//! Page slicing over an in-memory record set

use std::num::NonZeroUsize;

use super::error::ContractViolation;

/// One page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub page_count: usize,
}

/// Number of pages needed for `len` records. An empty set has zero pages.
pub fn page_count(len: usize, page_size: usize) -> Result<usize, ContractViolation> {
    Ok(len.div_ceil(non_zero(page_size)?.get()))
}

fn non_zero(page_size: usize) -> Result<NonZeroUsize, ContractViolation> {
    NonZeroUsize::new(page_size).ok_or(ContractViolation::NonPositivePageSize)
}

/// Slice out page `page_index`.
///
/// An index past the last page yields an empty `visible` slice, not an
/// error. There is no wraparound.
pub fn paginate<T>(
    records: &[T],
    page_index: usize,
    page_size: usize,
) -> Result<Page<'_, T>, ContractViolation> {
    Ok(slice_page(records, page_index, non_zero(page_size)?))
}

fn slice_page<T>(records: &[T], page_index: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let size = page_size.get();
    let visible = match page_index.checked_mul(size) {
        Some(offset) if offset < records.len() => {
            let end = offset.saturating_add(size).min(records.len());
            &records[offset..end]
        }
        _ => &records[records.len()..],
    };
    Page {
        visible,
        page_count: records.len().div_ceil(size),
    }
}

/// Page cursor for a view.
///
/// The index is not clamped when it is set; readers call
/// [`PaginationState::clamp`] against the current record count, so a record
/// set that shrinks under a high page index recovers on the next read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: NonZeroUsize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Result<Self, ContractViolation> {
        Ok(Self::from(non_zero(page_size)?))
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn set_page_size(
        &mut self,
        page_size: usize,
        total: usize,
    ) -> Result<(), ContractViolation> {
        self.page_size = non_zero(page_size)?;
        self.clamp(total);
        Ok(())
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get())
    }

    /// The index pulled into `[0, page_count - 1]` (0 when empty), without
    /// storing it.
    pub fn clamped_index(&self, total: usize) -> usize {
        self.page_index.min(self.page_count(total).saturating_sub(1))
    }

    /// Pull the index back into `[0, page_count - 1]` (0 when empty).
    pub fn clamp(&mut self, total: usize) -> usize {
        self.page_index = self.clamped_index(total);
        self.page_index
    }

    /// Jump to `index`, clamped to the available pages.
    pub fn go_to(&mut self, index: usize, total: usize) -> usize {
        self.page_index = index;
        self.clamp(total)
    }

    pub fn next(&mut self, total: usize) -> usize {
        self.clamp(total);
        self.go_to(self.page_index.saturating_add(1), total)
    }

    pub fn prev(&mut self, total: usize) -> usize {
        self.clamp(total);
        self.page_index = self.page_index.saturating_sub(1);
        self.page_index
    }

    pub fn first(&mut self) -> usize {
        self.page_index = 0;
        0
    }

    pub fn last(&mut self, total: usize) -> usize {
        self.go_to(usize::MAX, total)
    }

    /// The page at the clamped index. The stored index is left alone.
    pub fn page<'a, T>(&self, records: &'a [T]) -> Page<'a, T> {
        slice_page(records, self.clamped_index(records.len()), self.page_size)
    }

    /// Clamp, then slice the current page out of `records`.
    pub fn current<'a, T>(&mut self, records: &'a [T]) -> Page<'a, T> {
        self.clamp(records.len());
        self.page(records)
    }

    /// Slots for a numbered page strip around the current page.
    pub fn window(&self, total: usize, margin: usize, range: usize) -> Vec<PageSlot> {
        page_window(
            self.clamped_index(total),
            self.page_count(total),
            margin,
            range,
        )
    }

    #[cfg(test)]
    fn set_raw_index(&mut self, index: usize) {
        self.page_index = index;
    }
}

impl From<NonZeroUsize> for PaginationState {
    fn from(page_size: NonZeroUsize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }
}

/// One entry of a page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Break,
}

/// Build a page strip: `margin` pages at each end, `range` pages on either
/// side of `current`, and a [`PageSlot::Break`] wherever pages are skipped.
pub fn page_window(
    current: usize,
    page_count: usize,
    margin: usize,
    range: usize,
) -> Vec<PageSlot> {
    let mut slots = Vec::new();
    let mut previous: Option<usize> = None;
    for index in 0..page_count {
        let near_edge = index < margin || index.saturating_add(margin) >= page_count;
        let near_current =
            index.saturating_add(range) >= current && index <= current.saturating_add(range);
        if !(near_edge || near_current) {
            continue;
        }
        if let Some(prev) = previous {
            if index > prev + 1 {
                slots.push(PageSlot::Break);
            }
        }
        slots.push(PageSlot::Page(index));
        previous = Some(index);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_is_rejected() {
        let records = [1, 2, 3];
        assert_eq!(
            paginate(&records, 0, 0),
            Err(ContractViolation::NonPositivePageSize)
        );
        assert!(PaginationState::new(0).is_err());
        assert!(page_count(3, 0).is_err());
    }

    #[test]
    fn test_nine_records_make_two_pages() {
        let records: Vec<u32> = (1..=9).collect();
        let first = paginate(&records, 0, 5).unwrap();
        assert_eq!(first.visible, &[1, 2, 3, 4, 5]);
        assert_eq!(first.page_count, 2);

        let second = paginate(&records, 1, 5).unwrap();
        assert_eq!(second.visible, &[6, 7, 8, 9]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records: Vec<u32> = (1..=9).collect();
        let page = paginate(&records, 2, 5).unwrap();
        assert!(page.visible.is_empty());
        assert_eq!(page.page_count, 2);

        let huge = paginate(&records, usize::MAX, 5).unwrap();
        assert!(huge.visible.is_empty());
    }

    #[test]
    fn test_empty_records_have_zero_pages() {
        let records: [u8; 0] = [];
        let page = paginate(&records, 0, 5).unwrap();
        assert_eq!(page.page_count, 0);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn test_state_clamps_after_shrink() {
        let mut state = PaginationState::new(5).unwrap();
        state.go_to(3, 20);
        assert_eq!(state.page_index(), 3);

        // Record set shrinks to 7 rows: only pages 0 and 1 remain.
        assert_eq!(state.clamp(7), 1);

        // And to nothing at all.
        assert_eq!(state.clamp(0), 0);
    }

    #[test]
    fn test_state_navigation_stops_at_edges() {
        let mut state = PaginationState::new(5).unwrap();
        assert_eq!(state.prev(9), 0);
        assert_eq!(state.next(9), 1);
        assert_eq!(state.next(9), 1);
        assert_eq!(state.first(), 0);
        assert_eq!(state.last(9), 1);
    }

    #[test]
    fn test_current_reads_clamped_page() {
        let records: Vec<u32> = (1..=9).collect();
        let mut state = PaginationState::new(5).unwrap();
        state.set_raw_index(7);
        let page = state.current(&records);
        assert_eq!(page.visible, &[6, 7, 8, 9]);
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn test_page_reads_without_storing() {
        let records: Vec<u32> = (1..=9).collect();
        let mut state = PaginationState::new(5).unwrap();
        state.set_raw_index(7);
        assert_eq!(state.page(&records).visible, &[6, 7, 8, 9]);
        assert_eq!(state.page_index(), 7);
        assert!(state.page(&records[..0]).visible.is_empty());
    }

    #[test]
    fn test_from_non_zero() {
        let state = PaginationState::from(NonZeroUsize::MIN);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_page_window_breaks() {
        use PageSlot::{Break, Page};
        assert_eq!(page_window(0, 2, 1, 1), vec![Page(0), Page(1)]);
        assert_eq!(
            page_window(5, 10, 1, 1),
            vec![Page(0), Break, Page(4), Page(5), Page(6), Break, Page(9)]
        );
        assert!(page_window(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_page_window_huge_margin_and_range() {
        use PageSlot::Page;
        assert_eq!(
            page_window(1, 3, usize::MAX, usize::MAX),
            vec![Page(0), Page(1), Page(2)]
        );
        assert_eq!(
            page_window(usize::MAX, 2, 0, usize::MAX),
            vec![Page(0), Page(1)]
        );
    }

    #[test]
    fn test_set_page_size_reclamps() {
        let mut state = PaginationState::new(2).unwrap();
        state.go_to(4, 9);
        state.set_page_size(5, 9).unwrap();
        assert_eq!(state.page_index(), 1);
        assert!(state.set_page_size(0, 9).is_err());
        assert_eq!(state.page_size(), 5);
    }
}
