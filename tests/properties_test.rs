//! Property tests for pagination and the view-state toggles.

use std::time::{Duration, Instant};

use admindash::domain::{
    paginate, NavigationState, PaginationState, ViewStateChange, ViewStateStore, MENU,
};
use proptest::prelude::*;

fn toggle() -> impl Strategy<Value = ViewStateChange> {
    prop_oneof![
        Just(ViewStateChange::ToggleLeftPanel),
        Just(ViewStateChange::ToggleRightPanel),
        Just(ViewStateChange::ToggleTheme),
    ]
}

fn any_change() -> impl Strategy<Value = ViewStateChange> {
    prop_oneof![
        toggle(),
        any::<bool>().prop_map(ViewStateChange::SetLeftPanel),
        any::<bool>().prop_map(ViewStateChange::SetRightPanel),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    /// Every page fits, all but the last are full, and the count rounds up.
    #[test]
    fn test_paginate_page_shape(len in 0usize..300, size in 1usize..40, index in 0usize..20) {
        let records: Vec<usize> = (0..len).collect();
        let page = paginate(&records, index, size).unwrap();

        prop_assert!(page.visible.len() <= size);
        prop_assert_eq!(page.page_count, len.div_ceil(size));
        if index + 1 < page.page_count {
            prop_assert_eq!(page.visible.len(), size);
        }
        if index >= page.page_count {
            prop_assert!(page.visible.is_empty());
        }
    }

    /// Reading every page in order gives back the records.
    #[test]
    fn test_pages_concatenate_to_records(
        records in prop::collection::vec(any::<u32>(), 0..200),
        size in 1usize..25,
    ) {
        let page_count = paginate(&records, 0, size).unwrap().page_count;
        let joined: Vec<u32> = (0..page_count)
            .flat_map(|index| paginate(&records, index, size).unwrap().visible.to_vec())
            .collect();
        prop_assert_eq!(joined, records);
    }

    /// A stored index past the end still reads the last page.
    #[test]
    fn test_state_reads_clamped_page(
        len in 1usize..300,
        size in 1usize..40,
        target in 0usize..100,
    ) {
        let records: Vec<usize> = (0..len).collect();
        let mut state = PaginationState::new(size).unwrap();
        state.go_to(target, len);
        let page = state.page(&records);
        prop_assert!(!page.visible.is_empty());
        prop_assert!(state.clamped_index(len) < page.page_count);
    }

    /// Applying a toggle twice restores the flags, from any reachable state.
    #[test]
    fn test_toggles_are_involutions(
        history in prop::collection::vec(any_change(), 0..12),
        change in toggle(),
    ) {
        let mut store = ViewStateStore::new(Duration::from_millis(300));
        let t0 = Instant::now();
        for earlier in history {
            store.apply(earlier, t0);
        }
        let before = store.flags();

        prop_assert!(store.apply(change, t0));
        prop_assert_ne!(store.flags(), before);
        prop_assert!(store.apply(change, t0 + Duration::from_millis(10)));
        prop_assert_eq!(store.flags(), before);
        prop_assert!(store.in_transition());
    }

    /// Toggling a group twice restores the expanded set for every group.
    #[test]
    fn test_toggle_group_is_self_inverse(
        history in prop::collection::vec(0..MENU.groups.len(), 0..10),
        group in 0..MENU.groups.len(),
    ) {
        let mut nav = NavigationState::default();
        for earlier in history {
            nav.toggle_group(MENU.groups[earlier].label).unwrap();
        }
        let before = nav.expanded_groups().clone();
        let leaf = nav.active_leaf();

        let label = MENU.groups[group].label;
        let opened = nav.toggle_group(label).unwrap();
        prop_assert_eq!(opened, !before.contains(label));
        prop_assert_eq!(nav.toggle_group(label).unwrap(), !opened);
        prop_assert_eq!(nav.expanded_groups(), &before);
        prop_assert_eq!(nav.active_leaf(), leaf);
    }
}
