//! Sidebar menu tree and the single source of the active leaf

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::error::ContractViolation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: &'static str,
    pub leaves: &'static [&'static str],
}

/// The static menu: top-level dashboard leaves plus expandable page groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTree {
    pub dashboards: &'static [&'static str],
    pub groups: &'static [MenuGroup],
}

pub const MENU: MenuTree = MenuTree {
    dashboards: &["Default", "eCommerce", "Projects", "Online Courses"],
    groups: &[
        MenuGroup {
            label: "User Profile",
            leaves: &[
                "Overview",
                "User Projects",
                "Campaigns",
                "Documents",
                "Followers",
            ],
        },
        MenuGroup {
            label: "Account",
            leaves: &[
                "Profile",
                "Settings",
                "Billing",
                "Notifications",
                "Security",
            ],
        },
        MenuGroup {
            label: "Corporate",
            leaves: &[
                "Company",
                "Departments",
                "Corporate Projects",
                "Tasks",
                "Calendar",
            ],
        },
        MenuGroup {
            label: "Blog",
            leaves: &["Posts", "Categories", "Tags", "Comments", "Authors"],
        },
        MenuGroup {
            label: "Social",
            leaves: &["Feed", "Messages", "Friends", "Groups", "Notifications 1"],
        },
    ],
};

pub const DEFAULT_LEAF: &str = "Default";

impl MenuTree {
    pub fn group(&self, label: &str) -> Option<&MenuGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// Group owning `leaf`, if the leaf is not a top-level dashboard.
    pub fn parent_of(&self, leaf: &str) -> Option<&MenuGroup> {
        self.groups
            .iter()
            .find(|group| group.leaves.iter().any(|candidate| *candidate == leaf))
    }
}

/// One line of the flattened, currently visible menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Dashboard(&'static str),
    Group {
        label: &'static str,
        expanded: bool,
    },
    Leaf {
        group: &'static str,
        label: &'static str,
    },
}

impl MenuRow {
    pub fn label(&self) -> &'static str {
        match self {
            MenuRow::Dashboard(label) => *label,
            MenuRow::Group { label, .. } => *label,
            MenuRow::Leaf { label, .. } => *label,
        }
    }
}

/// Which leaf is active and which groups are open.
///
/// Groups open independently; opening one never closes another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    tree: MenuTree,
    active_leaf: &'static str,
    expanded_groups: BTreeSet<&'static str>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(MENU)
    }
}

impl NavigationState {
    pub fn new(tree: MenuTree) -> Self {
        let active_leaf = tree.dashboards.first().copied().unwrap_or(DEFAULT_LEAF);
        Self {
            tree,
            active_leaf,
            expanded_groups: BTreeSet::new(),
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn active_leaf(&self) -> &'static str {
        self.active_leaf
    }

    pub fn expanded_groups(&self) -> &BTreeSet<&'static str> {
        &self.expanded_groups
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded_groups.contains(group)
    }

    /// Make `label` the active leaf. Labels outside the menu tree are
    /// rejected and leave the selection unchanged.
    pub fn select_leaf(&mut self, label: &str) -> Result<(), ContractViolation> {
        let Some(leaf) = self.resolve_leaf(label) else {
            warn!(label, "rejected unknown menu leaf");
            return Err(ContractViolation::UnknownLeaf(label.to_string()));
        };
        self.active_leaf = leaf;
        debug!(leaf, "active leaf changed");
        Ok(())
    }

    /// Flip `group` open/closed. Returns whether it is now expanded.
    pub fn toggle_group(&mut self, label: &str) -> Result<bool, ContractViolation> {
        let Some(group) = self.tree.group(label).map(|group| group.label) else {
            return Err(ContractViolation::UnknownGroup(label.to_string()));
        };
        let expanded = if self.expanded_groups.remove(group) {
            false
        } else {
            self.expanded_groups.insert(group);
            true
        };
        debug!(group, expanded, "menu group toggled");
        Ok(expanded)
    }

    /// Rows in display order, with children of expanded groups inlined.
    pub fn visible_rows(&self) -> Vec<MenuRow> {
        let mut rows: Vec<MenuRow> = self
            .tree
            .dashboards
            .iter()
            .map(|label| MenuRow::Dashboard(*label))
            .collect();
        for group in self.tree.groups {
            let expanded = self.expanded_groups.contains(group.label);
            rows.push(MenuRow::Group {
                label: group.label,
                expanded,
            });
            if expanded {
                rows.extend(group.leaves.iter().map(|label| MenuRow::Leaf {
                    group: group.label,
                    label: *label,
                }));
            }
        }
        rows
    }

    fn resolve_leaf(&self, label: &str) -> Option<&'static str> {
        self.tree
            .dashboards
            .iter()
            .chain(self.tree.groups.iter().flat_map(|group| group.leaves.iter()))
            .find(|leaf| **leaf == label)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_leaf() {
        let nav = NavigationState::default();
        assert_eq!(nav.active_leaf(), "Default");
        assert!(nav.expanded_groups().is_empty());
    }

    #[test]
    fn test_select_known_leaf() {
        let mut nav = NavigationState::default();
        nav.select_leaf("Billing").unwrap();
        assert_eq!(nav.active_leaf(), "Billing");
        assert_eq!(MENU.parent_of("Billing").map(|g| g.label), Some("Account"));
    }

    #[test]
    fn test_select_unknown_leaf_is_rejected() {
        let mut nav = NavigationState::default();
        let err = nav.select_leaf("Nowhere").unwrap_err();
        assert_eq!(err, ContractViolation::UnknownLeaf("Nowhere".to_string()));
        assert_eq!(nav.active_leaf(), "Default");

        // Group labels are not leaves.
        assert!(nav.select_leaf("Blog").is_err());
    }

    #[test]
    fn test_toggle_group_is_self_inverse() {
        let mut nav = NavigationState::default();
        let before = nav.expanded_groups().clone();
        assert!(nav.toggle_group("Blog").unwrap());
        assert!(!nav.toggle_group("Blog").unwrap());
        assert_eq!(nav.expanded_groups(), &before);
    }

    #[test]
    fn test_groups_expand_independently() {
        let mut nav = NavigationState::default();
        nav.toggle_group("Blog").unwrap();
        nav.toggle_group("Social").unwrap();
        assert!(nav.is_expanded("Blog"));
        assert!(nav.is_expanded("Social"));
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        let mut nav = NavigationState::default();
        assert_eq!(
            nav.toggle_group("Default"),
            Err(ContractViolation::UnknownGroup("Default".to_string()))
        );
    }

    #[test]
    fn test_visible_rows_inline_expanded_children() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.visible_rows().len(), 4 + 5);

        nav.toggle_group("Account").unwrap();
        let rows = nav.visible_rows();
        assert_eq!(rows.len(), 4 + 5 + 5);
        let account = rows
            .iter()
            .position(|row| row.label() == "Account")
            .unwrap();
        assert_eq!(
            rows[account + 1],
            MenuRow::Leaf {
                group: "Account",
                label: "Profile",
            }
        );
    }
}
