//! Shell components
//!
//! Each module implements the Module trait and handles its own key input
//! and rendering:
//! - sidebar: profile, favorites and the dashboards/pages menu
//! - header: breadcrumb, star, bell/clock and panel toggles
//! - dashboard: summary cards and charts (route `/`)
//! - orders: paginated order list (route `/orders`)
//! - notifications: right-hand notifications/activities/contacts panel

pub mod dashboard;
pub mod header;
pub mod notifications;
pub mod orders;
pub mod sidebar;
