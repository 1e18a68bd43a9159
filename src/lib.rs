//! Terminal admin dashboard: view-state store, paginated orders, status
//! colors and the sidebar navigation model, rendered with ratatui.

pub mod app;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod logging;
pub mod modules;
pub mod ui;
