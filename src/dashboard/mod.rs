//! Dashboard module
//!
//! Provides a page showing a month of transactions alongside the month's
//! sales statistics and charts. The table can be narrowed by a search term.

mod cards;
mod charts;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
