//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page showing the transactions table, statistics and charts for a month.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// The route for listing a month's transactions, optionally filtered by a search term.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for a month's sales totals.
pub const STATISTICS_API: &str = "/api/transactions/statistics";
/// The route for a month's item counts per price range.
pub const BAR_CHART_API: &str = "/api/transactions/bar-chart";
/// The route for a month's item counts per category.
pub const PIE_CHART_API: &str = "/api/transactions/pie-chart";
