//! JSON route handlers for the transaction list and the per-month aggregations.
//!
//! Every handler fetches the full dataset from upstream, filters it to the
//! requested month and applies one aggregation. Nothing is shared between
//! requests.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    aggregation::{
        CategoryCounts, PriceHistogram, SalesStatistics, calculate_price_histogram,
        calculate_statistics, count_categories,
    },
    filters::{DEFAULT_MONTH, filter_by_month, filter_by_search},
    transaction::Transaction,
    upstream::Upstream,
};

pub(crate) fn default_month() -> String {
    DEFAULT_MONTH.to_owned()
}

/// The query parameters for listing transactions.
#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    /// The full month name, e.g., "March".
    #[serde(default = "default_month")]
    pub month: String,
    /// Text to look for in the title, description, category or price.
    #[serde(default)]
    pub search: String,
}

/// The query parameters for the aggregation endpoints.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// The full month name, e.g., "March".
    #[serde(default = "default_month")]
    pub month: String,
}

/// The response body for listing transactions.
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    /// The matching transactions in upstream order.
    pub transactions: Vec<Transaction>,
}

async fn fetch_month(upstream: &Upstream, month: &str) -> Result<Vec<Transaction>, Error> {
    let transactions = upstream.fetch_transactions().await?;

    Ok(filter_by_month(transactions, month))
}

/// List the transactions sold in a month that match the search text.
pub async fn get_transactions(
    State(upstream): State<Upstream>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<TransactionsResponse>, Error> {
    let transactions = fetch_month(&upstream, &query.month).await?;
    let transactions = filter_by_search(transactions, &query.search);

    tracing::debug!(
        "found {} transactions for month {:?} and search {:?}",
        transactions.len(),
        query.month,
        query.search
    );

    Ok(Json(TransactionsResponse { transactions }))
}

/// Get the total sales and the number of sold and unsold items for a month.
pub async fn get_statistics(
    State(upstream): State<Upstream>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<SalesStatistics>, Error> {
    let transactions = fetch_month(&upstream, &query.month).await?;

    Ok(Json(calculate_statistics(&transactions)))
}

/// Get the number of items in each price range for a month.
pub async fn get_bar_chart(
    State(upstream): State<Upstream>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<PriceHistogram>, Error> {
    let transactions = fetch_month(&upstream, &query.month).await?;

    Ok(Json(calculate_price_histogram(&transactions)))
}

/// Get the number of items in each category for a month.
pub async fn get_pie_chart(
    State(upstream): State<Upstream>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CategoryCounts>, Error> {
    let transactions = fetch_month(&upstream, &query.month).await?;

    Ok(Json(count_categories(&transactions)))
}
