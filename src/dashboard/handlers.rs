//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI
//! - State and query types used by the handler

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    aggregation::{
        SalesStatistics, calculate_price_histogram, calculate_statistics, count_categories,
    },
    api::default_month,
    dashboard::{
        cards::statistics_cards,
        charts::{DashboardChart, category_chart, charts_script, charts_view, price_range_chart},
        tables::{pagination_nav, transactions_table},
    },
    endpoints,
    filters::{filter_by_month, filter_by_search},
    html::{
        ECHARTS_URL, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, PAGE_CONTAINER_STYLE,
        base,
    },
    pagination::{DEFAULT_PAGE, Page},
    transaction::{MONTH_NAMES, Transaction},
    upstream::Upstream,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the upstream transaction dataset.
    pub upstream: Upstream,
    /// The number of transactions per table page.
    pub page_size: usize,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            upstream: state.upstream.clone(),
            page_size: state.page_size,
        }
    }
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

/// The query parameters for the dashboard page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardQuery {
    /// The full month name, e.g., "March".
    #[serde(default = "default_month")]
    pub month: String,
    /// Text to look for in the title, description, category or price.
    #[serde(default)]
    pub search: String,
    /// The one-based page of the transactions table.
    #[serde(default = "default_page")]
    pub page: usize,
}

impl DashboardQuery {
    /// The dashboard URL for `page` with the same month and search text.
    fn page_url(&self, page: usize) -> String {
        let query = DashboardQuery {
            page,
            ..self.clone()
        };

        match serde_urlencoded::to_string(&query) {
            Ok(query_string) => format!("{}?{query_string}", endpoints::DASHBOARD_VIEW),
            Err(error) => {
                tracing::error!("could not encode dashboard query {query:?}: {error}");
                endpoints::DASHBOARD_VIEW.to_owned()
            }
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    page: Page,
    rows: Vec<Transaction>,
    match_count: usize,
    statistics: SalesStatistics,
    charts: [DashboardChart; 2],
}

/// Display the transactions, statistics and charts for a month.
///
/// Requests made by htmx only get the dashboard content, which replaces the
/// existing content in place. If the dataset cannot be loaded, htmx requests
/// get the content replaced with an error alert and full page loads get the
/// error page.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let transactions = match state.upstream.fetch_transactions().await {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("could not load dashboard for {query:?}: {error}");
            let error = Error::from(error);

            if is_htmx_request {
                return (StatusCode::INTERNAL_SERVER_ERROR, error_content(error)).into_response();
            }

            return error.into_html_response();
        }
    };

    let data = build_dashboard_data(transactions, &query, state.page_size);
    let content = dashboard_content(&query, &data);

    if is_htmx_request {
        content.into_response()
    } else {
        dashboard_view(&query, &content).into_response()
    }
}

/// Runs the aggregation pipeline over the fetched dataset.
///
/// The statistics and charts cover every transaction in the month, the table
/// only shows the current page of transactions that match the search text.
fn build_dashboard_data(
    transactions: Vec<Transaction>,
    query: &DashboardQuery,
    page_size: usize,
) -> DashboardData {
    let month_transactions = filter_by_month(transactions, &query.month);

    let statistics = calculate_statistics(&month_transactions);
    let histogram = calculate_price_histogram(&month_transactions);
    let categories = count_categories(&month_transactions);

    let charts = [
        DashboardChart {
            id: "price-range-chart",
            options: price_range_chart(&query.month, &histogram).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(&query.month, &categories).to_string(),
        },
    ];

    let matches = filter_by_search(month_transactions, &query.search);
    let page = Page::new(query.page, matches.len(), page_size);

    DashboardData {
        page,
        rows: page.slice(&matches).to_vec(),
        match_count: matches.len(),
        statistics,
        charts,
    }
}

/// Renders the full dashboard page with the month and search controls.
fn dashboard_view(query: &DashboardQuery, content: &Markup) -> Markup {
    let dashboard_endpoint = endpoints::DASHBOARD_VIEW;

    let body = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-6" { "Transaction Dashboard" }

            form
                id="dashboard-filters"
                action=(dashboard_endpoint)
                method="get"
                hx-get=(dashboard_endpoint)
                hx-trigger="input changed delay:300ms from:#search, change from:#month"
                hx-target="#dashboard-content"
                hx-target-error="#dashboard-content"
                hx-swap="outerHTML"
                hx-push-url="true"
                hx-indicator="#indicator"
                class="flex flex-col sm:flex-row sm:items-end gap-4 w-full max-w-screen-xl mb-6"
            {
                div class="flex-1"
                {
                    label for="search" class=(FORM_LABEL_STYLE) { "Search" }
                    input
                        type="search"
                        id="search"
                        name="search"
                        placeholder="Search transactions"
                        value=(query.search)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="month" class=(FORM_LABEL_STYLE) { "Select Month" }
                    select id="month" name="month" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for month in MONTH_NAMES {
                            option value=(month) selected[month == query.month] { (month) }
                        }
                    }
                }

                span id="indicator" class="htmx-indicator text-sm text-gray-500 pb-3"
                {
                    "Loading..."
                }
            }

            (content)
        }
    );

    base(
        "Dashboard",
        &[HeadElement::ScriptLink(ECHARTS_URL.to_owned())],
        &body,
    )
}

const DASHBOARD_CONTENT_STYLE: &str = "flex flex-col items-center w-full max-w-screen-xl mx-auto";

/// Renders `error` in place of the dashboard content.
///
/// The alert keeps the content ID so that later requests can replace it.
fn error_content(error: Error) -> Markup {
    html!(
        div id="dashboard-content" class=(DASHBOARD_CONTENT_STYLE)
        {
            (error.into_alert())
        }
    )
}

/// Renders the part of the dashboard that changes with the query.
fn dashboard_content(query: &DashboardQuery, data: &DashboardData) -> Markup {
    html!(
        div id="dashboard-content" class=(DASHBOARD_CONTENT_STYLE)
        {
            section id="transactions" class="w-full mb-8"
            {
                h2 class="text-xl font-semibold mb-4" { "Transactions" }

                (transactions_table(&data.rows, data.match_count))
                (pagination_nav(&data.page, |page| query.page_url(page)))
            }

            (statistics_cards(&query.month, &data.statistics))
            (charts_view(&data.charts))
            (charts_script(&data.charts))
        }
    )
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};

    use crate::{
        endpoints,
        test_utils::{
            FixtureUpstream, assert_hx_endpoint, assert_valid_html, must_get_form, must_select,
            parse_html_document, parse_html_fragment, sample_dataset, test_server,
        },
        transaction::Transaction,
    };

    use super::DashboardQuery;

    fn row_ids(html: &scraper::Html) -> Vec<String> {
        must_select(html, "tbody tr[data-transaction-id]")
            .iter()
            .filter_map(|row| row.value().attr("data-transaction-id"))
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = parse_html_document(&response.text());
        assert_valid_html(&html);

        assert_eq!(must_select(&html, "#price-range-chart").len(), 1);
        assert_eq!(must_select(&html, "#category-chart").len(), 1);
        assert_eq!(must_select(&html, "table").len(), 1);
    }

    #[tokio::test]
    async fn shows_first_page_of_march_by_default() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        let html = parse_html_document(&response.text());
        assert_eq!(row_ids(&html), vec!["1", "2", "3"]);

        let indicator = must_select(&html, "#page-indicator")[0]
            .text()
            .collect::<String>();
        assert_eq!(indicator, "Page 1 of 2");

        let selected = must_select(&html, "#month option[selected]");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value().attr("value"), Some("March"));
    }

    #[tokio::test]
    async fn second_page_shows_remaining_rows() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("page", 2)
            .await;

        let html = parse_html_document(&response.text());
        assert_eq!(row_ids(&html), vec!["5"]);

        let previous = must_select(&html, "nav a");
        assert_eq!(previous.len(), 1);
        assert_eq!(
            previous[0].value().attr("href"),
            Some("/dashboard?month=March&search=&page=1")
        );
    }

    #[tokio::test]
    async fn search_filters_table_but_not_statistics() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("month", "March")
            .add_query_param("search", "electronics")
            .await;

        let html = parse_html_document(&response.text());
        assert_eq!(row_ids(&html), vec!["2", "5"]);

        let sold = must_select(&html, "#total-sold-items p")[0]
            .text()
            .collect::<String>();
        assert_eq!(sold, "3");
        let not_sold = must_select(&html, "#total-not-sold-items p")[0]
            .text()
            .collect::<String>();
        assert_eq!(not_sold, "1");
    }

    #[tokio::test]
    async fn charts_use_month_aggregations() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("month", "July")
            .await;

        let text = response.text();
        assert!(text.contains("Price Range Distribution - July"));
        assert!(text.contains("Category Distribution - July"));
        assert!(text.contains("jewelery"));
        assert!(!text.contains("men's clothing"));
    }

    #[tokio::test]
    async fn filter_form_requests_dashboard_content() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        let html = parse_html_document(&response.text());
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::DASHBOARD_VIEW, "hx-get");
        assert_hx_endpoint(&form, "#dashboard-content", "hx-target");
        assert_hx_endpoint(&form, "#dashboard-content", "hx-target-error");
    }

    #[tokio::test]
    async fn htmx_request_gets_content_only() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_header(
                HeaderName::from_static("hx-request"),
                HeaderValue::from_static("true"),
            )
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(!text.contains("<html"));

        let html = parse_html_fragment(&text);
        assert_eq!(must_select(&html, "#dashboard-content").len(), 1);
        assert!(must_select(&html, "form").is_empty());
    }

    #[tokio::test]
    async fn empty_month_shows_no_match_message() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("month", "December")
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains("No transactions match your search."));
        assert!(text.contains("Page 1 of 1"));
    }

    #[tokio::test]
    async fn upstream_failure_shows_error_page() {
        let fixture = FixtureUpstream::serving_status(500).await;
        let server = test_server(&fixture);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .expect_failure()
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.text().contains("Could not load the transactions"));
    }

    #[tokio::test]
    async fn upstream_failure_on_htmx_request_shows_alert_in_content() {
        let fixture = FixtureUpstream::serving_status(500).await;
        let server = test_server(&fixture);

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_header(
                HeaderName::from_static("hx-request"),
                HeaderValue::from_static("true"),
            )
            .expect_failure()
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let text = response.text();
        assert!(!text.contains("<html"));

        let html = parse_html_fragment(&text);
        assert_eq!(must_select(&html, "#dashboard-content").len(), 1);
        let alert = must_select(&html, "#dashboard-content [role=alert]");
        assert_eq!(alert.len(), 1);
        assert!(
            alert[0]
                .text()
                .collect::<String>()
                .contains("Could not load the transactions")
        );
    }

    #[tokio::test]
    async fn month_cannot_inject_markup_into_chart_script() {
        let fixture = FixtureUpstream::serving_dataset().await;
        let server = test_server(&fixture);
        let injected = "</script><img src=x onerror=alert(1)>";

        let response = server
            .get(endpoints::DASHBOARD_VIEW)
            .add_query_param("month", injected)
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(!text.contains(injected));

        let html = parse_html_document(&text);
        assert!(must_select(&html, "img[onerror]").is_empty());
    }

    #[tokio::test]
    async fn category_cannot_inject_markup_into_chart_script() {
        let injected = "</script><script>alert(1)</script>";
        let body = serde_json::to_string(&[Transaction {
            category: injected.to_owned(),
            ..sample_dataset()[0].clone()
        }])
        .expect("could not serialize dataset");
        let fixture = FixtureUpstream::serving_body(&body).await;
        let server = test_server(&fixture);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(!response.text().contains(injected));
    }

    #[test]
    fn page_url_keeps_month_and_search() {
        let query = DashboardQuery {
            month: "April".to_owned(),
            search: "rain jacket".to_owned(),
            page: 1,
        };

        assert_eq!(
            query.page_url(3),
            "/dashboard?month=April&search=rain+jacket&page=3"
        );
    }
}
