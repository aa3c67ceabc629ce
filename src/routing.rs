//! Application router configuration for the dashboard page and the JSON API.

use axum::{Router, response::Redirect, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    api::{get_bar_chart, get_pie_chart, get_statistics, get_transactions},
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(endpoints::TRANSACTIONS_API, get(get_transactions))
        .route(endpoints::STATISTICS_API, get(get_statistics))
        .route(endpoints::BAR_CHART_API, get(get_bar_chart))
        .route(endpoints::PIE_CHART_API, get(get_pie_chart));

    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .merge(api_routes)
        .fallback(get_404_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}
