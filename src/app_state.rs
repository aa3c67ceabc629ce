//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::upstream::Upstream;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the upstream transaction dataset.
    pub upstream: Upstream,

    /// The number of transactions per page in the dashboard table.
    pub page_size: usize,
}

impl AppState {
    /// Create the app state for the dataset at `upstream_url`.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(upstream_url: impl Into<String>, page_size: usize) -> Self {
        Self {
            upstream: Upstream::new(upstream_url),
            page_size: page_size.max(1),
        }
    }
}

impl FromRef<AppState> for Upstream {
    fn from_ref(state: &AppState) -> Self {
        state.upstream.clone()
    }
}
