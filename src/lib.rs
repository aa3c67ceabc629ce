//! A sales dashboard for a product transaction dataset.
//!
//! The dataset is fetched from a static upstream JSON document on every
//! request. This library provides a JSON API for a month's transactions,
//! sales statistics, price range histogram and category counts, as well as
//! a server rendered dashboard page showing all of them at once.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod api;
mod app_state;
mod dashboard;
mod endpoints;
mod error;
mod filters;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod pagination;
mod routing;
mod transaction;
mod upstream;

#[cfg(test)]
mod test_utils;

pub use aggregation::{CategoryCounts, PriceHistogram, PriceRange, SalesStatistics};
pub use app_state::AppState;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::DEFAULT_PAGE_SIZE;
pub use routing::build_router;
pub use transaction::Transaction;
pub use upstream::{DEFAULT_UPSTREAM_URL, FetchError, Upstream};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
