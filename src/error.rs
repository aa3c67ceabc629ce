//! Defines the app level error type and its conversions to JSON and HTML responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;
use serde::Serialize;

use crate::{internal_server_error::InternalServerError, upstream::FetchError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction dataset could not be fetched from upstream.
    ///
    /// Every request needs the full dataset, so there is no partial result to
    /// fall back to.
    #[error("could not fetch the transaction dataset: {0}")]
    Fetch(#[from] FetchError),
}

/// The JSON body sent to API clients when a request fails.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// A short, fixed summary of what went wrong.
    pub message: &'static str,
    /// The underlying cause.
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = match self {
            Error::Fetch(error) => ErrorBody {
                message: "Error fetching data",
                error: error.to_string(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn fetch_failure_view() -> InternalServerError<'static> {
    InternalServerError {
        description: "Could not load the transactions",
        fix: "The transaction dataset is unavailable. Try again later or check the server logs.",
    }
}

impl Error {
    /// Convert the error into an HTML error page for the dashboard.
    pub fn into_html_response(self) -> Response {
        match self {
            Error::Fetch(_) => fetch_failure_view().into_response(),
        }
    }

    /// Convert the error into an alert for htmx to swap into the dashboard.
    pub fn into_alert(self) -> Markup {
        match self {
            Error::Fetch(_) => fetch_failure_view().into_alert(),
        }
    }
}
