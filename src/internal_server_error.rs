//! Defines the page to display for an internal server error.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use maud::{Markup, html};

use crate::html::error_view;

pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl InternalServerError<'_> {
    pub fn into_html(self) -> Html<String> {
        Html(error_view("Internal Server Error", "500", self.description, self.fix).into_string())
    }
}

impl InternalServerError<'_> {
    /// Render the error as an alert that replaces part of an existing page.
    pub fn into_alert(self) -> Markup {
        html!(
            div
                role="alert"
                class="w-full p-4 mb-4 text-sm rounded-lg text-red-800 bg-red-50
                    dark:bg-gray-800 dark:text-red-400"
            {
                p class="font-semibold" { (self.description) }
                p { (self.fix) }
            }
        )
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}
