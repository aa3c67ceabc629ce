//! The product-sale record served by the upstream dataset.

use serde::{Deserialize, Serialize};
use time::{
    Date, Month, OffsetDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// A single product sale from the upstream dataset.
///
/// Records are passed through as-is, the only field that is interpreted is
/// `date_of_sale`, and only for its month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The upstream ID of the product.
    pub id: i64,
    /// The product name.
    pub title: String,
    /// Free text describing the product.
    pub description: String,
    /// The product's list price.
    pub price: f64,
    /// The category the product is listed under, e.g., "electronics".
    pub category: String,
    /// The URL of the product picture.
    pub image: String,
    /// Whether the product was sold.
    pub sold: bool,
    /// The timestamp of the sale as it appears upstream.
    pub date_of_sale: String,
}

impl Transaction {
    /// The calendar month the sale happened in.
    ///
    /// `date_of_sale` is read as an RFC 3339 timestamp in its own offset,
    /// falling back to a plain `YYYY-MM-DD` date. Returns `None` if neither
    /// format matches.
    pub fn sale_month(&self) -> Option<Month> {
        if let Ok(timestamp) = OffsetDateTime::parse(&self.date_of_sale, &Rfc3339) {
            return Some(timestamp.month());
        }

        Date::parse(&self.date_of_sale, format_description!("[year]-[month]-[day]"))
            .map(|date| date.month())
            .ok()
    }

    /// The price as a decimal string, e.g., "100" or "329.85".
    pub fn price_text(&self) -> String {
        self.price.to_string()
    }
}

/// Get the full English name of `month`, e.g., "March".
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

/// The twelve month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
