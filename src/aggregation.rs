//! Summary statistics, price histogram and category counts for a month of
//! transactions.
//!
//! Each aggregation is a single pass over a month-filtered list, see
//! [crate::filters::filter_by_month].

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::transaction::Transaction;

/// Sales totals for a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatistics {
    /// The sum of the prices of the sold items.
    pub total_sales_amount: f64,
    /// The number of sold items.
    pub total_sold_items: usize,
    /// The number of items that were not sold.
    pub total_not_sold_items: usize,
}

/// Sum the sales and count the sold and unsold items.
pub fn calculate_statistics(transactions: &[Transaction]) -> SalesStatistics {
    transactions
        .iter()
        .fold(SalesStatistics::default(), |mut statistics, transaction| {
            if transaction.sold {
                statistics.total_sales_amount += transaction.price;
                statistics.total_sold_items += 1;
            } else {
                statistics.total_not_sold_items += 1;
            }

            statistics
        })
}

/// One of the ten fixed price ranges used for the bar chart.
///
/// Each range includes its upper bound, so a price of exactly 100 is in
/// [PriceRange::UpTo100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    /// From 0 up to and including 100.
    UpTo100,
    /// More than 100 and at most 200.
    UpTo200,
    /// More than 200 and at most 300.
    UpTo300,
    /// More than 300 and at most 400.
    UpTo400,
    /// More than 400 and at most 500.
    UpTo500,
    /// More than 500 and at most 600.
    UpTo600,
    /// More than 600 and at most 700.
    UpTo700,
    /// More than 700 and at most 800.
    UpTo800,
    /// More than 800 and at most 900.
    UpTo900,
    /// More than 900, and any negative or NaN price.
    Above900,
}

impl PriceRange {
    /// All ranges in ascending order.
    pub const ALL: [PriceRange; 10] = [
        PriceRange::UpTo100,
        PriceRange::UpTo200,
        PriceRange::UpTo300,
        PriceRange::UpTo400,
        PriceRange::UpTo500,
        PriceRange::UpTo600,
        PriceRange::UpTo700,
        PriceRange::UpTo800,
        PriceRange::UpTo900,
        PriceRange::Above900,
    ];

    /// Find the range for `price`.
    ///
    /// Anything that is not at most 900 lands in [PriceRange::Above900],
    /// including negative prices and NaN.
    pub fn for_price(price: f64) -> Self {
        if price.is_nan() || price < 0.0 {
            return PriceRange::Above900;
        }

        Self::ALL
            .into_iter()
            .zip(1..=9u32)
            .find(|(_, hundreds)| price <= f64::from(*hundreds) * 100.0)
            .map(|(range, _)| range)
            .unwrap_or(PriceRange::Above900)
    }

    /// The label used as the JSON key and chart axis label, e.g., "101-200".
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::UpTo100 => "0-100",
            PriceRange::UpTo200 => "101-200",
            PriceRange::UpTo300 => "201-300",
            PriceRange::UpTo400 => "301-400",
            PriceRange::UpTo500 => "401-500",
            PriceRange::UpTo600 => "501-600",
            PriceRange::UpTo700 => "601-700",
            PriceRange::UpTo800 => "701-800",
            PriceRange::UpTo900 => "801-900",
            PriceRange::Above900 => "901-above",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The number of items in each [PriceRange].
///
/// Serializes as a flat JSON object with all ten labels in ascending order,
/// including empty ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceHistogram {
    counts: [usize; 10],
}

impl PriceHistogram {
    /// The number of items in `range`.
    pub fn count(&self, range: PriceRange) -> usize {
        self.counts[range.index()]
    }

    /// The ranges and their counts in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (PriceRange, usize)> + '_ {
        PriceRange::ALL
            .iter()
            .map(|range| (*range, self.count(*range)))
    }

    /// The total number of items across all ranges.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for PriceHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;

        for (range, count) in self.iter() {
            map.serialize_entry(range.label(), &count)?;
        }

        map.end()
    }
}

/// Count the items in each price range.
pub fn calculate_price_histogram(transactions: &[Transaction]) -> PriceHistogram {
    let mut histogram = PriceHistogram::default();

    for transaction in transactions {
        histogram.counts[PriceRange::for_price(transaction.price).index()] += 1;
    }

    histogram
}

/// The number of items in each category, in the order the categories were
/// first seen.
///
/// Serializes as a flat JSON object. Categories are kept exactly as written
/// upstream, so "Electronics" and "electronics" are counted separately.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    counts: Vec<(String, usize)>,
}

impl CategoryCounts {
    /// The number of items in `category`, or `None` if no item has it.
    pub fn get(&self, category: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    /// The categories and their counts in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// The number of distinct categories.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no category has any items.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The total number of items across all categories.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;

        for (name, count) in self.iter() {
            map.serialize_entry(name, &count)?;
        }

        map.end()
    }
}

/// Count the items in each category.
pub fn count_categories(transactions: &[Transaction]) -> CategoryCounts {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for transaction in transactions {
        match counts
            .iter_mut()
            .find(|(name, _)| *name == transaction.category)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((transaction.category.clone(), 1)),
        }
    }

    CategoryCounts { counts }
}
