//! Card components for displaying a month's sales statistics.

use maud::{Markup, html};

use crate::{aggregation::SalesStatistics, html::format_currency};

const CARD_STYLE: &str = "flex-1 min-w-[180px] p-4 rounded-lg shadow \
    bg-white dark:bg-gray-800";

/// Renders the total sales, sold and unsold item counts as cards.
pub(super) fn statistics_cards(month: &str, statistics: &SalesStatistics) -> Markup {
    html! {
        section id="statistics" class="w-full mb-4"
        {
            h2 class="text-xl font-semibold mb-4" { "Statistics - " (month) }

            div class="flex flex-wrap gap-4"
            {
                (card("total-sales-amount", "Total Sales Amount", &format_currency(statistics.total_sales_amount)))
                (card("total-sold-items", "Total Sold Items", &statistics.total_sold_items.to_string()))
                (card("total-not-sold-items", "Total Not Sold Items", &statistics.total_not_sold_items.to_string()))
            }
        }
    }
}

fn card(id: &str, title: &str, value: &str) -> Markup {
    html! {
        div id=(id) class=(CARD_STYLE)
        {
            h4 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }
            p class="text-2xl font-bold" { (value) }
        }
    }
}
