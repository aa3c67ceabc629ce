//! The table of transactions shown on the dashboard.

use maud::{Markup, html};

use crate::{
    html::{
        LINK_DISABLED_STYLE, LINK_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        TAG_BADGE_STYLE, format_currency,
    },
    pagination::Page,
    transaction::Transaction,
};

/// Renders one page of transactions as a table.
///
/// # Arguments
/// * `rows` - The transactions on the current page
/// * `match_count` - The number of transactions across all pages
pub(super) fn transactions_table(rows: &[Transaction], match_count: usize) -> Markup {
    html! {
        div class="overflow-x-auto rounded-lg shadow"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Sold" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Image" }
                    }
                }

                tbody
                {
                    @for transaction in rows {
                        (transaction_row(transaction))
                    }

                    @if match_count == 0 {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="7" class={(TABLE_CELL_STYLE) " text-center"}
                            {
                                "No transactions match your search."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.id) }
            td class={(TABLE_CELL_STYLE) " max-w-[300px] font-medium text-gray-900 dark:text-white"}
            {
                (transaction.title)
            }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} { (format_currency(transaction.price)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(TAG_BADGE_STYLE) { (transaction.category) }
            }
            td class=(TABLE_CELL_STYLE)
            {
                @if transaction.sold { "✅" } @else { "❌" }
            }
            td class=(TABLE_CELL_STYLE)
            {
                img
                    src=(transaction.image)
                    alt=(transaction.title)
                    width="50"
                    height="50"
                    class="w-[50px] h-[50px] object-fill";
            }
        }
    }
}

/// Renders the Previous/Next links for the transactions table.
///
/// # Arguments
/// * `page` - The current page
/// * `page_url` - Builds the URL for a page number
pub(super) fn pagination_nav(page: &Page, page_url: impl Fn(usize) -> String) -> Markup {
    html! {
        nav class="flex items-center justify-between gap-4 mt-4" aria-label="Transactions pages"
        {
            (page_link("Previous", page.previous().map(&page_url)))

            p id="page-indicator" { "Page " (page.number) " of " (page.page_count) }

            (page_link("Next", page.next().map(&page_url)))
        }
    }
}

fn page_link(text: &str, url: Option<String>) -> Markup {
    html! {
        @match url {
            Some(url) => {
                a
                    href=(url)
                    hx-get=(url)
                    hx-target="#dashboard-content"
                    hx-target-error="#dashboard-content"
                    hx-swap="outerHTML"
                    hx-push-url="true"
                    class=(LINK_STYLE)
                {
                    (text)
                }
            }
            None => {
                span class=(LINK_DISABLED_STYLE) aria-disabled="true" { (text) }
            }
        }
    }
}
