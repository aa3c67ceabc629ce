//! This modules defines the common functionality for paging data.

/// The page number to default to when not specified in a request.
pub const DEFAULT_PAGE: usize = 1;

/// The number of rows per page when not configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// A single page of a list that is displayed a few rows at a time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Page {
    /// The one-based page number, always within `1..=page_count`.
    pub number: usize,
    /// The total number of pages, at least one even for an empty list.
    pub page_count: usize,
    /// The index of the first item on this page.
    pub start: usize,
    /// One past the index of the last item on this page.
    pub end: usize,
}

impl Page {
    /// Locate page `requested` of a list with `item_count` items.
    ///
    /// Out of range page numbers are clamped to the first or last page.
    pub fn new(requested: usize, item_count: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = item_count.div_ceil(page_size).max(1);
        let number = requested.clamp(1, page_count);
        let start = ((number - 1) * page_size).min(item_count);
        let end = (start + page_size).min(item_count);

        Self {
            number,
            page_count,
            start,
            end,
        }
    }

    /// The items of `items` that are on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start.min(items.len())..self.end.min(items.len())]
    }

    /// The previous page number, if this is not the first page.
    pub fn previous(&self) -> Option<usize> {
        (self.number > 1).then(|| self.number - 1)
    }

    /// The next page number, if this is not the last page.
    pub fn next(&self) -> Option<usize> {
        (self.number < self.page_count).then(|| self.number + 1)
    }
}
