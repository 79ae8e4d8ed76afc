//! Listing view model: the fetched collection, a free-text filter, and a
//! fixed-size page window over the filtered records.
//!
//! DESIGN
//! ======
//! The full collection is kept as fetched; the filtered and visible subsets
//! are derived on demand so they can never drift from the source. The page
//! number is the only navigation state and every mutation keeps it inside
//! `[1, total_pages]` (or at 1 when there is nothing to page through).

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::ops::RangeInclusive;

use crate::model::Employee;

/// Records shown per page.
pub const PAGE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    items: Vec<Employee>,
    filter: String,
    page: usize,
}

impl Default for Listing {
    fn default() -> Self {
        Self { items: Vec::new(), filter: String::new(), page: 1 }
    }
}

impl Listing {
    #[must_use]
    pub fn new(items: Vec<Employee>) -> Self {
        Self { items, ..Self::default() }
    }

    /// Swap in a freshly fetched collection, keeping filter and page.
    ///
    /// The page is pulled back onto the last page if the new collection is
    /// shorter (e.g. after deleting the only record on the final page).
    pub fn replace(&mut self, items: Vec<Employee>) {
        self.items = items;
        let last = self.total_pages().max(1);
        self.page = self.page.clamp(1, last);
    }

    #[must_use]
    pub fn items(&self) -> &[Employee] {
        &self.items
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Current page, 1-indexed.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// True until the collection is non-empty; drives the skeleton.
    #[must_use]
    pub fn awaiting_data(&self) -> bool {
        self.items.is_empty()
    }

    /// Change the filter text. Always resets to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 1;
    }

    /// Records matching the filter on name, phone or position name.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Employee> {
        let needle = self.filter.to_lowercase();
        self.items.iter().filter(|e| e.matches_lowercase(&needle)).collect()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// The filtered records inside the current page window.
    #[must_use]
    pub fn visible(&self) -> Vec<&Employee> {
        let start = (self.page - 1) * PAGE_SIZE;
        self.filtered().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    /// Jump to `page`. Out-of-range requests are ignored; returns whether the
    /// page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn previous(&mut self) -> bool {
        self.page > 1 && self.go_to(self.page - 1)
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether the pagination control is rendered at all.
    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// Page buttons to render, `1..=total_pages`.
    #[must_use]
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// 1-based row number of the `offset`-th visible record, continuing
    /// across pages.
    #[must_use]
    pub fn row_number(&self, offset: usize) -> usize {
        (self.page - 1) * PAGE_SIZE + offset + 1
    }
}
