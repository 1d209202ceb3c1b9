//! Page envelope returned by paged list endpoints.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::PageRequest;

/// Number of pages needed to hold `total_count` items, `page_size` at a time.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use pagination::total_pages;
///
/// let size = NonZeroU32::new(10).expect("non-zero");
/// assert_eq!(total_pages(0, size), 0);
/// assert_eq!(total_pages(10, size), 1);
/// assert_eq!(total_pages(11, size), 2);
/// ```
#[must_use]
pub fn total_pages(total_count: u64, page_size: NonZeroU32) -> u64 {
    total_count.div_ceil(u64::from(page_size.get()))
}

/// One page of items plus the metadata clients need to navigate.
///
/// Serialises with camelCase keys:
/// `{"page":1,"count":10,"totalCount":3,"totalPages":1,
///   "hasPreviousPage":false,"hasNextPage":false,"items":[...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    page: u32,
    count: u32,
    total_count: u64,
    total_pages: u64,
    has_previous_page: bool,
    has_next_page: bool,
    items: Vec<T>,
}

impl<T> Page<T> {
    /// Build a page for `request` given the collection size and the items
    /// already fetched for that page.
    #[must_use]
    pub fn new(request: PageRequest, total_count: u64, items: Vec<T>) -> Self {
        let total_pages = total_pages(total_count, request.page_size());
        let page = request.page();
        Self {
            page,
            count: request.count(),
            total_count,
            total_pages,
            has_previous_page: page > 1,
            has_next_page: u64::from(page) < total_pages,
            items,
        }
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Number of items across all pages.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of pages in the collection.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Whether a page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Translate every item while keeping the page metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            count: self.count,
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
