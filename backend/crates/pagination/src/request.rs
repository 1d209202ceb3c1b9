//! Validated page options.

use std::num::NonZeroU32;

use thiserror::Error;

/// Page number used when a client omits `page`.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when a client omits `count`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Reasons a pair of page options is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The page number is below 1 or does not fit the page counter.
    #[error("page must be a whole number of at least 1, got {page}")]
    PageOutOfRange {
        /// Raw page number supplied by the client.
        page: i64,
    },
    /// The page size is outside `1..=MAX_PAGE_SIZE`.
    #[error("count must be between 1 and {max}, got {count}")]
    CountOutOfRange {
        /// Raw page size supplied by the client.
        count: i64,
        /// Upper bound accepted for the page size.
        max: u32,
    },
}

impl PageRequestError {
    /// Name of the query parameter the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::PageOutOfRange { .. } => "page",
            Self::CountOutOfRange { .. } => "count",
        }
    }
}

/// A validated request for one page of a collection.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= count <= MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: NonZeroU32,
    count: NonZeroU32,
}

impl PageRequest {
    /// Validate page options expressed as unsigned integers.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when either value is out of range.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// assert!(PageRequest::new(0, 10).is_err());
    /// assert!(PageRequest::new(1, 51).is_err());
    /// assert_eq!(PageRequest::new(3, 20).map(|r| r.offset()), Ok(40));
    /// ```
    pub fn new(page: u32, count: u32) -> Result<Self, PageRequestError> {
        Self::from_query(Some(i64::from(page)), Some(i64::from(count)))
    }

    /// Validate raw query values, falling back to the defaults when a value
    /// is absent.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when either value is out of range.
    pub fn from_query(page: Option<i64>, count: Option<i64>) -> Result<Self, PageRequestError> {
        let raw_page = page.unwrap_or(i64::from(DEFAULT_PAGE));
        let raw_count = count.unwrap_or(i64::from(DEFAULT_PAGE_SIZE));

        let page = u32::try_from(raw_page)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(PageRequestError::PageOutOfRange { page: raw_page })?;
        let count = u32::try_from(raw_count)
            .ok()
            .filter(|value| *value <= MAX_PAGE_SIZE)
            .and_then(NonZeroU32::new)
            .ok_or(PageRequestError::CountOutOfRange {
                count: raw_count,
                max: MAX_PAGE_SIZE,
            })?;

        Ok(Self { page, count })
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page.get()
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count.get()
    }

    /// Page size as a non-zero value for page-count arithmetic.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroU32 {
        self.count
    }

    /// Number of items preceding the first item of this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.get() - 1) * u64::from(self.count.get())
    }

    /// Whether this request points past the last page of a non-empty
    /// collection. Every page of an empty collection is considered in range.
    #[must_use]
    pub fn is_past_end(&self, total_pages: u64) -> bool {
        total_pages > 0 && u64::from(self.page()) > total_pages
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: NonZeroU32::MIN,
            count: NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
        }
    }
}
