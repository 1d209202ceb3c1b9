//! Navigation links for paged collections.

use url::Url;

use crate::{Page, PageRequest};

/// Links to the first, previous, next and last pages of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    first: Url,
    previous: Option<Url>,
    next: Option<Url>,
    last: Url,
}

impl PageLinks {
    /// Build navigation links for `page` relative to `base`.
    ///
    /// Existing `page` and `count` query parameters on `base` are replaced;
    /// other parameters are preserved. Returns `None` for an empty collection
    /// because there is nothing to navigate.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageLinks, PageRequest};
    /// use url::Url;
    ///
    /// let base = Url::parse("http://localhost/cars").expect("valid url");
    /// let request = PageRequest::new(2, 2).expect("valid request");
    /// let page = Page::new(request, 5, vec![3, 4]);
    /// let links = PageLinks::for_page(&base, &page).expect("non-empty");
    /// assert_eq!(
    ///     links.next().map(|url| url.as_str()),
    ///     Some("http://localhost/cars?page=3&count=2")
    /// );
    /// ```
    #[must_use]
    pub fn for_page<T>(base: &Url, page: &Page<T>) -> Option<Self> {
        if page.total_count() == 0 {
            return None;
        }
        let last_page = u32::try_from(page.total_pages()).unwrap_or(u32::MAX);
        let current = page.page();
        let count = page.count();

        Some(Self {
            first: page_url(base, 1, count),
            previous: (current > 1).then(|| page_url(base, current - 1, count)),
            next: page.has_next_page().then(|| page_url(base, current + 1, count)),
            last: page_url(base, last_page, count),
        })
    }

    /// Build links for a request against a collection of `total_count` items.
    #[must_use]
    pub fn for_request(base: &Url, request: PageRequest, total_count: u64) -> Option<Self> {
        Self::for_page(base, &Page::<()>::new(request, total_count, Vec::new()))
    }

    /// URL of the first page.
    #[must_use]
    pub const fn first(&self) -> &Url {
        &self.first
    }

    /// URL of the preceding page, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<&Url> {
        self.previous.as_ref()
    }

    /// URL of the following page, if any.
    #[must_use]
    pub const fn next(&self) -> Option<&Url> {
        self.next.as_ref()
    }

    /// URL of the last page.
    #[must_use]
    pub const fn last(&self) -> &Url {
        &self.last
    }

    /// Render the links as an RFC 8288 `Link` header value.
    ///
    /// Relations appear in `first`, `previous`, `next`, `last` order.
    #[must_use]
    pub fn to_header_value(&self) -> String {
        [
            Some((&self.first, "first")),
            self.previous.as_ref().map(|url| (url, "previous")),
            self.next.as_ref().map(|url| (url, "next")),
            Some((&self.last, "last")),
        ]
        .into_iter()
        .flatten()
        .map(|(url, rel)| format!("<{url}>; rel=\"{rel}\""))
        .collect::<Vec<_>>()
        .join(", ")
    }
}

fn page_url(base: &Url, page: u32, count: u32) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != "page" && key != "count")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .extend_pairs(retained)
        .append_pair("page", &page.to_string())
        .append_pair("count", &count.to_string());
    url
}
