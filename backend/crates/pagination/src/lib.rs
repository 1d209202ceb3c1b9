//! Page-number pagination primitives shared by backend endpoints.
//!
//! The crate keeps three concerns apart:
//!
//! - [`PageRequest`]: validated, 1-based page options supplied by a client.
//! - [`Page`]: the response envelope carrying items plus navigation metadata.
//! - [`PageLinks`]: `first`/`previous`/`next`/`last` URLs rendered as an
//!   RFC 8288 `Link` header value.
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 3).expect("valid page options");
//! let page = Page::new(request, 7, vec!["d", "e", "f"]);
//! assert_eq!(page.total_pages(), 3);
//! assert!(page.has_previous_page());
//! assert!(page.has_next_page());
//! ```

mod envelope;
mod links;
mod request;

pub use envelope::{Page, total_pages};
pub use links::PageLinks;
pub use request::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PageRequestError};
