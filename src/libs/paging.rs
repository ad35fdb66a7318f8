//! Fixed-size pagination arithmetic for list views.
//!
//! Activity history and the feed render one page of a filtered list at a time.
//! This module centralizes the window arithmetic so every paginated view
//! clamps and slices the same way.
//!
//! ## Rules
//!
//! - Pages are 1-based; `Page X of Y` is what the user sees.
//! - The page count never drops below 1, so an empty list still reads
//!   "Page 1 of 1" instead of "Page 1 of 0".
//! - Out-of-range page requests clamp to the nearest valid page rather than
//!   erroring.

/// A computed page window over a list.
///
/// Construct with [`Page::compute`], then take the visible slice with
/// [`Page::slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// The resolved 1-based page number after clamping.
    pub number: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    start: usize,
    end: usize,
}

impl Page {
    /// Computes the window for a 1-based `requested` page.
    ///
    /// A `page_size` of zero is treated as 1 so the arithmetic stays defined.
    ///
    /// ```rust
    /// use studymate::libs::paging::Page;
    ///
    /// let page = Page::compute(7, 5, 2);
    /// assert_eq!(page.number, 2);
    /// assert_eq!(page.total_pages, 2);
    ///
    /// // Requests past the end clamp to the last page
    /// assert_eq!(Page::compute(7, 5, 9).number, 2);
    ///
    /// // An empty list still has one (empty) page
    /// assert_eq!(Page::compute(0, 5, 1).total_pages, 1);
    /// ```
    pub fn compute(total_items: usize, page_size: usize, requested: usize) -> Page {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);
        let number = requested.clamp(1, total_pages);
        let start = (number - 1) * page_size;
        let end = (start + page_size).min(total_items);

        Page {
            number,
            total_pages,
            start,
            end,
        }
    }

    /// Returns the slice of `items` visible on this page.
    ///
    /// `items` must be the same list the window was computed for; a shorter
    /// list yields a truncated (possibly empty) slice rather than a panic.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start.min(items.len());
        let end = self.end.min(items.len());
        &items[start..end]
    }
}
