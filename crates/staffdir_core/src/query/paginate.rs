//! Page slicing over the query result.
//!
//! # Invariants
//! - `total_pages >= 1`, even for an empty sequence.
//! - The reported page is always within `[1, total_pages]`.

use crate::model::employee::Employee;

/// One computed page of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records on the current page, in query order.
    pub records: Vec<Employee>,
    pub total_pages: usize,
    /// Clamped 1-based page index; callers must store this back.
    pub current_page: usize,
    /// Number of records across all pages.
    pub total: usize,
}

impl Page {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Number of pages for `total` records, never less than one.
///
/// `page_size` of zero is treated as one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Slices `ordered` into the page at `current_page`.
///
/// A page past the end is clamped to the last page, and page zero to the
/// first.
pub fn paginate(ordered: &[Employee], current_page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total = ordered.len();
    let total_pages = total_pages(total, page_size);
    let current_page = current_page.clamp(1, total_pages);

    let start = ((current_page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        records: ordered[start..end].to_vec(),
        total_pages,
        current_page,
        total,
    }
}

/// Applies a navigation step to `current_page`.
///
/// Moving before the first page or past `total_pages` is a no-op and returns
/// `current_page` unchanged.
pub fn step_page(current_page: usize, delta: i64, total_pages: usize) -> usize {
    i64::try_from(current_page)
        .ok()
        .and_then(|page| page.checked_add(delta))
        .and_then(|target| usize::try_from(target).ok())
        .filter(|target| (1..=total_pages).contains(target))
        .unwrap_or(current_page)
}
