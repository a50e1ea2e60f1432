//! Page arithmetic and the page-number window shown under a table.

use std::ops::Range;

use tabview_model::PageToken;

/// Page numbers shown before the window collapses with ellipses.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages needed for `total_items`; never less than 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a 1-based page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of `page` within a sequence of `total_items`.
///
/// `page` must already be clamped; the end is capped at `total_items`.
pub fn page_bounds(total_items: usize, page_size: usize, page: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Page controls for `current` out of `total` pages.
///
/// Shows every page up to [`MAX_VISIBLE_PAGES`]; beyond that keeps the first
/// and last page and collapses the rest around the current one.
pub fn page_window(current: usize, total: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    let total = total.max(1);
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![Page(1), Ellipsis, Page(total - 2), Page(total - 1), Page(total)]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}
