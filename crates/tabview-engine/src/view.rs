//! Filter → sort → paginate pipeline.

use tabview_model::{FieldPath, Record, ViewResult, ViewState};
use tracing::{debug, debug_span, warn};

use crate::filter::{FilterSet, SearchQuery, filter_rows};
use crate::pagination::{clamp_page, page_bounds, page_window, total_pages};
use crate::sort::sort_rows;

/// Computes one page of `records` for `state`.
///
/// Sorting happens before slicing so every page is a window of the fully
/// ordered result. A page beyond the last one is clamped.
pub fn compute_view<'a>(
    records: &'a [Record],
    state: &ViewState,
    searchable: &[FieldPath],
) -> ViewResult<'a> {
    let span = debug_span!(
        "compute_view",
        records = records.len(),
        page = state.page,
        page_size = state.page_size
    );
    let _guard = span.enter();

    let search = SearchQuery::new(&state.search);
    let mut filters = FilterSet::from_filters(&state.filters);
    filters.retain_known(records);
    let filtered = filter_rows(records, &search, &filters, searchable);
    debug!(
        matched = filtered.len(),
        filters = filters.len(),
        "filtered records"
    );

    let sorted = sort_rows(&filtered, state.sort_field.as_ref(), state.sort_direction);

    let page_size = state.page_size.max(1);
    let total_items = sorted.len();
    let total_pages = total_pages(total_items, page_size);
    let page = clamp_page(state.page, total_pages);
    if page != state.page {
        warn!(
            requested = state.page,
            clamped = page,
            total_pages,
            "requested page out of range"
        );
    }
    let rows = sorted[page_bounds(total_items, page_size, page)].to_vec();
    debug!(page, total_pages, visible = rows.len(), "paginated view");

    ViewResult {
        rows,
        total_items,
        total_pages,
        page,
        page_size,
        page_window: page_window(page, total_pages),
    }
}

/// A view engine bound to one screen's searchable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewEngine {
    searchable: Vec<FieldPath>,
}

impl ViewEngine {
    pub fn new(searchable: Vec<FieldPath>) -> Self {
        Self { searchable }
    }

    pub fn searchable(&self) -> &[FieldPath] {
        &self.searchable
    }

    pub fn compute<'a>(&self, records: &'a [Record], state: &ViewState) -> ViewResult<'a> {
        compute_view(records, state, &self.searchable)
    }
}
