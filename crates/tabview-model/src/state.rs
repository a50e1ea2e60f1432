//! Caller-owned view inputs and the intents that transform them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FieldPath;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered in the page-size picker.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Whether `size` is one of [`PAGE_SIZE_OPTIONS`].
pub fn is_standard_page_size(size: usize) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}

/// Filter value that removes the constraint for its key.
pub const ALL_FILTER_VALUE: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user action against a list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent {
    Search(String),
    Filter { key: String, value: String },
    ClearFilter(String),
    ToggleSort(FieldPath),
    ClearSort,
    GoToPage(usize),
    NextPage,
    PreviousPage,
    PageSize(usize),
}

/// Search, filter, sort and pagination inputs for one list screen.
///
/// `page` is 1-based and may be stale relative to the data; it is clamped
/// when the view is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort_field: Option<FieldPath>,
    pub sort_direction: SortDirection,
    pub page_size: usize,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort_field: None,
            sort_direction: SortDirection::Ascending,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    #[must_use]
    pub fn with_search(self, term: impl Into<String>) -> Self {
        self.apply(ViewIntent::Search(term.into()))
    }

    #[must_use]
    pub fn with_filter(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.apply(ViewIntent::Filter {
            key: key.into(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn with_sort(mut self, field: FieldPath, direction: SortDirection) -> Self {
        self.sort_field = Some(field);
        self.sort_direction = direction;
        self.page = 1;
        self
    }

    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        self.apply(ViewIntent::GoToPage(page))
    }

    /// Returns the state that results from `intent`.
    ///
    /// Every intent except page navigation sends the view back to page 1.
    #[must_use]
    pub fn apply(mut self, intent: ViewIntent) -> Self {
        match intent {
            ViewIntent::Search(term) => {
                self.search = term;
                self.page = 1;
            }
            ViewIntent::Filter { key, value } => {
                if value == ALL_FILTER_VALUE {
                    self.filters.remove(&key);
                } else {
                    self.filters.insert(key, value);
                }
                self.page = 1;
            }
            ViewIntent::ClearFilter(key) => {
                self.filters.remove(&key);
                self.page = 1;
            }
            ViewIntent::ToggleSort(field) => {
                if self.sort_field.as_ref() == Some(&field) {
                    self.sort_direction = self.sort_direction.flipped();
                } else {
                    self.sort_field = Some(field);
                    self.sort_direction = SortDirection::Ascending;
                }
                self.page = 1;
            }
            ViewIntent::ClearSort => {
                self.sort_field = None;
                self.sort_direction = SortDirection::Ascending;
                self.page = 1;
            }
            ViewIntent::GoToPage(page) => self.page = page.max(1),
            ViewIntent::NextPage => self.page = self.page.saturating_add(1),
            ViewIntent::PreviousPage => self.page = self.page.saturating_sub(1).max(1),
            ViewIntent::PageSize(size) => {
                self.page_size = size.max(1);
                self.page = 1;
            }
        }
        self
    }
}
