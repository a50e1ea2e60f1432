//! Derived, read-only output of a view computation.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::Record;

/// One control in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    pub fn page(self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(page),
            PageToken::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{page}"),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(page) => serializer.serialize_u64(*page as u64),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// 1-based, inclusive span of rows shown on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PageRange {
    pub fn is_empty(&self) -> bool {
        self.total == 0 || self.last < self.first
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "0-0 of {}", self.total)
        } else {
            write!(f, "{}-{} of {}", self.first, self.last, self.total)
        }
    }
}

/// Rows and pagination metadata for one page of a view.
///
/// Borrows rows from the caller's collection; recomputed on every state
/// change and never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult<'a> {
    pub rows: Vec<&'a Record>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_window: Vec<PageToken>,
}

impl ViewResult<'_> {
    /// Index of the first visible row within the filtered, sorted sequence.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }

    pub fn range(&self) -> PageRange {
        let offset = self.offset();
        if self.rows.is_empty() {
            return PageRange {
                first: 0,
                last: 0,
                total: self.total_items,
            };
        }
        PageRange {
            first: offset + 1,
            last: offset + self.rows.len(),
            total: self.total_items,
        }
    }

    /// Absolute positions of the visible rows, used as selection keys.
    pub fn row_keys(&self) -> std::ops::Range<usize> {
        let offset = self.offset();
        offset..offset + self.rows.len()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
