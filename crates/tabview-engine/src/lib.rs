//! Client-side list view engine: search, filter, sort and paginate an
//! in-memory record collection.
//!
//! Every operation is a pure function of its inputs. Degenerate input
//! (missing fields, unknown filter keys, out-of-range pages) is normalized
//! rather than reported.
//!
//! ```
//! use tabview_engine::compute_view;
//! use tabview_model::{FieldPath, Record, ViewState};
//!
//! let records: Vec<Record> = ["Anna", "Bob", "Anh"]
//!     .into_iter()
//!     .map(|name| [("name", name)].into_iter().collect())
//!     .collect();
//! let searchable = vec![FieldPath::new("name").unwrap()];
//! let view = compute_view(&records, &ViewState::default().with_search("an"), &searchable);
//! assert_eq!(view.total_items, 2);
//! ```

pub mod collate;
pub mod filter;
pub mod pagination;
pub mod resolve;
pub mod selection;
pub mod sort;
pub mod view;

pub use collate::compare_text;
pub use filter::{FilterSet, SearchQuery, filter_rows};
pub use pagination::{MAX_VISIBLE_PAGES, clamp_page, page_bounds, page_window, total_pages};
pub use resolve::resolve;
pub use selection::Selection;
pub use sort::{compare_values, sort_rows};
pub use view::{ViewEngine, compute_view};
