//! Data model for the tabular view engine.

pub mod error;
pub mod path;
pub mod result;
pub mod state;
pub mod value;

pub use error::{ModelError, Result};
pub use path::FieldPath;
pub use result::{PageRange, PageToken, ViewResult};
pub use state::{
    ALL_FILTER_VALUE, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, SortDirection, ViewIntent, ViewState,
    is_standard_page_size,
};
pub use value::{FieldValue, Record};
