//! List view definitions.
//!
//! A view names a fixture, the fields its search box covers, its categorical
//! filters, its columns and its default page size. Five presets are built
//! in; a TOML file of `[[view]]` tables can add more or replace them by name.

pub mod definition;
pub mod error;
pub mod registry;

pub use definition::{
    ColumnDefinition, ColumnFormat, FilterDefinition, SortDefinition, ViewDefinition,
};
pub use error::{Result, ViewsError};
pub use registry::{ViewRegistry, load_view_file, parse_views};
