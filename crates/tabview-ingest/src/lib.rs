//! Fixture ingestion for list views.
//!
//! Fixtures are static record collections on disk, either a JSON array of
//! objects or a CSV table with one record per row.

pub mod discovery;
pub mod error;
pub mod load;

pub use discovery::{FixtureFormat, list_fixture_files};
pub use error::{IngestError, Result};
pub use load::{load_records, parse_csv, parse_json};
