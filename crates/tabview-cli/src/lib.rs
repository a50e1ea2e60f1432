//! Terminal front end for fixture-backed list views.

pub mod format;
pub mod logging;
pub mod query;
pub mod render;
