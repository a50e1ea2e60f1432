use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ViewsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML view file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("view {view}: invalid field path {path:?}")]
    InvalidFieldPath { view: String, path: String },

    #[error("duplicate view {name} in {path}")]
    DuplicateView { path: PathBuf, name: String },

    #[error("view {view}: page size must be at least 1")]
    ZeroPageSize { view: String },

    #[error("view {view}: at least one column is required")]
    NoColumns { view: String },

    #[error("view {view}: filter {key} has no choices")]
    EmptyFilter { view: String, key: String },

    #[error("unknown view {name} (available: {available})")]
    UnknownView { name: String, available: String },
}

impl ViewsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewsError>;
