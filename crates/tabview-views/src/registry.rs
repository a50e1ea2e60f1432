use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info};

use crate::definition::{ViewDefinition, ViewFile};
use crate::error::{Result, ViewsError};

const PRESETS: &str = include_str!("presets.toml");
const PRESETS_NAME: &str = "<built-in presets>";

/// Named view definitions, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRegistry {
    views: Vec<ViewDefinition>,
}

impl ViewRegistry {
    /// The five built-in console screens.
    pub fn builtin() -> Result<Self> {
        let views = parse_views(Path::new(PRESETS_NAME), PRESETS)?;
        Ok(Self { views })
    }

    /// Built-in presets overlaid with the views in `config`, if given.
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let mut registry = Self::builtin()?;
        if let Some(path) = config {
            registry.merge(load_view_file(path)?);
        }
        Ok(registry)
    }

    /// Adds views, replacing any existing view of the same name in place.
    pub fn merge(&mut self, views: Vec<ViewDefinition>) {
        for view in views {
            match self.views.iter_mut().find(|existing| existing.name == view.name) {
                Some(existing) => {
                    debug!(view = %view.name, "replacing view definition");
                    *existing = view;
                }
                None => self.views.push(view),
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&ViewDefinition> {
        self.views
            .iter()
            .find(|view| view.name == name)
            .ok_or_else(|| ViewsError::UnknownView {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|view| view.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewDefinition> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Reads a TOML file of `[[view]]` tables.
pub fn load_view_file(path: &Path) -> Result<Vec<ViewDefinition>> {
    let contents = std::fs::read_to_string(path).map_err(|e| ViewsError::io(path, e))?;
    let views = parse_views(path, &contents)?;
    info!(path = %path.display(), views = views.len(), "loaded view file");
    Ok(views)
}

/// Parses view definitions from TOML text. `path` is only used in errors.
pub fn parse_views(path: &Path, contents: &str) -> Result<Vec<ViewDefinition>> {
    let file: ViewFile = toml::from_str(contents).map_err(|e| ViewsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut seen = BTreeSet::new();
    let mut views = Vec::with_capacity(file.view.len());
    for entry in file.view {
        if !seen.insert(entry.name.clone()) {
            return Err(ViewsError::DuplicateView {
                path: path.to_path_buf(),
                name: entry.name,
            });
        }
        views.push(ViewDefinition::try_from(entry)?);
    }
    Ok(views)
}
