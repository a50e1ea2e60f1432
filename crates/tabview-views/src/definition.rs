//! Typed view definitions and their TOML file form.

use serde::{Deserialize, Serialize};
use tabview_model::{DEFAULT_PAGE_SIZE, FieldPath, SortDirection, ViewState};

use crate::error::{Result, ViewsError};

/// How a column's values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    #[default]
    Text,
    /// Thousands separators.
    Number,
    /// Signed amount coloured by sign.
    Revenue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub path: FieldPath,
    pub header: String,
    pub format: ColumnFormat,
}

/// A categorical filter and the choices offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDefinition {
    pub key: FieldPath,
    pub label: String,
    pub choices: Vec<String>,
}

impl FilterDefinition {
    pub fn accepts(&self, value: &str) -> bool {
        self.choices.iter().any(|choice| choice == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortDefinition {
    pub field: FieldPath,
    pub direction: SortDirection,
}

/// One list screen: where its records come from and how they are searched,
/// filtered and shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDefinition {
    pub name: String,
    pub title: String,
    pub fixture: String,
    pub searchable: Vec<FieldPath>,
    pub filters: Vec<FilterDefinition>,
    pub columns: Vec<ColumnDefinition>,
    pub default_page_size: usize,
    pub default_sort: Option<SortDefinition>,
}

impl ViewDefinition {
    /// State a screen opens with: page 1, the default page size and sort.
    pub fn initial_state(&self) -> ViewState {
        let state = ViewState::new(self.default_page_size);
        match &self.default_sort {
            Some(sort) => state.with_sort(sort.field.clone(), sort.direction),
            None => state,
        }
    }

    pub fn filter(&self, key: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|filter| filter.key.to_string() == key)
    }
}

/// Top level of a view file: a list of `[[view]]` tables.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ViewFile {
    #[serde(default)]
    pub view: Vec<ViewEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ViewEntry {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub fixture: String,
    #[serde(default)]
    pub searchable: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterEntry>,
    #[serde(default)]
    pub columns: Vec<ColumnEntry>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub sort_direction: SortDirection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FilterEntry {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    pub choices: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ColumnEntry {
    pub path: String,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub format: ColumnFormat,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl TryFrom<ViewEntry> for ViewDefinition {
    type Error = ViewsError;

    fn try_from(entry: ViewEntry) -> Result<Self> {
        let view = entry.name;
        if entry.page_size == 0 {
            return Err(ViewsError::ZeroPageSize { view });
        }
        let path = |raw: &str| {
            FieldPath::new(raw).map_err(|_| ViewsError::InvalidFieldPath {
                view: view.clone(),
                path: raw.to_string(),
            })
        };

        let searchable = entry
            .searchable
            .iter()
            .map(|raw| path(raw))
            .collect::<Result<Vec<_>>>()?;

        let mut filters = Vec::with_capacity(entry.filters.len());
        for filter in entry.filters {
            if filter.choices.is_empty() {
                return Err(ViewsError::EmptyFilter {
                    view: view.clone(),
                    key: filter.key,
                });
            }
            let key = path(&filter.key)?;
            filters.push(FilterDefinition {
                label: filter.label.unwrap_or_else(|| filter.key.clone()),
                key,
                choices: filter.choices,
            });
        }

        if entry.columns.is_empty() {
            return Err(ViewsError::NoColumns { view: view.clone() });
        }
        let columns = entry
            .columns
            .into_iter()
            .map(|column| -> Result<ColumnDefinition> {
                Ok(ColumnDefinition {
                    path: path(&column.path)?,
                    header: column.header.unwrap_or(column.path),
                    format: column.format,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let default_sort = entry
            .sort
            .as_deref()
            .map(|raw| -> Result<SortDefinition> {
                Ok(SortDefinition {
                    field: path(raw)?,
                    direction: entry.sort_direction,
                })
            })
            .transpose()?;

        Ok(Self {
            title: entry.title.unwrap_or_else(|| view.clone()),
            fixture: entry.fixture,
            searchable,
            filters,
            columns,
            default_page_size: entry.page_size,
            default_sort,
            name: view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(toml_text: &str) -> ViewEntry {
        toml::from_str(toml_text).expect("entry")
    }

    #[test]
    fn defaults_fill_title_header_and_page_size() {
        let view = ViewDefinition::try_from(entry(
            r#"
            name = "leads"
            fixture = "leads.json"
            searchable = ["name"]
            columns = [{ path = "owner.name" }]
            "#,
        ))
        .expect("valid view");
        assert_eq!(view.title, "leads");
        assert_eq!(view.default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(view.columns[0].header, "owner.name");
        assert_eq!(view.columns[0].format, ColumnFormat::Text);
        assert!(view.default_sort.is_none());
    }

    #[test]
    fn invalid_search_path_names_the_view() {
        let err = ViewDefinition::try_from(entry(
            r#"
            name = "leads"
            fixture = "leads.json"
            searchable = ["owner..name"]
            "#,
        ))
        .expect_err("invalid path");
        assert_eq!(err.to_string(), "view leads: invalid field path \"owner..name\"");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = ViewDefinition::try_from(entry(
            r#"
            name = "leads"
            fixture = "leads.json"
            page_size = 0
            "#,
        ))
        .expect_err("zero page size");
        assert!(matches!(err, ViewsError::ZeroPageSize { .. }));
    }

    #[test]
    fn view_without_columns_is_rejected() {
        let err = ViewDefinition::try_from(entry(
            r#"
            name = "users"
            fixture = "staff.csv"
            searchable = ["Nhân viên"]
            "#,
        ))
        .expect_err("no columns");
        assert_eq!(err.to_string(), "view users: at least one column is required");
    }

    #[test]
    fn initial_state_applies_default_sort() {
        let view = ViewDefinition::try_from(entry(
            r#"
            name = "leads"
            fixture = "leads.json"
            page_size = 25
            columns = [{ path = "name" }]
            sort = "revenue.amount"
            sort_direction = "descending"
            "#,
        ))
        .expect("valid view");
        let state = view.initial_state();
        assert_eq!(state.page_size, 25);
        assert_eq!(state.sort_direction, SortDirection::Descending);
        assert_eq!(
            state.sort_field.map(|field| field.to_string()),
            Some("revenue.amount".to_string())
        );
    }
}
