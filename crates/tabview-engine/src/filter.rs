//! Free-text search and categorical filters.

use std::collections::BTreeMap;

use tabview_model::{ALL_FILTER_VALUE, FieldPath, FieldValue, Record};
use tracing::warn;

use crate::resolve::resolve;

/// Case-insensitive substring search over a set of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    /// An empty query matches every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &Record, fields: &[FieldPath]) -> bool {
        if self.is_empty() {
            return true;
        }
        fields.iter().any(|field| {
            resolve(record, field)
                .and_then(FieldValue::scalar_text)
                .is_some_and(|text| text.to_lowercase().contains(&self.needle))
        })
    }
}

/// Exact-match constraints, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    constraints: Vec<(FieldPath, String)>,
}

impl FilterSet {
    /// Builds constraints from filter-key/value pairs.
    ///
    /// `"all"` values and keys that are not valid field paths impose nothing.
    pub fn from_filters(filters: &BTreeMap<String, String>) -> Self {
        let mut constraints = Vec::new();
        for (key, value) in filters {
            if value == ALL_FILTER_VALUE {
                continue;
            }
            match FieldPath::new(key) {
                Ok(path) => constraints.push((path, value.clone())),
                Err(error) => warn!(%error, "ignoring filter with invalid key"),
            }
        }
        Self { constraints }
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Drops constraints on fields that no record in `records` has.
    ///
    /// A field absent from only some records still fails to match those.
    pub fn retain_known<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Record> + Clone,
    {
        self.constraints.retain(|(path, _)| {
            let known = records
                .clone()
                .into_iter()
                .any(|record| resolve(record, path).is_some());
            if !known {
                warn!(key = %path, "ignoring filter on unknown field");
            }
            known
        });
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.constraints
            .iter()
            .all(|(path, expected)| value_equals(resolve(record, path), expected))
    }
}

fn value_equals(value: Option<&FieldValue>, expected: &str) -> bool {
    match value {
        Some(FieldValue::Number(number)) => expected
            .trim()
            .parse::<f64>()
            .is_ok_and(|parsed| parsed == *number),
        Some(value) => value
            .scalar_text()
            .is_some_and(|text| text == expected),
        None => false,
    }
}

/// Keeps the records that match the search and every filter, in input order.
pub fn filter_rows<'a, I>(
    records: I,
    search: &SearchQuery,
    filters: &FilterSet,
    searchable: &[FieldPath],
) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| search.matches(record, searchable) && filters.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::try_from(value).unwrap()
    }

    fn fields(paths: &[&str]) -> Vec<FieldPath> {
        paths.iter().map(|p| FieldPath::new(p).unwrap()).collect()
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let query = SearchQuery::new("  TRẦN ");
        let row = record(json!({"manager": {"name": "Trần Lan"}}));
        assert!(query.matches(&row, &fields(&["name", "manager.name"])));
        assert!(!query.matches(&row, &fields(&["name"])));
    }

    #[test]
    fn search_matches_number_text() {
        let query = SearchQuery::new("090");
        let row = record(json!({"phone": 9012, "alt": "0901234567"}));
        assert!(!query.matches(&row, &fields(&["phone"])));
        assert!(query.matches(&row, &fields(&["phone", "alt"])));
    }

    #[test]
    fn filters_require_exact_equality() {
        let mut filters = BTreeMap::new();
        filters.insert("visibility".to_string(), "Riêng tư".to_string());
        let set = FilterSet::from_filters(&filters);
        assert!(set.matches(&record(json!({"visibility": "Riêng tư"}))));
        assert!(!set.matches(&record(json!({"visibility": "riêng tư"}))));
        assert!(!set.matches(&record(json!({"name": "no visibility"}))));
    }

    #[test]
    fn number_filters_compare_numerically() {
        let mut filters = BTreeMap::new();
        filters.insert("revenue.amount".to_string(), "100.0".to_string());
        let set = FilterSet::from_filters(&filters);
        assert!(set.matches(&record(json!({"revenue": {"amount": 100}}))));
        assert!(!set.matches(&record(json!({"revenue": {"amount": 10}}))));
    }

    #[test]
    fn all_and_invalid_keys_are_ignored() {
        let mut filters = BTreeMap::new();
        filters.insert("visibility".to_string(), ALL_FILTER_VALUE.to_string());
        filters.insert("bad..key".to_string(), "x".to_string());
        let set = FilterSet::from_filters(&filters);
        assert!(set.is_empty());
        assert!(set.matches(&record(json!({}))));
    }

    #[test]
    fn constraints_on_unknown_fields_are_dropped() {
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), "active".to_string());
        filters.insert("visibility".to_string(), "Riêng tư".to_string());
        let records = [
            record(json!({"visibility": "Riêng tư"})),
            record(json!({"name": "no visibility"})),
        ];
        let mut set = FilterSet::from_filters(&filters);
        set.retain_known(&records);
        assert_eq!(set.len(), 1);
        assert!(set.matches(&records[0]));
        assert!(!set.matches(&records[1]));
    }
}
