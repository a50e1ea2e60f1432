use tabview_model::{FieldPath, FieldValue, Record};

/// Resolves `path` against `record`.
///
/// Returns `None` when any segment is missing or when the path walks through
/// a value that is not a map. A present `null` resolves to `Some(Null)`.
pub fn resolve<'a>(record: &'a Record, path: &FieldPath) -> Option<&'a FieldValue> {
    let (first, rest) = path.segments().split_first()?;
    let mut current = record.get(first)?;
    for segment in rest {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}
