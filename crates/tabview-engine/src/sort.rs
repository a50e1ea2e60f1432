//! Stable single-field ordering of records.

use std::cmp::Ordering;

use tabview_model::{FieldPath, FieldValue, Record, SortDirection};

use crate::collate::compare_text;
use crate::resolve::resolve;

/// Compares two resolved values.
///
/// Text compares with [`compare_text`], numbers numerically. Mixed types,
/// absent values and anything else compare equal, which leaves those rows in
/// their input order.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => compare_text(a, b),
        (Some(FieldValue::Number(a)), Some(FieldValue::Number(b))) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

/// Returns `rows` ordered by `field`; the input slice is left untouched.
///
/// Without a field the input order is returned unchanged.
pub fn sort_rows<'a>(
    rows: &[&'a Record],
    field: Option<&FieldPath>,
    direction: SortDirection,
) -> Vec<&'a Record> {
    let Some(field) = field else {
        return rows.to_vec();
    };
    merge_sort(rows, &|a: &Record, b: &Record| {
        let ordering = compare_values(resolve(a, field), resolve(b, field));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    })
}

// The comparator is not a total order (mixed types compare equal to
// everything), which `slice::sort_by` requires.
fn merge_sort<'a, F>(rows: &[&'a Record], compare: &F) -> Vec<&'a Record>
where
    F: Fn(&Record, &Record) -> Ordering,
{
    if rows.len() <= 1 {
        return rows.to_vec();
    }
    let (left, right) = rows.split_at(rows.len() / 2);
    let left = merge_sort(left, compare);
    let right = merge_sort(right, compare);
    let mut merged = Vec::with_capacity(rows.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Equal keys take from the left run first.
        if compare(right[j], left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        let a = FieldValue::Number(9.0);
        let b = FieldValue::Number(10.0);
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
    }

    #[test]
    fn mixed_and_absent_compare_equal() {
        let text = FieldValue::from("10");
        let number = FieldValue::Number(10.0);
        assert_eq!(compare_values(Some(&text), Some(&number)), Ordering::Equal);
        assert_eq!(compare_values(None, Some(&number)), Ordering::Equal);
        assert_eq!(compare_values(Some(&text), None), Ordering::Equal);
        assert_eq!(
            compare_values(Some(&FieldValue::Null), Some(&FieldValue::Null)),
            Ordering::Equal
        );
    }

    #[test]
    fn nan_compares_equal() {
        let nan = FieldValue::Number(f64::NAN);
        let one = FieldValue::Number(1.0);
        assert_eq!(compare_values(Some(&nan), Some(&one)), Ordering::Equal);
    }
}
