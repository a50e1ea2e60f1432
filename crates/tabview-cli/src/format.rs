//! Cell text for record values.

use std::borrow::Cow;

use tabview_model::FieldValue;
use tabview_views::ColumnFormat;

/// Fraction digits kept for non-integral numbers.
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number with comma thousands separators: `-1,250`, `1,234.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    let text = if magnitude.fract() == 0.0 && magnitude < 1e15 {
        format!("{magnitude:.0}")
    } else {
        let fixed = format!("{magnitude:.precision$}", precision = MAX_FRACTION_DIGITS);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if value < 0.0 && text != "0" {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Numeric value of a cell, parsing text for CSV-backed fixtures.
pub fn numeric_value(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(number) => Some(*number),
        FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Text shown in a table cell; `None` for an absent or null value.
pub fn cell_text(value: Option<&FieldValue>, format: ColumnFormat) -> Option<String> {
    let value = value?;
    if matches!(format, ColumnFormat::Number | ColumnFormat::Revenue)
        && let Some(number) = numeric_value(value)
    {
        return Some(format_number(number));
    }
    match value {
        FieldValue::Null => None,
        FieldValue::Number(number) => Some(format_number(*number)),
        FieldValue::List(items) => Some(
            items
                .iter()
                .filter_map(FieldValue::scalar_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        FieldValue::Map(map) => Some(format!("{{{} fields}}", map.len())),
        other => other.scalar_text().map(Cow::into_owned),
    }
}
