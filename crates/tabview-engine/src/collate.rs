//! Locale-style string ordering.
//!
//! Approximates a root-locale collator in three levels: base letters
//! (accents and case ignored), then accents, then case with lowercase first.
//! Raw code point order is the final tie-break so the ordering is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub fn compare_text(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Base letters only: decomposed, marks dropped, lowercased.
fn primary_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(base_letter)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accents kept, case ignored.
fn secondary_key(text: &str) -> String {
    text.nfd().map(base_letter).flat_map(char::to_lowercase).collect()
}

// Letters with a stroke have no canonical decomposition.
fn base_letter(c: char) -> char {
    match c {
        'đ' => 'd',
        'Đ' => 'D',
        'ł' => 'l',
        'Ł' => 'L',
        'ø' => 'o',
        'Ø' => 'O',
        _ => c,
    }
}
