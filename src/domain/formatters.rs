//! Normalisation of client field values for display and submission.
//!
//! Formatters never fail: anything they cannot normalise is returned in a
//! predictable form so the validators can report on it.

use super::field::ClientField;
use super::rules::{digits_only, is_blank, trim_blank, MIN_PHONE_DIGITS};

/// Render a ten-digit phone as `AAA-BBB-CCCC`.
///
/// Any non-digit characters are ignored when counting. Inputs that do not
/// carry exactly ten digits are returned unchanged.
pub fn format_phone(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() == MIN_PHONE_DIGITS {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        value.to_string()
    }
}

/// Trim and lower-case an email address.
pub fn format_email(value: &str) -> String {
    trim_blank(value).to_lowercase()
}

/// Title-case a name.
///
/// Whitespace runs collapse to a single space before tokens are
/// capitalised, so `"  juan   PÉREZ "` becomes `"Juan Pérez"`. A leading
/// character whose upper-case form expands to several characters (such as
/// `ß`) is kept as-is so the result stays stable when formatted again.
pub fn format_name(value: &str) -> String {
    value
        .split(is_blank)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut out = String::with_capacity(word.len());
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(first),
    }
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Trim a client key. Digits are not otherwise normalised.
pub fn format_key(value: &str) -> String {
    trim_blank(value).to_string()
}

/// Filter phone keystrokes down to digits, hyphens, whitespace and parentheses.
pub fn sanitize_phone_input(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || is_blank(*c) || matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Apply the formatter that belongs to `field`.
pub fn format_field(field: ClientField, value: &str) -> String {
    match field {
        ClientField::Key => format_key(value),
        ClientField::Name => format_name(value),
        ClientField::Email => format_email(value),
        ClientField::Phone => format_phone(value),
    }
}
