//! Fixed reference sets and patterns shared by validators and error messages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Email domains accepted for client addresses.
pub const ALLOWED_EMAIL_DOMAINS: [&str; 7] = [
    "gmail.com",
    "hotmail.com",
    "outlook.com",
    "yahoo.com",
    "live.com",
    "icloud.com",
    "msn.com",
];

/// Three-digit regional phone prefixes (Chiapas area codes).
pub const ALLOWED_PHONE_PREFIXES: [&str; 16] = [
    "916", "917", "918", "919", "932", "934", "961", "962", "963", "964", "965", "966", "967",
    "968", "992", "994",
];

/// Minimum number of digits a phone number must carry.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Length of the regional prefix checked against [`ALLOWED_PHONE_PREFIXES`].
pub const PHONE_PREFIX_LEN: usize = 3;

/// ASCII digits only.
pub(crate) static NUMBERS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile numbers-only regex"));

/// Regex class body for the whitespace the server-side ruleset trims and
/// matches with `\s`. Unlike Rust's `\s` it includes U+FEFF and excludes U+0085.
const BLANK_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Letters (with Spanish accents), whitespace, periods, apostrophes and hyphens.
pub(crate) static LETTERS_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ{}.'-]+$", BLANK_CLASS))
        .expect("Failed to compile letters-only regex")
});

/// `local@domain.tld` with no whitespace and a single '@'.
pub(crate) static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[^{b}@]+@[^{b}@]+\.[^{b}@]+$",
        b = BLANK_CLASS
    ))
    .expect("Failed to compile email shape regex")
});

/// Whether `c` is whitespace for trimming and splitting.
///
/// Same set as the regex whitespace class: includes U+FEFF, excludes U+0085.
pub fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing [`is_blank`] characters.
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank)
}

/// Check a (lower-cased) domain against the allow-list.
pub fn is_allowed_domain(domain: &str) -> bool {
    ALLOWED_EMAIL_DOMAINS.contains(&domain)
}

/// Check a three-digit prefix against the allow-list.
pub fn is_allowed_prefix(prefix: &str) -> bool {
    ALLOWED_PHONE_PREFIXES.contains(&prefix)
}

/// Allowed domains as shown in error messages.
pub fn allowed_domains_list() -> String {
    ALLOWED_EMAIL_DOMAINS.join(", ")
}

/// Allowed prefixes as shown in error messages.
pub fn allowed_prefixes_list() -> String {
    ALLOWED_PHONE_PREFIXES.join(", ")
}

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
