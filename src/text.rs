//! Loose text matching for free-form search boxes.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Strip accents and lowercase: `Querétaro` becomes `queretaro`.
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

/// Fold and drop everything but letters, digits and whitespace.
#[must_use]
pub fn simplify(text: &str) -> String {
    fold(text).chars().filter(|c| c.is_alphanumeric() || c.is_whitespace()).collect()
}
