//! Loose name equivalence for songs and artists.
//!
//! Catalog titles rarely match setlist titles exactly: live and remaster
//! suffixes, parenthetical qualifiers and accents all get in the way. Two
//! names are treated as the same entity when one contains the other
//! (ignoring case) or when they are equal after case and accent folding.
//! Folding also unifies compatibility forms, so ligatures and fullwidth
//! letters compare like their plain spellings and "ß" equals "ss".
//!
//! The empty string is contained in everything and therefore equivalent to
//! any name. Callers that must not match vacuously have to skip blank names
//! themselves.

use caseless::default_case_fold_str;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

pub fn are_equivalent(a: &str, b: &str) -> bool {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    a_lower.contains(&b_lower) || b_lower.contains(&a_lower) || fold(a) == fold(b)
}

/// Compatibility decomposition without combining marks, case folded.
///
/// Decomposes again after folding, since folding can yield precomposed
/// characters of its own.
fn fold(s: &str) -> String {
    strip_marks(&default_case_fold_str(&strip_marks(s)))
}

fn strip_marks(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}
