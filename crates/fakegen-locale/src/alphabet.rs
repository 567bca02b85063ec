//! Per-locale alphabets for corruption character insertion.
//!
//! Alphabets are char slices, not byte strings: the French and Russian
//! entries contain multi-byte scalars and corruption indexes by char.

use crate::locale::Locale;
use once_cell::sync::Lazy;

static LATIN: Lazy<Vec<char>> = Lazy::new(|| ('a'..='z').collect());

static FRENCH: Lazy<Vec<char>> =
    Lazy::new(|| ('a'..='z').chain("àâçéèêëîïôûùüÿñæœ".chars()).collect());

static CYRILLIC: Lazy<Vec<char>> = Lazy::new(|| {
    // 'ё' sits outside the contiguous а..я range.
    let mut chars: Vec<char> = ('а'..='я').collect();
    chars.push('ё');
    chars
});

/// Character set used for random insertion when corrupting strings of the
/// given locale. Total over [`Locale`]; the Latin lowercase alphabet is the
/// baseline any future locale without a dedicated entry should fall back to.
#[must_use]
pub fn alphabet(locale: Locale) -> &'static [char] {
    match locale {
        Locale::EnUs => &LATIN,
        Locale::FrFr => &FRENCH,
        Locale::RuRu => &CYRILLIC,
    }
}
