//! The corruption engine: bounded random mutation of generated strings.
//!
//! One call applies exactly one of three operations, chosen uniformly:
//! delete a char, insert a char from the locale alphabet, or transpose two
//! adjacent chars. All positions are char indices, so multi-byte locales
//! corrupt cleanly.

use fakegen_locale::{alphabet, Locale};
use rand::Rng;

/// The three corruption operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Delete,
    Insert,
    Transpose,
}

impl Op {
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..3u8) {
            0 => Self::Delete,
            1 => Self::Insert,
            _ => Self::Transpose,
        }
    }
}

/// Apply one corruption pass to `s`.
///
/// Delete and transpose are documented skips (identity) on strings of char
/// length <= 1: a name must never be emptied or crash the pass. Insert is
/// always possible, including at either end.
pub fn corrupt<R: Rng + ?Sized>(s: &str, locale: Locale, rng: &mut R) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    match Op::draw(rng) {
        Op::Delete => {
            if chars.len() <= 1 {
                return s.to_string();
            }
            let index = rng.gen_range(0..chars.len());
            chars.remove(index);
        }
        Op::Insert => {
            let letters = alphabet(locale);
            let ch = letters[rng.gen_range(0..letters.len())];
            let position = rng.gen_range(0..=chars.len());
            chars.insert(position, ch);
        }
        Op::Transpose => {
            if chars.len() <= 1 {
                return s.to_string();
            }
            let position = rng.gen_range(0..chars.len() - 1);
            chars.swap(position, position + 1);
        }
    }
    chars.into_iter().collect()
}

/// Apply `n` sequential corruption passes, each operating on the previous
/// pass's output.
pub fn corrupt_n<R: Rng + ?Sized>(s: &str, locale: Locale, n: u32, rng: &mut R) -> String {
    let mut out = s.to_string();
    for _ in 0..n {
        out = corrupt(&out, locale, rng);
    }
    out
}
