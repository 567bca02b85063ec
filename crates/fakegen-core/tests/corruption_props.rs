//! Property-based tests for the corruption engine:
//! - one pass changes char length by at most one
//! - n passes change char length by at most n
//! - every output char comes from the input or the locale alphabet
//! - corruption is a pure function of (input, locale, rng state)
//! - length-1 inputs survive every pass count with length in [1, 1+n]

use fakegen_core::{corrupt, corrupt_n};
use fakegen_locale::{alphabet, Locale};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn arb_locale() -> impl Strategy<Value = Locale> {
    prop_oneof![
        Just(Locale::EnUs),
        Just(Locale::RuRu),
        Just(Locale::FrFr),
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    // Mixed-script names exercise char-indexed corruption.
    proptest::string::string_regex("[a-zA-Zа-яёàâçéè ]{1,24}").unwrap()
}

proptest! {
    #[test]
    fn one_pass_length_delta_at_most_one(
        name in arb_name(),
        locale in arb_locale(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = corrupt(&name, locale, &mut rng);
        let before = name.chars().count() as i64;
        let after = out.chars().count() as i64;
        prop_assert!((after - before).abs() <= 1);
    }

    #[test]
    fn n_passes_length_delta_at_most_n(
        name in arb_name(),
        locale in arb_locale(),
        seed in any::<u64>(),
        n in 0u32..12,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = corrupt_n(&name, locale, n, &mut rng);
        let before = name.chars().count() as i64;
        let after = out.chars().count() as i64;
        prop_assert!((after - before).abs() <= i64::from(n));
    }

    #[test]
    fn output_chars_come_from_input_or_alphabet(
        name in arb_name(),
        locale in arb_locale(),
        seed in any::<u64>(),
        n in 0u32..8,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = corrupt_n(&name, locale, n, &mut rng);
        let allowed: HashSet<char> = name
            .chars()
            .chain(alphabet(locale).iter().copied())
            .collect();
        for c in out.chars() {
            prop_assert!(allowed.contains(&c), "unexpected char {:?}", c);
        }
    }

    #[test]
    fn corruption_is_deterministic(
        name in arb_name(),
        locale in arb_locale(),
        seed in any::<u64>(),
        n in 0u32..8,
    ) {
        let a = corrupt_n(&name, locale, n, &mut StdRng::seed_from_u64(seed));
        let b = corrupt_n(&name, locale, n, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn single_char_input_never_vanishes(
        seed in any::<u64>(),
        n in 0u32..8,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = corrupt_n("й", Locale::RuRu, n, &mut rng);
        let len = out.chars().count() as u32;
        prop_assert!(len >= 1);
        prop_assert!(len <= 1 + n);
    }
}
