//! The faking backend: seeded, locale-conditioned draws for every generated
//! field.
//!
//! [`Backend`] is the seam the record synthesizer generates through; the
//! built-in [`WordlistBackend`] implements it over the embedded word lists
//! with a `StdRng`, so a given seed always replays the same draw sequence.

use crate::locale::Locale;
use crate::wordlists::{en, fr, ru};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Binary gender used to condition name draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Draw from the male name tables.
    Male,
    /// Draw from the female name tables.
    Female,
}

/// Seeded pseudo-random generation of locale-shaped field values.
///
/// Implementations must be fully deterministic after [`reseed`](Self::reseed):
/// the same seed followed by the same call sequence yields the same values.
pub trait Backend {
    /// Reset the internal stream. Mandatory before every batch.
    fn reseed(&mut self, seed: u64);

    /// Draw a first name conditioned on gender.
    fn first_name(&mut self, gender: Gender) -> String;

    /// Draw a last name conditioned on gender (locales with ungendered
    /// surnames may ignore it).
    fn last_name(&mut self, gender: Gender) -> String;

    /// Draw a city name.
    fn city(&mut self) -> String;

    /// Draw a bare street name.
    fn street(&mut self) -> String;

    /// Draw a full street address (house number and street).
    fn street_address(&mut self) -> String;

    /// Draw `len` decimal digits.
    fn numeric_string(&mut self, len: usize) -> String;

    /// Draw a phone number. `None` renders the locale's default mask;
    /// `Some(mask)` renders each `#` in the mask as a random digit and
    /// copies every other character through.
    fn phone_number(&mut self, mask: Option<&str>) -> String;

    /// Draw an opaque unique identifier.
    fn uuid(&mut self) -> String;
}

/// Word-list [`Backend`] over a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct WordlistBackend {
    locale: Locale,
    rng: StdRng,
}

impl WordlistBackend {
    /// Create a backend for `locale`, seeded from OS entropy. Call
    /// [`reseed`](Backend::reseed) before any reproducible generation.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a backend for `locale` with a known seed.
    #[must_use]
    pub fn with_seed(locale: Locale, seed: u64) -> Self {
        Self {
            locale,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The locale this backend draws for.
    #[inline]
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    fn pick(&mut self, items: &[&'static str]) -> String {
        items[self.rng.gen_range(0..items.len())].to_string()
    }

    fn digit(&mut self) -> char {
        char::from(b'0' + self.rng.gen_range(0..10u8))
    }

    const fn default_mask(&self) -> &'static str {
        match self.locale {
            Locale::EnUs => "(###) ###-####",
            Locale::RuRu => "+7 ### ###-##-##",
            Locale::FrFr => "0# ## ## ## ##",
        }
    }
}

impl Backend for WordlistBackend {
    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn first_name(&mut self, gender: Gender) -> String {
        let table = match (self.locale, gender) {
            (Locale::EnUs, Gender::Male) => en::FIRST_MALE,
            (Locale::EnUs, Gender::Female) => en::FIRST_FEMALE,
            (Locale::RuRu, Gender::Male) => ru::FIRST_MALE,
            (Locale::RuRu, Gender::Female) => ru::FIRST_FEMALE,
            (Locale::FrFr, Gender::Male) => fr::FIRST_MALE,
            (Locale::FrFr, Gender::Female) => fr::FIRST_FEMALE,
        };
        self.pick(table)
    }

    fn last_name(&mut self, gender: Gender) -> String {
        let table = match (self.locale, gender) {
            (Locale::EnUs, _) => en::LAST,
            (Locale::RuRu, Gender::Male) => ru::LAST_MALE,
            (Locale::RuRu, Gender::Female) => ru::LAST_FEMALE,
            (Locale::FrFr, _) => fr::LAST,
        };
        self.pick(table)
    }

    fn city(&mut self) -> String {
        let table = match self.locale {
            Locale::EnUs => en::CITIES,
            Locale::RuRu => ru::CITIES,
            Locale::FrFr => fr::CITIES,
        };
        self.pick(table)
    }

    fn street(&mut self) -> String {
        match self.locale {
            Locale::EnUs => {
                let name = self.pick(en::STREET_NAMES);
                let suffix = self.pick(en::STREET_SUFFIXES);
                format!("{name} {suffix}")
            }
            Locale::RuRu => self.pick(ru::STREETS),
            Locale::FrFr => self.pick(fr::STREETS),
        }
    }

    fn street_address(&mut self) -> String {
        match self.locale {
            Locale::EnUs => {
                let number = self.rng.gen_range(100..10_000);
                let street = self.street();
                format!("{number} {street}")
            }
            Locale::RuRu => {
                let street = self.street();
                let number = self.rng.gen_range(1..150);
                format!("{street}, {number}")
            }
            Locale::FrFr => {
                let number = self.rng.gen_range(1..250);
                let street = self.street();
                format!("{number} {street}")
            }
        }
    }

    fn numeric_string(&mut self, len: usize) -> String {
        (0..len).map(|_| self.digit()).collect()
    }

    fn phone_number(&mut self, mask: Option<&str>) -> String {
        let mask = mask.unwrap_or_else(|| self.default_mask());
        mask.chars()
            .map(|c| if c == '#' { self.digit() } else { c })
            .collect()
    }

    fn uuid(&mut self) -> String {
        // Deterministic v4: random bytes come from the seeded stream.
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}
