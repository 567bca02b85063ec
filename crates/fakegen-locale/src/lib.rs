//! Locale registry for fakegen.
//!
//! Everything locale-conditioned lives here:
//! - The closed [`Locale`] set and its string tags
//! - Per-locale alphabets used for corruption character insertion
//! - The [`LocaleProfile`] dispatch table (location template + phone plan)
//! - The [`Backend`] faking trait and its seeded [`WordlistBackend`]
//!
//! Adding a locale is a data addition: a new `Locale` variant, an alphabet,
//! a profile entry, and a word-list module.

pub mod alphabet;
pub mod backend;
pub mod error;
pub mod locale;
pub mod profile;
mod wordlists;

pub use alphabet::alphabet;
pub use backend::{Backend, Gender, WordlistBackend};
pub use error::LocaleParseError;
pub use locale::Locale;
pub use profile::{LocaleProfile, LocationTemplate, PhonePlan};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
