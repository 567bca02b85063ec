//! The record synthesizer: one draft record per call, fields drawn through
//! the backend and formatted by the locale profile.

use fakegen_locale::{Backend, Gender, Locale};
use rand::Rng;

/// Backend-derived fields of a record before serialing and corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    /// `"first last"`, gender-consistent, uncorrupted.
    pub person: String,
    /// Locale-templated address.
    pub location: String,
    /// Locale-templated phone.
    pub phone: String,
    /// Opaque unique identifier.
    pub identifier: String,
}

/// Synthesize one draft record.
///
/// The gender coin-flip comes from the chaos stream; every other draw goes
/// through the seeded backend, in a fixed order (name, location, phone,
/// identifier) so the backend stream stays aligned across runs.
pub fn synthesize<B, R>(locale: Locale, backend: &mut B, chaos: &mut R) -> RecordDraft
where
    B: Backend + ?Sized,
    R: Rng + ?Sized,
{
    let gender = if chaos.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };

    let first = backend.first_name(gender);
    let last = backend.last_name(gender);
    let person = format!("{first} {last}");

    let profile = locale.profile();
    let location = profile.location.render(backend);
    let phone = profile.phone.render(backend);
    let identifier = backend.uuid();

    RecordDraft {
        person,
        location,
        phone,
        identifier,
    }
}
