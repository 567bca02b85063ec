//! Locale dispatch table: one [`LocaleProfile`] per locale, bundling the
//! location template and phone plan. Adding a locale means adding a profile
//! entry, not duplicating branches across components.

use crate::backend::Backend;
use crate::locale::Locale;

/// Formatting rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProfile {
    /// How the `location` field is assembled.
    pub location: LocationTemplate,
    /// How the `phone` field is assembled.
    pub phone: PhonePlan,
}

/// The fixed location templates. Literal separators and labels are part of
/// the externally visible contract and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationTemplate {
    /// `"<street address>, <city>"` (en_US baseline).
    StreetAddressThenCity,
    /// `"<city>, <street>, д. <2-digit>, кв. <3-digit>"` (ru_RU).
    CityStreetBuildingUnit,
    /// `"<city>, <street address>"` (fr_FR).
    CityThenStreetAddress,
}

/// The fixed phone plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonePlan {
    /// The backend's default mask for its locale.
    Default,
    /// A fixed mask; `#` renders as a random digit.
    Mask(&'static str),
}

impl Locale {
    /// Formatting profile for this locale.
    #[inline]
    #[must_use]
    pub const fn profile(self) -> LocaleProfile {
        match self {
            Self::EnUs => LocaleProfile {
                location: LocationTemplate::StreetAddressThenCity,
                phone: PhonePlan::Default,
            },
            Self::RuRu => LocaleProfile {
                location: LocationTemplate::CityStreetBuildingUnit,
                // 1-digit country code, then 10 digits.
                phone: PhonePlan::Mask("+7##########"),
            },
            Self::FrFr => LocaleProfile {
                location: LocationTemplate::CityThenStreetAddress,
                // Fixed prefix, then 8 digits.
                phone: PhonePlan::Mask("+33 1########"),
            },
        }
    }
}

impl LocationTemplate {
    /// Assemble a location string, drawing parts from `backend` in template
    /// order.
    pub fn render<B: Backend + ?Sized>(self, backend: &mut B) -> String {
        match self {
            Self::StreetAddressThenCity => {
                let address = backend.street_address();
                let city = backend.city();
                format!("{address}, {city}")
            }
            Self::CityStreetBuildingUnit => {
                let city = backend.city();
                let street = backend.street();
                let building = backend.numeric_string(2);
                let unit = backend.numeric_string(3);
                format!("{city}, {street}, д. {building}, кв. {unit}")
            }
            Self::CityThenStreetAddress => {
                let city = backend.city();
                let address = backend.street_address();
                format!("{city}, {address}")
            }
        }
    }
}

impl PhonePlan {
    /// Assemble a phone string from `backend`.
    pub fn render<B: Backend + ?Sized>(self, backend: &mut B) -> String {
        match self {
            Self::Default => backend.phone_number(None),
            Self::Mask(mask) => backend.phone_number(Some(mask)),
        }
    }
}
