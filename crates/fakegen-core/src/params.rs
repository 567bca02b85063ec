//! Generation parameters and their boundary validation.

use crate::error::ParamsError;
use fakegen_locale::Locale;
use serde::{Deserialize, Serialize};

/// Records generated per page. Every batch appends exactly this many.
pub const PAGE_SIZE: usize = 20;

/// Ceiling for [`GenerationParams::error_intensity`], matching the widest
/// input range the number-field configuration allows.
pub const MAX_ERROR_INTENSITY: f64 = 1000.0;

/// How the per-record corruption-pass count is derived from the configured
/// error intensity.
///
/// Both policies appeared over the system's evolution; the choice is an
/// explicit per-series setting and `error_count` always records the count
/// actually applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Every record gets exactly `floor(error_intensity)` passes.
    #[default]
    Fixed,
    /// Each record draws `floor(u * (error_intensity + 1))` passes, `u`
    /// uniform in `[0, 1)` from the chaos stream.
    PerRecordUniform,
}

/// The configuration one series is generated under. Changing any field
/// invalidates the series (see [`Session`](crate::Session)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Locale driving names, addresses, phones, and the corruption alphabet.
    pub locale: Locale,
    /// Base seed; the backend is re-seeded with `seed + page` per page.
    pub seed: u64,
    /// Corruption intensity, in `[0, MAX_ERROR_INTENSITY]`.
    pub error_intensity: f64,
    /// How intensity translates to per-record pass counts.
    pub error_policy: ErrorPolicy,
}

impl GenerationParams {
    /// Parameters for `locale` with seed 0, no corruption, fixed policy.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            seed: 0,
            error_intensity: 0.0,
            error_policy: ErrorPolicy::default(),
        }
    }

    /// With base seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// With error intensity
    #[inline]
    #[must_use]
    pub fn with_error_intensity(mut self, intensity: f64) -> Self {
        self.error_intensity = intensity;
        self
    }

    /// With error policy
    #[inline]
    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Validate numeric preconditions. The generator assumes these hold and
    /// is free of range checks internally.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let value = self.error_intensity;
        if !value.is_finite() {
            return Err(ParamsError::IntensityNotFinite { value });
        }
        if value < 0.0 {
            return Err(ParamsError::IntensityNegative { value });
        }
        if value > MAX_ERROR_INTENSITY {
            return Err(ParamsError::IntensityTooLarge { value });
        }
        Ok(())
    }

    /// The seed actually fed to the backend for `page`: `seed + page`.
    /// Distinct pages get distinct deterministic draws while the whole
    /// series stays reproducible from the base seed alone.
    #[inline]
    #[must_use]
    pub fn effective_seed(&self, page: u32) -> u64 {
        self.seed.wrapping_add(u64::from(page))
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
