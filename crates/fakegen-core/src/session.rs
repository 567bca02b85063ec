//! Session reducer: parameter changes and page advances as pure state
//! transitions over one series.
//!
//! The UI layer (or any embedder) translates its widgets and scroll events
//! into [`SessionEvent`]s; the session owns the parameters, the series, the
//! page cursor, and the backend, so generation-and-append is atomic with
//! respect to serial assignment.

use crate::batch::generate_page;
use crate::error::ParamsError;
use crate::params::{ErrorPolicy, GenerationParams};
use crate::record::{Record, Series};
use fakegen_locale::{Locale, WordlistBackend};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An input to the session reducer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event", content = "value")]
pub enum SessionEvent {
    /// Switch locale. Resets the series if the value actually changes.
    SetLocale(Locale),
    /// Set the base seed. Resets the series if the value actually changes.
    SetSeed(u64),
    /// Set error intensity. Validated at this boundary; resets on change.
    SetErrorIntensity(f64),
    /// Switch error policy. Resets the series if the value actually changes.
    SetErrorPolicy(ErrorPolicy),
    /// Scroll reached the load-more threshold: append the next page.
    NextPage,
    /// Regenerate from page 1 (the on-mount trigger).
    Refresh,
}

/// Operational state of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Cleared; counter and page reinitialized. Leaves on the next batch
    /// generation call.
    Reset,
    /// Accepting appended batches under a monotonic serial counter.
    Active,
}

/// One generation session: parameters, accumulated series, page cursor, and
/// the locale backend.
#[derive(Debug)]
pub struct Session {
    params: GenerationParams,
    backend: WordlistBackend,
    series: Series,
    page: u32,
    phase: SessionPhase,
}

impl Session {
    /// Create a session in the `Reset` phase with an empty series. Send
    /// [`SessionEvent::Refresh`] (the mount trigger) to generate page 1.
    pub fn new(params: GenerationParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            backend: WordlistBackend::new(params.locale),
            params,
            series: Series::new(),
            page: 1,
            phase: SessionPhase::Reset,
        })
    }

    /// Apply one event. On a validation error the session state is left
    /// exactly as it was.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), ParamsError> {
        match event {
            SessionEvent::SetLocale(locale) => {
                if locale == self.params.locale {
                    return Ok(());
                }
                self.params.locale = locale;
                self.backend = WordlistBackend::new(locale);
                self.reset_and_generate()
            }
            SessionEvent::SetSeed(seed) => {
                if seed == self.params.seed {
                    return Ok(());
                }
                self.params.seed = seed;
                self.reset_and_generate()
            }
            SessionEvent::SetErrorIntensity(intensity) => {
                // Validate the candidate before touching anything.
                let candidate = self.params.with_error_intensity(intensity);
                candidate.validate()?;
                if (intensity - self.params.error_intensity).abs() < f64::EPSILON {
                    return Ok(());
                }
                self.params = candidate;
                self.reset_and_generate()
            }
            SessionEvent::SetErrorPolicy(policy) => {
                if policy == self.params.error_policy {
                    return Ok(());
                }
                self.params.error_policy = policy;
                self.reset_and_generate()
            }
            SessionEvent::Refresh => self.reset_and_generate(),
            SessionEvent::NextPage => match self.phase {
                SessionPhase::Reset => self.reset_and_generate(),
                SessionPhase::Active => {
                    self.page += 1;
                    generate_page(&self.params, self.page, &mut self.backend, &mut self.series)
                }
            },
        }
    }

    fn reset_and_generate(&mut self) -> Result<(), ParamsError> {
        debug!(locale = %self.params.locale, seed = self.params.seed, "series reset");
        self.series.reset();
        self.page = 1;
        generate_page(&self.params, 1, &mut self.backend, &mut self.series)?;
        self.phase = SessionPhase::Active;
        Ok(())
    }

    /// Current parameters.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// The accumulated series.
    #[inline]
    #[must_use]
    pub const fn series(&self) -> &Series {
        &self.series
    }

    /// All records generated so far.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        self.series.records()
    }

    /// Current page cursor (1-based).
    #[inline]
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Current operational phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }
}
