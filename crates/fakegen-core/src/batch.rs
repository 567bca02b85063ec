//! The batch generator: seeds the streams for a page and appends one
//! fixed-size batch of records to a series.

use crate::corrupt::corrupt_n;
use crate::error::ParamsError;
use crate::params::{ErrorPolicy, GenerationParams, PAGE_SIZE};
use crate::record::{Record, Series};
use crate::synth::synthesize;
use fakegen_locale::Backend;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Stream-derivation constant (splitmix64 increment). The chaos stream is
/// the effective seed xor'd with this, so backend and chaos streams never
/// collide and adding corruption volume cannot perturb the backend draws.
const CHAOS_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG for gender, error-count, and corruption draws on one
/// page.
fn chaos_rng(effective_seed: u64) -> StdRng {
    StdRng::seed_from_u64(effective_seed ^ CHAOS_STREAM)
}

/// Corruption passes for one record under the configured policy.
fn error_passes<R: Rng + ?Sized>(params: &GenerationParams, chaos: &mut R) -> u32 {
    match params.error_policy {
        ErrorPolicy::Fixed => params.error_intensity.floor() as u32,
        ErrorPolicy::PerRecordUniform => {
            (chaos.gen::<f64>() * (params.error_intensity + 1.0)).floor() as u32
        }
    }
}

/// Generate page `page` under `params` and append exactly [`PAGE_SIZE`]
/// records to `series`.
///
/// The backend is re-seeded with the effective seed (`seed + page`) before
/// anything is drawn, so a given page of a given series always reproduces
/// the same batch regardless of call history.
pub fn generate_page<B: Backend + ?Sized>(
    params: &GenerationParams,
    page: u32,
    backend: &mut B,
    series: &mut Series,
) -> Result<(), ParamsError> {
    params.validate()?;
    if page == 0 {
        return Err(ParamsError::PageZero);
    }

    let effective_seed = params.effective_seed(page);
    backend.reseed(effective_seed);
    let mut chaos = chaos_rng(effective_seed);

    debug!(
        locale = %params.locale,
        page,
        effective_seed,
        intensity = params.error_intensity,
        "generating batch"
    );

    for _ in 0..PAGE_SIZE {
        let draft = synthesize(params.locale, backend, &mut chaos);
        let errors = error_passes(params, &mut chaos);
        let person = corrupt_n(&draft.person, params.locale, errors, &mut chaos);

        let serial = series.take_serial();
        series.append(Record {
            serial,
            identifier: draft.identifier,
            person,
            location: draft.location,
            phone: draft.phone,
            error_count: errors,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakegen_locale::{Locale, WordlistBackend};
    use pretty_assertions::assert_eq;

    fn params(locale: Locale, seed: u64, intensity: f64) -> GenerationParams {
        GenerationParams::new(locale)
            .with_seed(seed)
            .with_error_intensity(intensity)
    }

    fn one_page(params: &GenerationParams, page: u32) -> Vec<Record> {
        let mut backend = WordlistBackend::new(params.locale);
        let mut series = Series::new();
        generate_page(params, page, &mut backend, &mut series).unwrap();
        series.records().to_vec()
    }

    #[test]
    fn appends_exactly_page_size_records() {
        let batch = one_page(&params(Locale::EnUs, 42, 0.0), 1);
        assert_eq!(batch.len(), PAGE_SIZE);
    }

    #[test]
    fn fully_deterministic_for_fixed_inputs() {
        let p = params(Locale::FrFr, 123, 3.0);
        assert_eq!(one_page(&p, 2), one_page(&p, 2));
    }

    #[test]
    fn pages_are_independent_of_call_history() {
        let p = params(Locale::EnUs, 42, 1.0);

        // Page 1 then page 2 in one series.
        let mut backend = WordlistBackend::new(p.locale);
        let mut series = Series::new();
        generate_page(&p, 1, &mut backend, &mut series).unwrap();
        generate_page(&p, 2, &mut backend, &mut series).unwrap();
        let first_twenty: Vec<Record> = series.records()[..PAGE_SIZE].to_vec();

        // Fresh series, page 1 only.
        let fresh = one_page(&p, 1);
        assert_eq!(first_twenty, fresh);
    }

    #[test]
    fn adjacent_pages_differ() {
        let p = params(Locale::EnUs, 42, 0.0);
        let page1 = one_page(&p, 1);
        let page2 = one_page(&p, 2);
        assert_ne!(
            page1.iter().map(|r| &r.person).collect::<Vec<_>>(),
            page2.iter().map(|r| &r.person).collect::<Vec<_>>()
        );
    }

    #[test]
    fn fixed_policy_applies_floor_of_intensity() {
        let batch = one_page(&params(Locale::RuRu, 7, 2.75), 1);
        assert!(batch.iter().all(|r| r.error_count == 2));
    }

    #[test]
    fn uniform_policy_is_bounded_by_intensity() {
        let p = params(Locale::EnUs, 7, 4.0).with_error_policy(ErrorPolicy::PerRecordUniform);
        let batch = one_page(&p, 1);
        assert!(batch.iter().all(|r| r.error_count <= 4));
    }

    #[test]
    fn zero_intensity_leaves_names_pristine() {
        let batch = one_page(&params(Locale::EnUs, 42, 0.9), 1);
        for record in &batch {
            assert_eq!(record.error_count, 0);
            assert_eq!(record.person.split(' ').count(), 2);
        }
    }

    #[test]
    fn zero_page_is_rejected() {
        let p = params(Locale::EnUs, 1, 0.0);
        let mut backend = WordlistBackend::new(p.locale);
        let mut series = Series::new();
        let err = generate_page(&p, 0, &mut backend, &mut series).unwrap_err();
        assert_eq!(err, ParamsError::PageZero);
        assert!(series.is_empty());
    }

    #[test]
    fn identifiers_are_distinct_within_a_batch() {
        let batch = one_page(&params(Locale::EnUs, 42, 0.0), 1);
        let mut ids: Vec<&String> = batch.iter().map(|r| &r.identifier).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PAGE_SIZE);
    }
}
