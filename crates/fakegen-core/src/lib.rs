//! fakegen-core — deterministic synthetic-record generation.
//!
//! The pipeline, leaf to root:
//! - [`corrupt`]: bounded random string corruption (delete/insert/transpose)
//! - [`synthesize`]: one locale-formatted draft record per call
//! - [`generate_page`]: seeds the streams and appends one 20-record batch
//! - [`Session`]: reducer over parameter changes and page advances
//!
//! All randomness is derived from the effective seed (`seed + page`): the
//! backend stream feeds name/address/phone/identifier draws, and a separate
//! chaos stream feeds the gender coin-flip, per-record error counts, and
//! corruption. A series is therefore fully reproducible from
//! (locale, seed, error intensity, error policy).
//!
//! # Example
//!
//! ```rust
//! use fakegen_core::{GenerationParams, Session, SessionEvent};
//! use fakegen_locale::Locale;
//!
//! # fn main() -> Result<(), fakegen_core::ParamsError> {
//! let params = GenerationParams::new(Locale::EnUs).with_seed(42);
//! let mut session = Session::new(params)?;
//! session.apply(SessionEvent::Refresh)?;      // page 1
//! session.apply(SessionEvent::NextPage)?;     // page 2 appended
//! assert_eq!(session.records().len(), 40);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod corrupt;
pub mod error;
pub mod params;
pub mod record;
pub mod session;
pub mod synth;

pub use batch::generate_page;
pub use corrupt::{corrupt, corrupt_n};
pub use error::ParamsError;
pub use params::{ErrorPolicy, GenerationParams, MAX_ERROR_INTENSITY, PAGE_SIZE};
pub use record::{Record, Series};
pub use session::{Session, SessionEvent, SessionPhase};
pub use synth::{synthesize, RecordDraft};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with fakegen-core
    pub use crate::{
        generate_page, ErrorPolicy, GenerationParams, Record, Series, Session, SessionEvent,
        SessionPhase, PAGE_SIZE,
    };
    pub use fakegen_locale::{Backend, Gender, Locale, WordlistBackend};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
