//! Embedded word lists backing [`WordlistBackend`](crate::WordlistBackend).
//!
//! Small curated tables rather than exhaustive census data: the point is
//! plausible, locale-shaped output under a seeded draw, not coverage.

pub(crate) mod en;
pub(crate) mod fr;
pub(crate) mod ru;
