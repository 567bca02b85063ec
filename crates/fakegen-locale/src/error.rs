//! Error types for the locale registry.

/// Failure to parse a locale tag strictly.
///
/// Callers that prefer recovery over reporting should use
/// [`Locale::from_tag_lossy`](crate::Locale::from_tag_lossy), which falls
/// back to the baseline locale instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale tag: {tag}")]
pub struct LocaleParseError {
    /// The tag that did not match any supported locale.
    pub tag: String,
}
