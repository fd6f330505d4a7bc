//! Error type for ephemeris queries.

use kundali_vedic::Graha;
use thiserror::Error;

/// Failures reported by an ephemeris provider.
///
/// The engine never retries these; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider cannot answer for this body. Ketu in particular is
    /// never queried directly; it is derived from Rahu.
    #[error("body {} is not queryable from the ephemeris", .0.name())]
    UnsupportedBody(Graha),
    /// The instant falls outside the provider's usable range.
    #[error("instant JD {jd} is outside the ephemeris range")]
    OutOfRange { jd: f64 },
    /// Internal provider failure, propagated verbatim.
    #[error("ephemeris provider error: {0}")]
    Provider(String),
}
