//! Error type for chart computation.

use kundali_ephem::EphemerisError;
use kundali_time::TimeError;
use thiserror::Error;

/// Failures surfaced by `compute_chart`.
///
/// An absent current dasha period is not an error; the report represents
/// it explicitly.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date/time/timezone could not be normalized.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// The ephemeris provider reported a failure.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
