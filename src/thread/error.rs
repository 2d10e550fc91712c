use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when a [`Thread`](super::Thread) is constructed from an
/// inconsistent or non-physical specification.
///
/// These are not recoverable locally: a failure here means the catalog data
/// feeding the constructor is wrong, and generation should halt rather than
/// continue with a partial thread set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidThreadSpecification {
    /// The major diameter is not a strictly positive length.
    #[error("major diameter must be strictly positive")]
    MajorDiameter(#[source] ConstraintError),

    /// The supplied pitch is not a strictly positive length.
    #[error("pitch must be strictly positive")]
    Pitch(#[source] ConstraintError),

    /// The supplied thread density is not strictly positive.
    #[error("thread density must be strictly positive")]
    Density(#[source] ConstraintError),

    /// Neither pitch nor thread density was supplied.
    #[error("one of pitch or thread density must be supplied")]
    Unspecified,

    /// Both pitch and thread density were supplied independently.
    #[error("pitch and thread density must not both be supplied")]
    Overspecified,

    /// A fractional-inch diameter was given a zero denominator.
    #[error("fractional diameter denominator must be nonzero")]
    ZeroDenominator,
}
