//! The single error kind this crate can return.

use core::fmt::{self, Display, Formatter};

/// The one error kind a fallible operation in this crate can fail with.
///
/// Returned when a family identifier is used where it is not valid (a
/// non-cSHAKE family passed to [`crate::Context::start_cshake`]), when an
/// output length does not match a fixed-digest family's mandated length,
/// when a context is driven out of order (`update`/`finish` before `start`,
/// or after `finish`), or when a name/customization string is implausibly
/// long enough to overflow the `bytepad` length computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Bad input data: an invalid family id, a mismatched output length, a
    /// context used out of sequence, or an oversized cSHAKE framing string.
    BadInputData,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadInputData => write!(f, "bad input data"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
