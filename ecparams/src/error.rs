//! Error types.

use core::fmt;

/// Domain parameter errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A required input was empty, or the key was not in the state the
    /// operation requires.
    InvalidArgument,

    /// No registered curve matches the requested identifier or name.
    NotFound,

    /// The math backend could not allocate a big integer.
    AllocationFailure,

    /// The math backend failed to copy or set a big integer value.
    CopyFailure,

    /// A hexadecimal curve constant could not be decoded.
    Decode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidArgument => "invalid argument",
            Error::NotFound => "curve not found",
            Error::AllocationFailure => "big integer allocation failed",
            Error::CopyFailure => "big integer copy failed",
            Error::Decode => "malformed curve constant",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
