//! Error types for datekit.
//!
//! Every fallible operation in the workspace reports one of two failure
//! kinds: a date that could not be understood, or an argument that the
//! operation cannot accept. The [`ensure!`](crate::ensure) and
//! [`invalid_date!`](crate::invalid_date) macros are the usual way to raise
//! them.

use thiserror::Error;

/// The top-level error type used throughout datekit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or unparseable date input, or a calendar year that cannot
    /// be represented.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// An argument the operation cannot accept (non-finite amount, inverted
    /// range, result out of range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` for [`Error::InvalidDate`].
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Error::InvalidDate(_))
    }

    /// Return `true` for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

/// Shorthand `Result` type used throughout datekit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dk_core::ensure;
/// fn finite(x: f64) -> dk_core::Result<f64> {
///     ensure!(x.is_finite(), "amount must be finite, got {x}");
///     Ok(x)
/// }
/// assert!(finite(1.0).is_ok());
/// assert!(finite(f64::NAN).unwrap_err().is_invalid_argument());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidDate(...))` immediately.
///
/// # Example
/// ```
/// use dk_core::invalid_date;
/// fn parse(s: &str) -> dk_core::Result<()> {
///     if s.is_empty() {
///         invalid_date!("empty input");
///     }
///     Ok(())
/// }
/// assert!(parse("").unwrap_err().is_invalid_date());
/// ```
#[macro_export]
macro_rules! invalid_date {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidDate(format!($($msg)*)))
    };
}
