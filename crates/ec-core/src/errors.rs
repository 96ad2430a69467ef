//! Error types for ethiocal.
//!
//! Every fallible operation in the workspace returns [`Result`], backed by a
//! single `thiserror`-derived enum. The [`ensure!`](crate::ensure) and
//! [`malformed!`](crate::malformed) macros provide the early-return forms used
//! by the calendar engine.

use thiserror::Error;

/// The top-level error type used throughout ethiocal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date or date string failed validation.
    ///
    /// The message always carries the raw offending value.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A conversion entry point received an argument of an unsupported shape.
    #[error("malformed argument: {0}")]
    MalformedArgument(String),

    /// Arithmetic left the representable year range.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl Error {
    /// Return `true` for [`Error::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Return `true` for [`Error::MalformedArgument`].
    pub fn is_malformed_argument(&self) -> bool {
        matches!(self, Error::MalformedArgument(_))
    }
}

/// Shorthand `Result` type used throughout ethiocal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ec_core::{ensure, errors::Error};
/// fn positive(x: i32) -> ec_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::InvalidInput("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::MalformedArgument(...))` immediately.
///
/// # Example
/// ```
/// use ec_core::{malformed, errors::Error};
/// fn triple(parts: &[i64]) -> ec_core::errors::Result<()> {
///     if parts.len() != 3 {
///         malformed!("expected 3 components, got {}", parts.len());
///     }
///     Ok(())
/// }
/// assert!(triple(&[1, 2, 3]).is_ok());
/// assert!(triple(&[1, 2]).unwrap_err().is_malformed_argument());
/// ```
#[macro_export]
macro_rules! malformed {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::MalformedArgument(format!($($msg)*)))
    };
}
