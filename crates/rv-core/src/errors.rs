//! Error types for rvlib.
//!
//! A single `thiserror`-derived enum covers the three failure classes of
//! the distribution layer: parameter/probability domain violations,
//! deliberately unsupported capabilities, and non-convergent numerics
//! propagated from the statistical provider.

use thiserror::Error;

/// The top-level error type used throughout rvlib.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A parameter or probability argument lies outside its valid domain
    /// (e.g. a non-positive scale, a probability outside `[0, 1]`).
    #[error("domain error: {0}")]
    Domain(String),

    /// An operation the family deliberately does not support (e.g. sampling
    /// a family with no native sampler, or a moment-generating function
    /// with no closed form).
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// The provider failed to produce a finite result where one was
    /// required (e.g. quantile inversion did not converge).
    #[error("numerical error: {0}")]
    Numerical(String),
}

/// Shorthand `Result` type used throughout rvlib.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Require a condition on a parameter or argument.
///
/// Returns `Err(Error::Domain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rv_core::{ensure, errors::Error};
/// fn positive(x: f64) -> rv_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with a numerical error.
///
/// Returns `Err(Error::Numerical(...))` immediately.
///
/// # Example
/// ```
/// use rv_core::{fail, errors::Error};
/// fn diverged() -> rv_core::errors::Result<()> {
///     fail!("inversion did not converge");
/// }
/// assert!(diverged().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Numerical(format!($($msg)*)))
    };
}
