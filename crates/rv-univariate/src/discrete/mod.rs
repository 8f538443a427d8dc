//! Discrete distribution families.
//!
//! Kernels accept real-valued arguments with the usual counting
//! conventions: zero mass at non-integer or out-of-range points, and the
//! cdf evaluated at `⌊x⌋`. Shannon entropy is computed by direct pmf
//! summation.

pub mod binomial;
pub mod geometric;
pub mod hypergeometric;
pub mod neg_binomial;
pub mod poisson;

pub use binomial::Binomial;
pub use geometric::Geometric;
pub use hypergeometric::Hypergeometric;
pub use neg_binomial::NegativeBinomial;
pub use poisson::Poisson;
