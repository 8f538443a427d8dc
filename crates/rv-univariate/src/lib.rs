//! # rv-univariate
//!
//! Univariate probability distributions with a uniform evaluation
//! interface: density, cumulative distribution (both tails, plain and
//! log scale), quantile functions, log-likelihood, sampling, and
//! closed-form derived statistics.
//!
//! Numerical kernels delegate to the `statrs` crate through a thin
//! adapter; each family owns only its parameter validation and its
//! closed-form statistics.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Continuous distribution families.
pub mod continuous;

/// Discrete distribution families.
pub mod discrete;

/// Seedable random number generators.
pub mod random;

/// The uniform evaluation contract implemented by every family.
pub mod univariate;

pub(crate) mod provider;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use continuous::{
    Beta, Cauchy, ChiSquared, Exponential, FisherF, Gamma, Logistic, LogNormal, Normal, StudentT,
    Uniform, Weibull,
};
pub use discrete::{Binomial, Geometric, Hypergeometric, NegativeBinomial, Poisson};
pub use random::{MersenneTwisterRng, StandardNormalRng};
pub use univariate::Univariate;
