//! # rvlib
//!
//! Univariate probability distributions with a uniform evaluation
//! interface: densities, both cumulative tails in plain and log scale,
//! quantile inversion, log-likelihood, derived statistics, and seedable
//! sampling.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `rv-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! rvlib = "0.1"
//! ```
//!
//! ```rust
//! use rvlib::prelude::*;
//!
//! let n = Normal::new(0.0, 1.0)?;
//! assert!((n.cdf(0.0) - 0.5).abs() < 1e-12);
//! assert!((n.quantile(0.975)? - 1.959964).abs() < 1e-6);
//!
//! let mut rng = MersenneTwisterRng::new(42);
//! let draws = n.rand(&mut rng, 10)?;
//! assert_eq!(draws.len(), 10);
//! # Ok::<(), rvlib::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core scalar aliases and error definitions.
pub use rv_core as core;

/// Distribution families, the evaluation trait, and RNG wrappers.
pub use rv_univariate as univariate;

/// The items most applications need, importable in one line.
pub mod prelude {
    pub use rv_core::{Error, Natural, Real, Result};
    pub use rv_univariate::{
        Beta, Binomial, Cauchy, ChiSquared, Exponential, FisherF, Gamma, Geometric,
        Hypergeometric, LogNormal, Logistic, MersenneTwisterRng, NegativeBinomial, Normal,
        Poisson, StandardNormalRng, StudentT, Uniform, Univariate, Weibull,
    };
}
