//! Normal (Gaussian) distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use std::f64::consts::PI;

use crate::provider;
use crate::univariate::Univariate;

/// The Normal distribution with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone)]
pub struct Normal {
    dist: statrs::distribution::Normal,
    mu: Real,
    sigma: Real,
}

impl Normal {
    /// Create a Normal distribution with mean `mu` and standard deviation
    /// `sigma > 0`.
    pub fn new(mu: Real, sigma: Real) -> Result<Self> {
        ensure!(mu.is_finite(), "mu must be finite, got {mu}");
        ensure!(
            sigma.is_finite() && sigma > 0.0,
            "sigma must be positive and finite, got {sigma}"
        );
        let dist = statrs::distribution::Normal::new(mu, sigma)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, mu, sigma })
    }

    /// Location parameter μ.
    pub fn location(&self) -> Real {
        self.mu
    }

    /// Scale parameter σ.
    pub fn scale(&self) -> Real {
        self.sigma
    }
}

impl Univariate for Normal {
    fn name(&self) -> &'static str {
        "Normal"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.mu, self.sigma]
    }

    fn support(&self) -> (Real, Real) {
        (Real::NEG_INFINITY, Real::INFINITY)
    }

    fn pdf(&self, x: Real) -> Real {
        self.dist.pdf(x)
    }

    fn logpdf(&self, x: Real) -> Real {
        self.dist.ln_pdf(x)
    }

    fn cdf(&self, x: Real) -> Real {
        self.dist.cdf(x)
    }

    fn ccdf(&self, x: Real) -> Real {
        self.dist.sf(x)
    }

    fn logcdf(&self, x: Real) -> Real {
        self.dist.cdf(x).ln()
    }

    fn logccdf(&self, x: Real) -> Real {
        self.dist.sf(x).ln()
    }

    fn quantile(&self, q: Real) -> Result<Real> {
        let (lo, hi) = self.support();
        provider::quantile_of(&self.dist, q, lo, hi)
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        let (lo, hi) = self.support();
        provider::cquantile_of(&self.dist, q, lo, hi)
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        let (lo, hi) = self.support();
        provider::invlogcdf_of(&self.dist, lq, lo, hi)
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        let (lo, hi) = self.support();
        provider::invlogccdf_of(&self.dist, lq, lo, hi)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        self.mu
    }

    fn median(&self) -> Real {
        self.mu
    }

    fn mode(&self) -> Real {
        self.mu
    }

    fn var(&self) -> Real {
        self.sigma * self.sigma
    }

    fn std(&self) -> Real {
        self.sigma
    }

    fn skewness(&self) -> Real {
        0.0
    }

    fn kurtosis(&self) -> Real {
        0.0
    }

    fn entropy(&self) -> Real {
        0.5 * ((2.0 * PI).ln() + 1.0) + self.sigma.ln()
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        Ok((self.mu * x + 0.5 * self.sigma * self.sigma * x * x).exp())
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        Ok(Complex64::new(-0.5 * self.sigma * self.sigma * x * x, self.mu * x).exp())
    }
}
