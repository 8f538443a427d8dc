//! Gamma distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::gamma::{digamma, ln_gamma};

use crate::provider;
use crate::univariate::Univariate;

/// The Gamma distribution with shape `alpha` and rate `beta` (scale `1/beta`).
#[derive(Debug, Clone)]
pub struct Gamma {
    dist: statrs::distribution::Gamma,
    alpha: Real,
    beta: Real,
}

impl Gamma {
    /// Create a Gamma distribution with shape `alpha > 0` and rate `beta > 0`.
    pub fn new(alpha: Real, beta: Real) -> Result<Self> {
        ensure!(
            alpha.is_finite() && alpha > 0.0,
            "shape must be positive and finite, got {alpha}"
        );
        ensure!(
            beta.is_finite() && beta > 0.0,
            "rate must be positive and finite, got {beta}"
        );
        let dist = statrs::distribution::Gamma::new(alpha, beta)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, alpha, beta })
    }

    /// Shape parameter α.
    pub fn shape(&self) -> Real {
        self.alpha
    }

    /// Rate parameter β.
    pub fn rate(&self) -> Real {
        self.beta
    }
}

impl Univariate for Gamma {
    fn name(&self) -> &'static str {
        "Gamma"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.alpha, self.beta]
    }

    fn support(&self) -> (Real, Real) {
        (0.0, Real::INFINITY)
    }

    fn pdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return 0.0;
        }
        self.dist.pdf(x)
    }

    fn logpdf(&self, x: Real) -> Real {
        if x < 0.0 {
            return Real::NEG_INFINITY;
        }
        self.dist.ln_pdf(x)
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        self.dist.cdf(x)
    }

    fn ccdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 1.0;
        }
        self.dist.sf(x)
    }

    fn logcdf(&self, x: Real) -> Real {
        self.cdf(x).ln()
    }

    fn logccdf(&self, x: Real) -> Real {
        self.ccdf(x).ln()
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
        self.alpha / self.beta
    }

    fn mode(&self) -> Real {
        if self.alpha >= 1.0 {
            (self.alpha - 1.0) / self.beta
        } else {
            0.0
        }
    }

    fn var(&self) -> Real {
        self.alpha / (self.beta * self.beta)
    }

    fn skewness(&self) -> Real {
        2.0 / self.alpha.sqrt()
    }

    fn kurtosis(&self) -> Real {
        6.0 / self.alpha
    }

    fn entropy(&self) -> Real {
        self.alpha - self.beta.ln()
            + ln_gamma(self.alpha)
            + (1.0 - self.alpha) * digamma(self.alpha)
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        if x >= self.beta {
            return Ok(Real::INFINITY);
        }
        Ok((1.0 - x / self.beta).powf(-self.alpha))
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        Ok(Complex64::new(1.0, -x / self.beta).powf(-self.alpha))
    }
}
