//! Exponential distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use std::f64::consts::LN_2;

use crate::provider;
use crate::univariate::Univariate;

/// The exponential distribution with rate `lambda` (mean `1/lambda`).
#[derive(Debug, Clone)]
pub struct Exponential {
    dist: statrs::distribution::Exp,
    lambda: Real,
}

impl Exponential {
    /// Create an exponential distribution with rate `lambda > 0`.
    pub fn new(lambda: Real) -> Result<Self> {
        ensure!(
            lambda.is_finite() && lambda > 0.0,
            "rate must be positive and finite, got {lambda}"
        );
        let dist = statrs::distribution::Exp::new(lambda)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, lambda })
    }

    /// Rate parameter λ.
    pub fn rate(&self) -> Real {
        self.lambda
    }
}

impl Univariate for Exponential {
    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.lambda]
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
        // the upper tail is exactly exponential
        if x <= 0.0 {
            0.0
        } else {
            -self.lambda * x
        }
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
        // inverse of logccdf is linear in the log-probability
        provider::check_log_prob(lq)?;
        Ok(-lq / self.lambda)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        1.0 / self.lambda
    }

    fn median(&self) -> Real {
        LN_2 / self.lambda
    }

    fn mode(&self) -> Real {
        0.0
    }

    fn var(&self) -> Real {
        1.0 / (self.lambda * self.lambda)
    }

    fn skewness(&self) -> Real {
        2.0
    }

    fn kurtosis(&self) -> Real {
        6.0
    }

    fn entropy(&self) -> Real {
        1.0 - self.lambda.ln()
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        if x >= self.lambda {
            return Ok(Real::INFINITY);
        }
        Ok(self.lambda / (self.lambda - x))
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        Ok(Complex64::new(self.lambda, 0.0) / Complex64::new(self.lambda, -x))
    }
}
