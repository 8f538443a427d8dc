//! Student's t distribution.

use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::beta::ln_beta;
use statrs::function::gamma::digamma;

use crate::provider;
use crate::univariate::Univariate;

/// Student's t distribution with `v` degrees of freedom.
///
/// The mgf does not exist; the cf involves Bessel functions and is not
/// provided in closed form. Moments exist only for large enough `v`.
#[derive(Debug, Clone)]
pub struct StudentT {
    dist: statrs::distribution::StudentsT,
    v: Real,
}

impl StudentT {
    /// Create a Student-t distribution with `v > 0` degrees of freedom.
    pub fn new(v: Real) -> Result<Self> {
        ensure!(
            v.is_finite() && v > 0.0,
            "degrees of freedom must be positive and finite, got {v}"
        );
        let dist = statrs::distribution::StudentsT::new(0.0, 1.0, v)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, v })
    }

    /// Shape parameter: the degrees of freedom `v`.
    pub fn shape(&self) -> Real {
        self.v
    }
}

impl Univariate for StudentT {
    fn name(&self) -> &'static str {
        "StudentT"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.v]
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
        if self.v > 1.0 {
            0.0
        } else {
            Real::NAN
        }
    }

    fn median(&self) -> Real {
        0.0
    }

    fn mode(&self) -> Real {
        0.0
    }

    fn var(&self) -> Real {
        if self.v > 2.0 {
            self.v / (self.v - 2.0)
        } else if self.v > 1.0 {
            Real::INFINITY
        } else {
            Real::NAN
        }
    }

    fn skewness(&self) -> Real {
        if self.v > 3.0 {
            0.0
        } else {
            Real::NAN
        }
    }

    fn kurtosis(&self) -> Real {
        if self.v > 4.0 {
            6.0 / (self.v - 4.0)
        } else if self.v > 2.0 {
            Real::INFINITY
        } else {
            Real::NAN
        }
    }

    fn entropy(&self) -> Real {
        let hv = 0.5 * self.v;
        (hv + 0.5) * (digamma(hv + 0.5) - digamma(hv))
            + 0.5 * self.v.ln()
            + ln_beta(hv, 0.5)
    }
}
