//! Beta distribution.

use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::beta::ln_beta;
use statrs::function::gamma::digamma;

use crate::provider;
use crate::univariate::Univariate;

/// The Beta distribution on `[0, 1]` with shape parameters `alpha` and `beta`.
///
/// No elementary closed form exists for its mgf/cf (both are confluent
/// hypergeometric functions), so those report `Unsupported`.
#[derive(Debug, Clone)]
pub struct Beta {
    dist: statrs::distribution::Beta,
    alpha: Real,
    beta: Real,
}

impl Beta {
    /// Create a Beta distribution with shapes `alpha > 0` and `beta > 0`.
    pub fn new(alpha: Real, beta: Real) -> Result<Self> {
        ensure!(
            alpha.is_finite() && alpha > 0.0,
            "alpha must be positive and finite, got {alpha}"
        );
        ensure!(
            beta.is_finite() && beta > 0.0,
            "beta must be positive and finite, got {beta}"
        );
        let dist = statrs::distribution::Beta::new(alpha, beta)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, alpha, beta })
    }

    /// First shape parameter α.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Second shape parameter β.
    pub fn beta(&self) -> Real {
        self.beta
    }
}

impl Univariate for Beta {
    fn name(&self) -> &'static str {
        "Beta"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.alpha, self.beta]
    }

    fn support(&self) -> (Real, Real) {
        (0.0, 1.0)
    }

    fn pdf(&self, x: Real) -> Real {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        self.dist.pdf(x)
    }

    fn logpdf(&self, x: Real) -> Real {
        if !(0.0..=1.0).contains(&x) {
            return Real::NEG_INFINITY;
        }
        self.dist.ln_pdf(x)
    }

    fn cdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            self.dist.cdf(x)
        }
    }

    fn ccdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            1.0
        } else if x >= 1.0 {
            0.0
        } else {
            self.dist.sf(x)
        }
    }

    fn logcdf(&self, x: Real) -> Real {
        self.cdf(x).ln()
    }

    fn logccdf(&self, x: Real) -> Real {
        self.ccdf(x).ln()
    }

    fn quantile(&self, q: Real) -> Result<Real> {
        provider::quantile_of(&self.dist, q, 0.0, 1.0)
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        provider::cquantile_of(&self.dist, q, 0.0, 1.0)
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        provider::invlogcdf_of(&self.dist, lq, 0.0, 1.0)
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        provider::invlogccdf_of(&self.dist, lq, 0.0, 1.0)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        self.alpha / (self.alpha + self.beta)
    }

    /// Interior mode for α, β > 1; boundary mode when exactly one shape is
    /// at most 1; `NaN` when the density is flat or bimodal.
    fn mode(&self) -> Real {
        let (a, b) = (self.alpha, self.beta);
        if a > 1.0 && b > 1.0 {
            (a - 1.0) / (a + b - 2.0)
        } else if a <= 1.0 && b > 1.0 {
            0.0
        } else if a > 1.0 && b <= 1.0 {
            1.0
        } else {
            Real::NAN
        }
    }

    fn var(&self) -> Real {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }

    fn skewness(&self) -> Real {
        let (a, b) = (self.alpha, self.beta);
        let s = a + b;
        2.0 * (b - a) * (s + 1.0).sqrt() / ((s + 2.0) * (a * b).sqrt())
    }

    fn kurtosis(&self) -> Real {
        let (a, b) = (self.alpha, self.beta);
        let s = a + b;
        6.0 * ((a - b) * (a - b) * (s + 1.0) - a * b * (s + 2.0))
            / (a * b * (s + 2.0) * (s + 3.0))
    }

    fn entropy(&self) -> Real {
        let (a, b) = (self.alpha, self.beta);
        ln_beta(a, b) - (a - 1.0) * digamma(a) - (b - 1.0) * digamma(b)
            + (a + b - 2.0) * digamma(a + b)
    }
}
