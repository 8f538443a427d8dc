//! Binomial distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Natural, Real, Result};

use crate::provider;
use crate::univariate::Univariate;

/// The binomial distribution: successes in `n` independent trials, each
/// succeeding with probability `p`.
#[derive(Debug, Clone)]
pub struct Binomial {
    dist: statrs::distribution::Binomial,
    n: Natural,
    p: Real,
}

impl Binomial {
    /// Create a binomial distribution with `n` trials and success
    /// probability `p ∈ [0, 1]`.
    pub fn new(n: Natural, p: Real) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&p),
            "p must be in [0, 1], got {p}"
        );
        let dist = statrs::distribution::Binomial::new(p, n)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, n, p })
    }

    /// Number of trials `n`.
    pub fn trials(&self) -> Natural {
        self.n
    }

    /// Success probability `p`.
    pub fn probability(&self) -> Real {
        self.p
    }
}

impl Univariate for Binomial {
    fn name(&self) -> &'static str {
        "Binomial"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.n as Real, self.p]
    }

    fn support(&self) -> (Real, Real) {
        (0.0, self.n as Real)
    }

    fn insupport(&self, x: Real) -> bool {
        x.is_finite() && x.fract() == 0.0 && x >= 0.0 && x <= self.n as Real
    }

    fn pdf(&self, x: Real) -> Real {
        provider::discrete_pdf(&self.dist, x)
    }

    fn logpdf(&self, x: Real) -> Real {
        provider::discrete_logpdf(&self.dist, x)
    }

    fn cdf(&self, x: Real) -> Real {
        provider::discrete_cdf(&self.dist, x)
    }

    fn ccdf(&self, x: Real) -> Real {
        provider::discrete_ccdf(&self.dist, x)
    }

    fn logcdf(&self, x: Real) -> Real {
        self.cdf(x).ln()
    }

    fn logccdf(&self, x: Real) -> Real {
        self.ccdf(x).ln()
    }

    fn quantile(&self, q: Real) -> Result<Real> {
        provider::discrete_quantile(&self.dist, q, 0.0, self.n as Real)
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        provider::discrete_cquantile(&self.dist, q, 0.0, self.n as Real)
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogcdf(&self.dist, lq, 0.0, self.n as Real)
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogccdf(&self.dist, lq, 0.0, self.n as Real)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        self.n as Real * self.p
    }

    fn mode(&self) -> Real {
        let m = ((self.n as Real + 1.0) * self.p).floor();
        m.min(self.n as Real)
    }

    fn var(&self) -> Real {
        self.n as Real * self.p * (1.0 - self.p)
    }

    fn skewness(&self) -> Real {
        let v = self.var();
        if v == 0.0 {
            // degenerate point mass: the standardized moments do not exist
            return Real::NAN;
        }
        (1.0 - 2.0 * self.p) / v.sqrt()
    }

    fn kurtosis(&self) -> Real {
        let v = self.var();
        if v == 0.0 {
            return Real::NAN;
        }
        (1.0 - 6.0 * self.p * (1.0 - self.p)) / v
    }

    fn entropy(&self) -> Real {
        provider::discrete_entropy(&self.dist, 0, Some(self.n))
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        Ok((1.0 - self.p + self.p * x.exp()).powf(self.n as Real))
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        let e = Complex64::new(0.0, x).exp();
        Ok((Complex64::new(1.0 - self.p, 0.0) + self.p * e).powf(self.n as Real))
    }
}
