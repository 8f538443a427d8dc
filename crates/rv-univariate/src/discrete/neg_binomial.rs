//! Negative binomial distribution.

use num_complex::Complex64;
use rand::distributions::Distribution as Sampler;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};

use crate::provider;
use crate::univariate::Univariate;

/// The negative binomial distribution: the number of failures before the
/// `r`-th success in Bernoulli trials with success probability `p`.
///
/// `r` may be any positive real (the Pólya generalization).
#[derive(Debug, Clone)]
pub struct NegativeBinomial {
    dist: statrs::distribution::NegativeBinomial,
    r: Real,
    p: Real,
}

impl NegativeBinomial {
    /// Create a negative binomial distribution with `r > 0` target
    /// successes and success probability `p ∈ (0, 1]`.
    pub fn new(r: Real, p: Real) -> Result<Self> {
        ensure!(r.is_finite() && r > 0.0, "r must be positive, got {r}");
        ensure!(p > 0.0 && p <= 1.0, "p must be in (0, 1], got {p}");
        let dist = statrs::distribution::NegativeBinomial::new(r, p)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, r, p })
    }

    /// Target number of successes `r`.
    pub fn successes(&self) -> Real {
        self.r
    }

    /// Success probability `p`.
    pub fn probability(&self) -> Real {
        self.p
    }
}

impl Univariate for NegativeBinomial {
    fn name(&self) -> &'static str {
        "NegativeBinomial"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.r, self.p]
    }

    fn support(&self) -> (Real, Real) {
        (0.0, Real::INFINITY)
    }

    fn insupport(&self, x: Real) -> bool {
        x.is_finite() && x.fract() == 0.0 && x >= 0.0
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
        provider::discrete_quantile(&self.dist, q, 0.0, Real::INFINITY)
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        provider::discrete_cquantile(&self.dist, q, 0.0, Real::INFINITY)
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogcdf(&self.dist, lq, 0.0, Real::INFINITY)
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogccdf(&self.dist, lq, 0.0, Real::INFINITY)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        // the provider samples this family as counts, not reals
        Ok((0..n)
            .map(|_| {
                let k: u64 = Sampler::sample(&self.dist, rng);
                k as Real
            })
            .collect())
    }

    fn mean(&self) -> Real {
        self.r * (1.0 - self.p) / self.p
    }

    fn mode(&self) -> Real {
        if self.r > 1.0 {
            ((self.r - 1.0) * (1.0 - self.p) / self.p).floor()
        } else {
            0.0
        }
    }

    fn var(&self) -> Real {
        self.r * (1.0 - self.p) / (self.p * self.p)
    }

    fn skewness(&self) -> Real {
        (2.0 - self.p) / (self.r * (1.0 - self.p)).sqrt()
    }

    fn kurtosis(&self) -> Real {
        6.0 / self.r + self.p * self.p / (self.r * (1.0 - self.p))
    }

    fn entropy(&self) -> Real {
        provider::discrete_entropy(&self.dist, 0, None)
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        let q = 1.0 - self.p;
        if x >= -q.ln() {
            return Ok(Real::INFINITY);
        }
        Ok((self.p / (1.0 - q * x.exp())).powf(self.r))
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        let e = Complex64::new(0.0, x).exp();
        let base = self.p / (Complex64::new(1.0, 0.0) - (1.0 - self.p) * e);
        Ok(base.powf(self.r))
    }
}
