//! Log-normal distribution.

use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use std::f64::consts::PI;

use crate::provider;
use crate::univariate::Univariate;

/// The log-normal distribution: `exp(N(mu, sigma²))`.
///
/// The mgf diverges for any positive argument and has no closed form on
/// the negative axis; the cf likewise has no elementary closed form. Both
/// report `Unsupported`.
#[derive(Debug, Clone)]
pub struct LogNormal {
    dist: statrs::distribution::LogNormal,
    mu: Real,
    sigma: Real,
}

impl LogNormal {
    /// Create a log-normal distribution with log-scale location `mu` and
    /// log-scale standard deviation `sigma > 0`.
    pub fn new(mu: Real, sigma: Real) -> Result<Self> {
        ensure!(mu.is_finite(), "mu must be finite, got {mu}");
        ensure!(
            sigma.is_finite() && sigma > 0.0,
            "sigma must be positive and finite, got {sigma}"
        );
        let dist = statrs::distribution::LogNormal::new(mu, sigma)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, mu, sigma })
    }

    /// Log-scale location parameter μ.
    pub fn location(&self) -> Real {
        self.mu
    }

    /// Log-scale parameter σ.
    pub fn scale(&self) -> Real {
        self.sigma
    }
}

impl Univariate for LogNormal {
    fn name(&self) -> &'static str {
        "LogNormal"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.mu, self.sigma]
    }

    fn support(&self) -> (Real, Real) {
        (0.0, Real::INFINITY)
    }

    fn pdf(&self, x: Real) -> Real {
        if x <= 0.0 {
            return 0.0;
        }
        self.dist.pdf(x)
    }

    fn logpdf(&self, x: Real) -> Real {
        if x <= 0.0 {
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
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }

    fn median(&self) -> Real {
        self.mu.exp()
    }

    fn mode(&self) -> Real {
        (self.mu - self.sigma * self.sigma).exp()
    }

    fn var(&self) -> Real {
        let s2 = self.sigma * self.sigma;
        (s2.exp() - 1.0) * (2.0 * self.mu + s2).exp()
    }

    fn skewness(&self) -> Real {
        let e = (self.sigma * self.sigma).exp();
        (e + 2.0) * (e - 1.0).sqrt()
    }

    fn kurtosis(&self) -> Real {
        let s2 = self.sigma * self.sigma;
        (4.0 * s2).exp() + 2.0 * (3.0 * s2).exp() + 3.0 * (2.0 * s2).exp() - 6.0
    }

    fn entropy(&self) -> Real {
        self.mu + 0.5 + 0.5 * (2.0 * PI * self.sigma * self.sigma).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::statistics::Distribution as ProviderStats;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(LogNormal::new(0.0, 0.0).is_err());
        assert!(LogNormal::new(0.0, -1.0).is_err());
    }

    #[test]
    fn statistics_match_provider() {
        let d = LogNormal::new(0.5, 0.8).unwrap();
        let p = statrs::distribution::LogNormal::new(0.5, 0.8).unwrap();
        assert!((d.mean() - p.mean().unwrap()).abs() < 1e-10);
        assert!((d.var() - p.variance().unwrap()).abs() < 1e-10);
        assert!((d.entropy() - p.entropy().unwrap()).abs() < 1e-10);
        assert!((d.median() - 0.5_f64.exp()).abs() < 1e-12);
    }

    #[test]
    fn support_and_boundaries() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        assert_eq!(d.pdf(0.0), 0.0);
        assert_eq!(d.pdf(-1.0), 0.0);
        assert_eq!(d.cdf(0.0), 0.0);
        assert!((d.cdf(1.0) - 0.5).abs() < 1e-10);
        assert_eq!(d.quantile(0.0).unwrap(), 0.0);
        assert_eq!(d.quantile(1.0).unwrap(), Real::INFINITY);
    }

    #[test]
    fn mgf_unsupported() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        assert!(matches!(d.mgf(0.5), Err(Error::Unsupported(_))));
        assert!(matches!(d.cf(0.5), Err(Error::Unsupported(_))));
    }

    #[test]
    fn quantile_roundtrip() {
        let d = LogNormal::new(1.0, 0.5).unwrap();
        for q in [0.05, 0.5, 0.95] {
            let x = d.quantile(q).unwrap();
            assert!((d.cdf(x) - q).abs() < 1e-8);
        }
    }
}
