//! Weibull distribution.

use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::gamma::gamma;
use std::f64::consts::LN_2;

use crate::provider;
use crate::univariate::Univariate;

const EULER_MASCHERONI: Real = 0.577_215_664_901_532_9;

/// The Weibull distribution with shape `k` and scale `lambda`.
///
/// The mgf/cf have no elementary closed form for general shape and report
/// `Unsupported`. Higher moments are assembled from the raw moments
/// `E[Xⁿ] = λⁿ Γ(1 + n/k)`.
#[derive(Debug, Clone)]
pub struct Weibull {
    dist: statrs::distribution::Weibull,
    k: Real,
    lambda: Real,
}

impl Weibull {
    /// Create a Weibull distribution with shape `k > 0` and scale `lambda > 0`.
    pub fn new(k: Real, lambda: Real) -> Result<Self> {
        ensure!(
            k.is_finite() && k > 0.0,
            "shape must be positive and finite, got {k}"
        );
        ensure!(
            lambda.is_finite() && lambda > 0.0,
            "scale must be positive and finite, got {lambda}"
        );
        let dist = statrs::distribution::Weibull::new(k, lambda)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, k, lambda })
    }

    /// Shape parameter `k`.
    pub fn shape(&self) -> Real {
        self.k
    }

    /// Scale parameter λ.
    pub fn scale(&self) -> Real {
        self.lambda
    }

    /// Raw moment `E[Xⁿ] = λⁿ Γ(1 + n/k)`.
    fn raw_moment(&self, n: i32) -> Real {
        self.lambda.powi(n) * gamma(1.0 + n as Real / self.k)
    }
}

impl Univariate for Weibull {
    fn name(&self) -> &'static str {
        "Weibull"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.k, self.lambda]
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
        // the upper tail is exactly exp(−(x/λ)^k)
        if x <= 0.0 {
            0.0
        } else {
            -(x / self.lambda).powf(self.k)
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
        // invert the exact log tail
        provider::check_log_prob(lq)?;
        Ok(self.lambda * (-lq).powf(1.0 / self.k))
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        self.raw_moment(1)
    }

    fn median(&self) -> Real {
        self.lambda * LN_2.powf(1.0 / self.k)
    }

    fn mode(&self) -> Real {
        if self.k > 1.0 {
            self.lambda * ((self.k - 1.0) / self.k).powf(1.0 / self.k)
        } else {
            0.0
        }
    }

    fn var(&self) -> Real {
        let m1 = self.raw_moment(1);
        self.raw_moment(2) - m1 * m1
    }

    fn skewness(&self) -> Real {
        let m1 = self.raw_moment(1);
        let m2 = self.raw_moment(2);
        let m3 = self.raw_moment(3);
        let mu3 = m3 - 3.0 * m1 * m2 + 2.0 * m1.powi(3);
        mu3 / self.var().powf(1.5)
    }

    fn kurtosis(&self) -> Real {
        let m1 = self.raw_moment(1);
        let m2 = self.raw_moment(2);
        let m3 = self.raw_moment(3);
        let m4 = self.raw_moment(4);
        let mu4 = m4 - 4.0 * m1 * m3 + 6.0 * m1 * m1 * m2 - 3.0 * m1.powi(4);
        let v = self.var();
        mu4 / (v * v) - 3.0
    }

    fn entropy(&self) -> Real {
        EULER_MASCHERONI * (1.0 - 1.0 / self.k) + (self.lambda / self.k).ln() + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::statistics::Distribution as ProviderStats;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Weibull::new(0.0, 1.0).is_err());
        assert!(Weibull::new(1.0, 0.0).is_err());
    }

    #[test]
    fn exponential_special_case() {
        // Weibull with k = 1 is Exponential(1/λ)
        let d = Weibull::new(1.0, 2.0).unwrap();
        assert!((d.mean() - 2.0).abs() < 1e-10);
        assert!((d.var() - 4.0).abs() < 1e-9);
        assert!((d.skewness() - 2.0).abs() < 1e-7);
        assert!((d.kurtosis() - 6.0).abs() < 1e-6);
        assert!((d.cdf(2.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
        // entropy of Exponential(1/2) is 1 + ln 2
        assert!((d.entropy() - (1.0 + LN_2)).abs() < 1e-12);
    }

    #[test]
    fn statistics_match_provider() {
        let d = Weibull::new(2.0, 3.0).unwrap();
        let p = statrs::distribution::Weibull::new(2.0, 3.0).unwrap();
        assert!((d.mean() - p.mean().unwrap()).abs() < 1e-10);
        assert!((d.var() - p.variance().unwrap()).abs() < 1e-10);
    }

    #[test]
    fn tail_and_quantiles() {
        let d = Weibull::new(2.0, 3.0).unwrap();
        assert!((d.logccdf(6.0) + 4.0).abs() < 1e-12);
        assert!((d.invlogccdf(-4.0).unwrap() - 6.0).abs() < 1e-9);
        assert!((d.median() - 3.0 * LN_2.sqrt()).abs() < 1e-12);
        for q in [0.1, 0.5, 0.9] {
            let x = d.quantile(q).unwrap();
            assert!((d.cdf(x) - q).abs() < 1e-8);
        }
    }

    #[test]
    fn mode_threshold() {
        assert_eq!(Weibull::new(1.0, 5.0).unwrap().mode(), 0.0);
        let d = Weibull::new(2.0, 1.0).unwrap();
        assert!((d.mode() - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn mgf_unsupported() {
        let d = Weibull::new(1.5, 1.0).unwrap();
        assert!(matches!(d.mgf(0.1), Err(Error::Unsupported(_))));
        assert!(matches!(d.cf(0.1), Err(Error::Unsupported(_))));
    }
}
