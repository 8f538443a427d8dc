//! Fisher–Snedecor F distribution.

use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::beta::ln_beta;
use statrs::function::gamma::digamma;

use crate::provider;
use crate::univariate::Univariate;

/// The F distribution with `d1` and `d2` degrees of freedom.
///
/// The mgf does not exist and the cf has no elementary closed form; both
/// report `Unsupported`. Moments exist only for large enough `d2` (mean
/// requires `d2 > 2`, variance `d2 > 4`, skewness `d2 > 6`, kurtosis
/// `d2 > 8`); divergent moments are `+∞`, nonexistent ones `NaN`.
#[derive(Debug, Clone)]
pub struct FisherF {
    dist: statrs::distribution::FisherSnedecor,
    d1: Real,
    d2: Real,
}

impl FisherF {
    /// Create an F distribution with `d1 > 0` and `d2 > 0` degrees of freedom.
    pub fn new(d1: Real, d2: Real) -> Result<Self> {
        ensure!(
            d1.is_finite() && d1 > 0.0,
            "d1 must be positive and finite, got {d1}"
        );
        ensure!(
            d2.is_finite() && d2 > 0.0,
            "d2 must be positive and finite, got {d2}"
        );
        let dist = statrs::distribution::FisherSnedecor::new(d1, d2)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, d1, d2 })
    }

    /// Numerator degrees of freedom.
    pub fn d1(&self) -> Real {
        self.d1
    }

    /// Denominator degrees of freedom.
    pub fn d2(&self) -> Real {
        self.d2
    }
}

impl Univariate for FisherF {
    fn name(&self) -> &'static str {
        "FisherF"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.d1, self.d2]
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
        if self.d2 > 2.0 {
            self.d2 / (self.d2 - 2.0)
        } else {
            Real::INFINITY
        }
    }

    fn mode(&self) -> Real {
        if self.d1 > 2.0 {
            (self.d1 - 2.0) / self.d1 * self.d2 / (self.d2 + 2.0)
        } else {
            0.0
        }
    }

    fn var(&self) -> Real {
        let (d1, d2) = (self.d1, self.d2);
        if d2 > 4.0 {
            2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0) * (d2 - 2.0) * (d2 - 4.0))
        } else if d2 > 2.0 {
            Real::INFINITY
        } else {
            Real::NAN
        }
    }

    fn skewness(&self) -> Real {
        let (d1, d2) = (self.d1, self.d2);
        if d2 > 6.0 {
            (2.0 * d1 + d2 - 2.0) * (8.0 * (d2 - 4.0)).sqrt()
                / ((d2 - 6.0) * (d1 * (d1 + d2 - 2.0)).sqrt())
        } else {
            Real::NAN
        }
    }

    fn kurtosis(&self) -> Real {
        let (d1, d2) = (self.d1, self.d2);
        if d2 > 8.0 {
            12.0 * (d1 * (5.0 * d2 - 22.0) * (d1 + d2 - 2.0)
                + (d2 - 4.0) * (d2 - 2.0) * (d2 - 2.0))
                / (d1 * (d2 - 6.0) * (d2 - 8.0) * (d1 + d2 - 2.0))
        } else {
            Real::NAN
        }
    }

    fn entropy(&self) -> Real {
        let a = 0.5 * self.d1;
        let b = 0.5 * self.d2;
        ln_beta(a, b) + (self.d2 / self.d1).ln() - (a - 1.0) * (digamma(a) - digamma(b))
            + (a + b) * (digamma(a + b) - digamma(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::statistics::Distribution as ProviderStats;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(FisherF::new(0.0, 1.0).is_err());
        assert!(FisherF::new(1.0, -1.0).is_err());
    }

    #[test]
    fn statistics_match_provider() {
        let d = FisherF::new(5.0, 10.0).unwrap();
        let p = statrs::distribution::FisherSnedecor::new(5.0, 10.0).unwrap();
        assert!((d.mean() - p.mean().unwrap()).abs() < 1e-12);
        assert!((d.var() - p.variance().unwrap()).abs() < 1e-12);
        assert!((d.mean() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn low_df_moments() {
        let d = FisherF::new(3.0, 2.0).unwrap();
        assert_eq!(d.mean(), Real::INFINITY);
        assert!(d.var().is_nan());
        assert!(d.skewness().is_nan());
        let d = FisherF::new(3.0, 3.0).unwrap();
        assert_eq!(d.var(), Real::INFINITY);
    }

    #[test]
    fn entropy_of_f22_is_two() {
        // F(2,2) has density 1/(1+x)², whose entropy is exactly 2
        let d = FisherF::new(2.0, 2.0).unwrap();
        assert!((d.entropy() - 2.0).abs() < 1e-9, "entropy = {}", d.entropy());
    }

    #[test]
    fn quantile_roundtrip() {
        let d = FisherF::new(5.0, 10.0).unwrap();
        for q in [0.1, 0.5, 0.9] {
            let x = d.quantile(q).unwrap();
            assert!(
                (d.cdf(x) - q).abs() < 1e-5,
                "roundtrip failed for q={q}: got {}",
                d.cdf(x)
            );
        }
    }

    #[test]
    fn mgf_unsupported() {
        let d = FisherF::new(2.0, 4.0).unwrap();
        assert!(matches!(d.mgf(0.1), Err(Error::Unsupported(_))));
        assert!(matches!(d.cf(0.1), Err(Error::Unsupported(_))));
    }
}
