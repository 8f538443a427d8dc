//! Chi-squared distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use statrs::function::gamma::{digamma, ln_gamma};
use std::f64::consts::LN_2;

use crate::provider;
use crate::univariate::Univariate;

/// The Chi-squared distribution with `v` degrees of freedom.
#[derive(Debug, Clone)]
pub struct ChiSquared {
    dist: statrs::distribution::ChiSquared,
    v: Real,
}

impl ChiSquared {
    /// Create a Chi-squared distribution with `v > 0` degrees of freedom.
    pub fn new(v: Real) -> Result<Self> {
        ensure!(
            v.is_finite() && v > 0.0,
            "degrees of freedom must be positive and finite, got {v}"
        );
        let dist = statrs::distribution::ChiSquared::new(v)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, v })
    }

    /// Shape parameter: the degrees of freedom `v`.
    pub fn shape(&self) -> Real {
        self.v
    }
}

impl Univariate for ChiSquared {
    fn name(&self) -> &'static str {
        "ChiSquared"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.v]
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
        self.v
    }

    /// Classical approximation `v (1 − 2/(9v))³`, clamped at the support
    /// lower bound (the raw cube goes negative below `v = 2/9`).
    fn median_approx(&self) -> Real {
        (self.v * (1.0 - 2.0 / (9.0 * self.v)).powi(3)).max(0.0)
    }

    fn mode(&self) -> Real {
        (self.v - 2.0).max(0.0)
    }

    fn var(&self) -> Real {
        2.0 * self.v
    }

    fn skewness(&self) -> Real {
        (8.0 / self.v).sqrt()
    }

    fn kurtosis(&self) -> Real {
        12.0 / self.v
    }

    fn entropy(&self) -> Real {
        let hv = 0.5 * self.v;
        hv + LN_2 + ln_gamma(hv) + (1.0 - hv) * digamma(hv)
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        if x >= 0.5 {
            return Ok(Real::INFINITY);
        }
        Ok((1.0 - 2.0 * x).powf(-0.5 * self.v))
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        Ok(Complex64::new(1.0, -2.0 * x).powf(-0.5 * self.v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwisterRng;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(-2.0).is_err());
        assert!(ChiSquared::new(Real::NAN).is_err());
    }

    #[test]
    fn statistics() {
        let d = ChiSquared::new(4.0).unwrap();
        assert_eq!(d.mean(), 4.0);
        assert_eq!(d.var(), 8.0);
        assert_eq!(d.mode(), 2.0);
        assert_eq!(d.std(), 8.0_f64.sqrt());
        assert!((d.skewness() - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(d.kurtosis(), 3.0);
        assert!(d.isleptokurtic());
        // small df keeps the mode at the boundary
        assert_eq!(ChiSquared::new(1.0).unwrap().mode(), 0.0);
    }

    #[test]
    fn entropy_closed_form() {
        // v = 4: 2 + ln 2 + ln Γ(2) + (1 − 2) ψ(2), ψ(2) = 1 − γ
        let d = ChiSquared::new(4.0).unwrap();
        let euler = 0.577_215_664_901_532_9;
        let expected = 2.0 + LN_2 - (1.0 - euler);
        assert!(
            (d.entropy() - expected).abs() < 1e-10,
            "entropy = {}, expected {expected}",
            d.entropy()
        );
    }

    #[test]
    fn exponential_special_case() {
        // Chi-squared with v = 2 is Exponential(1/2)
        let d = ChiSquared::new(2.0).unwrap();
        let x: Real = 4.0;
        assert!((d.cdf(x) - (1.0 - (-x / 2.0).exp())).abs() < 1e-10);
        assert!((d.pdf(3.0) - 0.5 * (-1.5_f64).exp()).abs() < 1e-10);
        assert!((d.ccdf(x) - (-x / 2.0).exp()).abs() < 1e-10);
    }

    #[test]
    fn support_membership() {
        let d = ChiSquared::new(3.0).unwrap();
        assert!(!d.insupport(-1.0));
        assert!(d.insupport(0.0));
        assert!(d.insupport(10.0));
        assert!(!d.insupport(Real::INFINITY));
        assert_eq!(d.pdf(-1.0), 0.0);
        assert_eq!(d.logpdf(-1.0), Real::NEG_INFINITY);
        assert_eq!(d.cdf(-1.0), 0.0);
    }

    #[test]
    fn quantile_roundtrip_and_bounds() {
        let d = ChiSquared::new(5.0).unwrap();
        assert_eq!(d.quantile(0.0).unwrap(), 0.0);
        assert_eq!(d.quantile(1.0).unwrap(), Real::INFINITY);
        for q in [0.05, 0.25, 0.5, 0.75, 0.95] {
            let x = d.quantile(q).unwrap();
            assert!(
                (d.cdf(x) - q).abs() < 1e-6,
                "roundtrip failed for q={q}: got {}",
                d.cdf(x)
            );
        }
        // an underflowing log-probability must not collapse to quantile(0)
        assert!(d.invlogcdf(-800.0).is_err());
        assert_eq!(d.invlogcdf(Real::NEG_INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn median_exact_vs_approximate() {
        let d = ChiSquared::new(4.0).unwrap();
        let exact = d.median();
        let approx = d.median_approx();
        // v (1 − 2/(9v))³ is good to a few per mil at moderate df
        assert!(
            (exact - approx).abs() / exact < 0.01,
            "exact {exact} vs approx {approx}"
        );
        // below v = 2/9 the raw cube is negative; the clamp keeps the
        // approximation inside the support
        let tiny = ChiSquared::new(0.1).unwrap();
        assert_eq!(tiny.median_approx(), 0.0);
    }

    #[test]
    fn mgf_and_cf() {
        let d = ChiSquared::new(2.0).unwrap();
        // (1 − 2·0.25)^{-1} = 2
        assert!((d.mgf(0.25).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(d.mgf(0.5).unwrap(), Real::INFINITY);
        assert_eq!(d.mgf(1.0).unwrap(), Real::INFINITY);
        // cf(0) = 1
        let c = d.cf(0.0).unwrap();
        assert!((c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12);
    }

    #[test]
    fn sample_mean_close_to_df() {
        let d = ChiSquared::new(4.0).unwrap();
        let mut rng = MersenneTwisterRng::new(99);
        let xs = d.rand(&mut rng, 2000).unwrap();
        let mean = xs.iter().sum::<Real>() / 2000.0;
        assert!((mean - 4.0).abs() < 0.4, "sample mean {mean}");
        assert!(xs.iter().all(|&x| x >= 0.0));
    }
}
