//! Cauchy distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};
use std::f64::consts::PI;

use crate::provider;
use crate::univariate::Univariate;

/// The Cauchy distribution with location `x0` and scale `gamma`.
///
/// No moments exist: mean, variance, skewness, and kurtosis are all `NaN`,
/// and there is no mgf. The cf does have a closed form.
#[derive(Debug, Clone)]
pub struct Cauchy {
    dist: statrs::distribution::Cauchy,
    x0: Real,
    gamma: Real,
}

impl Cauchy {
    /// Create a Cauchy distribution with location `x0` and scale `gamma > 0`.
    pub fn new(x0: Real, gamma: Real) -> Result<Self> {
        ensure!(x0.is_finite(), "x0 must be finite, got {x0}");
        ensure!(
            gamma.is_finite() && gamma > 0.0,
            "gamma must be positive and finite, got {gamma}"
        );
        let dist = statrs::distribution::Cauchy::new(x0, gamma)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, x0, gamma })
    }

    /// Location parameter.
    pub fn location(&self) -> Real {
        self.x0
    }

    /// Scale parameter.
    pub fn scale(&self) -> Real {
        self.gamma
    }
}

impl Univariate for Cauchy {
    fn name(&self) -> &'static str {
        "Cauchy"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.x0, self.gamma]
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
        Real::NAN
    }

    fn median(&self) -> Real {
        self.x0
    }

    fn mode(&self) -> Real {
        self.x0
    }

    fn var(&self) -> Real {
        Real::NAN
    }

    fn skewness(&self) -> Real {
        Real::NAN
    }

    fn kurtosis(&self) -> Real {
        Real::NAN
    }

    fn entropy(&self) -> Real {
        (4.0 * PI * self.gamma).ln()
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        Ok(Complex64::new(-self.gamma * x.abs(), self.x0 * x).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Cauchy::new(0.0, 0.0).is_err());
        assert!(Cauchy::new(0.0, -1.0).is_err());
    }

    #[test]
    fn standard_cauchy_kernels() {
        let d = Cauchy::new(0.0, 1.0).unwrap();
        assert!((d.pdf(0.0) - 1.0 / PI).abs() < 1e-12);
        assert!((d.cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((d.cdf(1.0) - 0.75).abs() < 1e-12);
        // quartiles at ±γ
        assert!((d.quantile(0.75).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_moments() {
        let d = Cauchy::new(3.0, 2.0).unwrap();
        assert!(d.mean().is_nan());
        assert!(d.var().is_nan());
        assert!(d.std().is_nan());
        assert!(d.skewness().is_nan());
        assert!(d.kurtosis().is_nan());
        assert_eq!(d.median(), 3.0);
        assert_eq!(d.mode(), 3.0);
    }

    #[test]
    fn entropy_closed_form() {
        let d = Cauchy::new(0.0, 2.0).unwrap();
        assert!((d.entropy() - (8.0 * PI).ln()).abs() < 1e-12);
    }

    #[test]
    fn cf_but_no_mgf() {
        let d = Cauchy::new(1.0, 0.5).unwrap();
        assert!(matches!(d.mgf(0.1), Err(Error::Unsupported(_))));
        let c = d.cf(2.0).unwrap();
        // |cf(t)| = exp(−γ|t|)
        assert!((c.norm() - (-1.0_f64).exp()).abs() < 1e-12);
    }
}
