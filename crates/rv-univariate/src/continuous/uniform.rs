//! Continuous uniform distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF};

use crate::provider;
use crate::univariate::Univariate;

/// The continuous uniform distribution on `[a, b]`.
#[derive(Debug, Clone)]
pub struct Uniform {
    dist: statrs::distribution::Uniform,
    a: Real,
    b: Real,
}

impl Uniform {
    /// Create a uniform distribution on `[a, b]` with `a < b`.
    pub fn new(a: Real, b: Real) -> Result<Self> {
        ensure!(
            a.is_finite() && b.is_finite() && a < b,
            "bounds must be finite with a < b, got [{a}, {b}]"
        );
        let dist = statrs::distribution::Uniform::new(a, b)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, a, b })
    }

    /// Lower bound `a`.
    pub fn lower(&self) -> Real {
        self.a
    }

    /// Upper bound `b`.
    pub fn upper(&self) -> Real {
        self.b
    }
}

impl Univariate for Uniform {
    fn name(&self) -> &'static str {
        "Uniform"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.a, self.b]
    }

    fn support(&self) -> (Real, Real) {
        (self.a, self.b)
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
        provider::quantile_of(&self.dist, q, self.a, self.b)
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        provider::cquantile_of(&self.dist, q, self.a, self.b)
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        provider::invlogcdf_of(&self.dist, lq, self.a, self.b)
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        provider::invlogccdf_of(&self.dist, lq, self.a, self.b)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        0.5 * (self.a + self.b)
    }

    fn median(&self) -> Real {
        self.mean()
    }

    /// The density is flat; the midpoint is reported by convention.
    fn mode(&self) -> Real {
        self.mean()
    }

    fn var(&self) -> Real {
        let w = self.b - self.a;
        w * w / 12.0
    }

    fn skewness(&self) -> Real {
        0.0
    }

    fn kurtosis(&self) -> Real {
        -1.2
    }

    fn entropy(&self) -> Real {
        (self.b - self.a).ln()
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        if x == 0.0 {
            return Ok(1.0);
        }
        Ok(((x * self.b).exp() - (x * self.a).exp()) / (x * (self.b - self.a)))
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        if x == 0.0 {
            return Ok(Complex64::new(1.0, 0.0));
        }
        let num = Complex64::new(0.0, x * self.b).exp() - Complex64::new(0.0, x * self.a).exp();
        Ok(num / Complex64::new(0.0, x * (self.b - self.a)))
    }
}
