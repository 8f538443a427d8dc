//! Geometric distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};

use crate::provider;
use crate::univariate::Univariate;

/// The geometric distribution: the number of Bernoulli trials (counted
/// from one) up to and including the first success.
#[derive(Debug, Clone)]
pub struct Geometric {
    dist: statrs::distribution::Geometric,
    p: Real,
}

impl Geometric {
    /// Create a geometric distribution with success probability `p ∈ (0, 1]`.
    pub fn new(p: Real) -> Result<Self> {
        ensure!(
            p > 0.0 && p <= 1.0,
            "p must be in (0, 1], got {p}"
        );
        let dist = statrs::distribution::Geometric::new(p)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, p })
    }

    /// Success probability `p`.
    pub fn probability(&self) -> Real {
        self.p
    }
}

impl Univariate for Geometric {
    fn name(&self) -> &'static str {
        "Geometric"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.p]
    }

    fn support(&self) -> (Real, Real) {
        (1.0, Real::INFINITY)
    }

    fn insupport(&self, x: Real) -> bool {
        x.is_finite() && x.fract() == 0.0 && x >= 1.0
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
        // P(X > k) = (1−p)^k for integer k ≥ 0
        if x.is_nan() {
            Real::NAN
        } else if x < 1.0 {
            0.0
        } else {
            x.floor() * (1.0 - self.p).ln()
        }
    }

    fn quantile(&self, q: Real) -> Result<Real> {
        provider::discrete_quantile(&self.dist, q, 1.0, Real::INFINITY)
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        provider::discrete_cquantile(&self.dist, q, 1.0, Real::INFINITY)
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogcdf(&self.dist, lq, 1.0, Real::INFINITY)
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogccdf(&self.dist, lq, 1.0, Real::INFINITY)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        1.0 / self.p
    }

    fn mode(&self) -> Real {
        1.0
    }

    fn var(&self) -> Real {
        (1.0 - self.p) / (self.p * self.p)
    }

    fn skewness(&self) -> Real {
        if self.p == 1.0 {
            // degenerate point mass at one
            return Real::NAN;
        }
        (2.0 - self.p) / (1.0 - self.p).sqrt()
    }

    fn kurtosis(&self) -> Real {
        if self.p == 1.0 {
            return Real::NAN;
        }
        6.0 + self.p * self.p / (1.0 - self.p)
    }

    fn entropy(&self) -> Real {
        if self.p == 1.0 {
            return 0.0;
        }
        let q = 1.0 - self.p;
        (-q * q.ln() - self.p * self.p.ln()) / self.p
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        let q = 1.0 - self.p;
        if x >= -q.ln() {
            return Ok(Real::INFINITY);
        }
        Ok(self.p * x.exp() / (1.0 - q * x.exp()))
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        let e = Complex64::new(0.0, x).exp();
        Ok(self.p * e / (Complex64::new(1.0, 0.0) - (1.0 - self.p) * e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwisterRng;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Geometric::new(0.0).is_err());
        assert!(Geometric::new(1.5).is_err());
        assert!(Geometric::new(1.0).is_ok());
    }

    #[test]
    fn trials_counted_from_one() {
        let d = Geometric::new(0.25).unwrap();
        assert_eq!(d.pdf(0.0), 0.0);
        assert!((d.pdf(1.0) - 0.25).abs() < 1e-12);
        assert!((d.pdf(2.0) - 0.1875).abs() < 1e-12);
        assert!(!d.insupport(0.0));
        assert!(d.insupport(1.0));
        assert!(!d.insupport(1.5));
    }

    #[test]
    fn tail_is_geometric() {
        let d = Geometric::new(0.25).unwrap();
        // P(X > k) = 0.75^k
        for k in 1..6 {
            let expected = 0.75_f64.powi(k);
            assert!((d.ccdf(k as Real) - expected).abs() < 1e-12);
            assert!((d.logccdf(k as Real) - expected.ln()).abs() < 1e-12);
        }
        assert!((d.cdf(3.0) + d.ccdf(3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quantile_roundtrip() {
        let d = Geometric::new(0.2).unwrap();
        for q in [0.1, 0.5, 0.9, 0.99] {
            let k = d.quantile(q).unwrap();
            assert!(d.cdf(k) >= q);
            assert!(k == 1.0 || d.cdf(k - 1.0) < q);
        }
        assert_eq!(d.quantile(0.0).unwrap(), 1.0);
        assert_eq!(d.quantile(1.0).unwrap(), Real::INFINITY);
    }

    #[test]
    fn statistics() {
        let d = Geometric::new(0.25).unwrap();
        assert!((d.mean() - 4.0).abs() < 1e-12);
        assert!((d.var() - 12.0).abs() < 1e-12);
        assert_eq!(d.mode(), 1.0);
        assert!((d.skewness() - 1.75 / 0.75_f64.sqrt()).abs() < 1e-12);
        assert!((d.kurtosis() - (6.0 + 0.0625 / 0.75)).abs() < 1e-12);
        // closed form matches direct summation
        let direct = provider::discrete_entropy(&d.dist, 1, None);
        assert!((d.entropy() - direct).abs() < 1e-9);
        assert_eq!(Geometric::new(1.0).unwrap().entropy(), 0.0);
    }

    #[test]
    fn mgf_strip() {
        let d = Geometric::new(0.5).unwrap();
        assert!((d.mgf(0.0).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(d.mgf(1.0).unwrap(), Real::INFINITY);
    }

    #[test]
    fn seeded_sampling() {
        let d = Geometric::new(0.25).unwrap();
        let mut rng = MersenneTwisterRng::new(9);
        let xs = d.rand(&mut rng, 2000).unwrap();
        let mean = xs.iter().sum::<Real>() / 2000.0;
        assert!((mean - 4.0).abs() < 0.4, "sample mean {mean}");
        assert!(xs.iter().all(|&x| d.insupport(x)));
    }
}
