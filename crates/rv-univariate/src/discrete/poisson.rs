//! Poisson distribution.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Error, Real, Result};

use crate::provider;
use crate::univariate::Univariate;

/// The Poisson distribution with rate `lambda`.
#[derive(Debug, Clone)]
pub struct Poisson {
    dist: statrs::distribution::Poisson,
    lambda: Real,
}

impl Poisson {
    /// Create a Poisson distribution with rate `lambda > 0`.
    pub fn new(lambda: Real) -> Result<Self> {
        ensure!(
            lambda.is_finite() && lambda > 0.0,
            "lambda must be positive and finite, got {lambda}"
        );
        let dist = statrs::distribution::Poisson::new(lambda)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self { dist, lambda })
    }

    /// Rate parameter λ.
    pub fn rate(&self) -> Real {
        self.lambda
    }
}

impl Univariate for Poisson {
    fn name(&self) -> &'static str {
        "Poisson"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.lambda]
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
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        self.lambda
    }

    /// Classical closed-form approximation `⌊λ + 1/3 − 0.02/λ⌋`, clamped
    /// at zero (the correction term dominates for very small rates).
    fn median_approx(&self) -> Real {
        (self.lambda + 1.0 / 3.0 - 0.02 / self.lambda).floor().max(0.0)
    }

    fn mode(&self) -> Real {
        self.lambda.floor()
    }

    fn var(&self) -> Real {
        self.lambda
    }

    fn skewness(&self) -> Real {
        1.0 / self.lambda.sqrt()
    }

    fn kurtosis(&self) -> Real {
        1.0 / self.lambda
    }

    fn entropy(&self) -> Real {
        provider::discrete_entropy(&self.dist, 0, None)
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        Ok((self.lambda * x.exp_m1()).exp())
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        let e = Complex64::new(0.0, x).exp() - 1.0;
        Ok((self.lambda * e).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwisterRng;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-2.0).is_err());
        assert!(Poisson::new(Real::INFINITY).is_err());
    }

    #[test]
    fn masses() {
        let d = Poisson::new(2.0).unwrap();
        // P(X = 0) = e^{−λ}
        assert!((d.pdf(0.0) - (-2.0_f64).exp()).abs() < 1e-12);
        assert!((d.pdf(2.0) - 2.0 * (-2.0_f64).exp()).abs() < 1e-12);
        assert_eq!(d.pdf(1.5), 0.0);
        assert_eq!(d.pdf(-1.0), 0.0);
        assert!((d.logpdf(2.0) - d.pdf(2.0).ln()).abs() < 1e-12);
        assert!((d.cdf(3.0) + d.ccdf(3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quantile_roundtrip() {
        let d = Poisson::new(6.5).unwrap();
        for q in [0.01, 0.3, 0.5, 0.9, 0.999] {
            let k = d.quantile(q).unwrap();
            assert!(d.cdf(k) >= q);
            assert!(k == 0.0 || d.cdf(k - 1.0) < q);
        }
        assert_eq!(d.quantile(0.0).unwrap(), 0.0);
        assert_eq!(d.quantile(1.0).unwrap(), Real::INFINITY);
    }

    #[test]
    fn median_approximation_tracks_exact() {
        for lambda in [1.0, 2.5, 4.0, 10.0, 50.0] {
            let d = Poisson::new(lambda).unwrap();
            let exact = d.median();
            let approx = d.median_approx();
            assert!(
                (exact - approx).abs() <= 1.0,
                "lambda {lambda}: exact {exact}, approx {approx}"
            );
        }
        // tiny rates: the raw formula goes negative, the result must not
        let d = Poisson::new(0.01).unwrap();
        assert_eq!(d.median_approx(), 0.0);
    }

    #[test]
    fn statistics() {
        let d = Poisson::new(4.0).unwrap();
        assert_eq!(d.mean(), 4.0);
        assert_eq!(d.var(), 4.0);
        assert_eq!(d.mode(), 4.0);
        assert!((d.skewness() - 0.5).abs() < 1e-12);
        assert!((d.kurtosis() - 0.25).abs() < 1e-12);
        use statrs::statistics::Distribution;
        let provider = statrs::distribution::Poisson::new(4.0).unwrap();
        if let Some(h) = provider.entropy() {
            // provider uses an asymptotic series; direct summation is close
            assert!((d.entropy() - h).abs() < 1e-2);
        }
    }

    #[test]
    fn transforms() {
        let d = Poisson::new(3.0).unwrap();
        assert!((d.mgf(0.0).unwrap() - 1.0).abs() < 1e-12);
        let expected = (3.0 * 0.5_f64.exp_m1()).exp();
        assert!((d.mgf(0.5).unwrap() - expected).abs() < 1e-12);
        let c = d.cf(0.0).unwrap();
        assert!((c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12);
    }

    #[test]
    fn seeded_sampling() {
        let d = Poisson::new(5.0).unwrap();
        let mut rng = MersenneTwisterRng::new(1234);
        let xs = d.rand(&mut rng, 2000).unwrap();
        let mean = xs.iter().sum::<Real>() / 2000.0;
        assert!((mean - 5.0).abs() < 0.25, "sample mean {mean}");
        assert!(xs.iter().all(|&x| d.insupport(x)));
    }
}
