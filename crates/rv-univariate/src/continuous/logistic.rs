//! Logistic distribution.
//!
//! The provider has no logistic family, but every kernel is elementary,
//! so this module implements them directly: sigmoid cdf, log-space tails
//! via `ln_1p`, and inverse-transform sampling.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{ensure, Real, Result};
use std::f64::consts::PI;

use crate::provider;
use crate::univariate::Univariate;

/// The logistic distribution with location `mu` and scale `s`.
#[derive(Debug, Clone)]
pub struct Logistic {
    mu: Real,
    s: Real,
}

impl Logistic {
    /// Create a logistic distribution with location `mu` and scale `s > 0`.
    pub fn new(mu: Real, s: Real) -> Result<Self> {
        ensure!(mu.is_finite(), "mu must be finite, got {mu}");
        ensure!(
            s.is_finite() && s > 0.0,
            "s must be positive and finite, got {s}"
        );
        Ok(Self { mu, s })
    }

    /// Location parameter μ.
    pub fn location(&self) -> Real {
        self.mu
    }

    /// Scale parameter `s`.
    pub fn scale(&self) -> Real {
        self.s
    }

    fn z(&self, x: Real) -> Real {
        (x - self.mu) / self.s
    }
}

impl Univariate for Logistic {
    fn name(&self) -> &'static str {
        "Logistic"
    }

    fn params(&self) -> Vec<Real> {
        vec![self.mu, self.s]
    }

    fn support(&self) -> (Real, Real) {
        (Real::NEG_INFINITY, Real::INFINITY)
    }

    fn pdf(&self, x: Real) -> Real {
        // symmetric form avoids overflow for large |z|
        let e = (-self.z(x).abs()).exp();
        e / (self.s * (1.0 + e) * (1.0 + e))
    }

    fn logpdf(&self, x: Real) -> Real {
        let a = self.z(x).abs();
        -a - 2.0 * (-a).exp().ln_1p() - self.s.ln()
    }

    fn cdf(&self, x: Real) -> Real {
        1.0 / (1.0 + (-self.z(x)).exp())
    }

    fn ccdf(&self, x: Real) -> Real {
        1.0 / (1.0 + self.z(x).exp())
    }

    fn logcdf(&self, x: Real) -> Real {
        -(-self.z(x)).exp().ln_1p()
    }

    fn logccdf(&self, x: Real) -> Real {
        -self.z(x).exp().ln_1p()
    }

    fn quantile(&self, q: Real) -> Result<Real> {
        provider::check_prob(q)?;
        if q == 0.0 {
            return Ok(Real::NEG_INFINITY);
        }
        if q == 1.0 {
            return Ok(Real::INFINITY);
        }
        Ok(self.mu + self.s * (q / (1.0 - q)).ln())
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        provider::check_prob(q)?;
        if q == 0.0 {
            return Ok(Real::INFINITY);
        }
        if q == 1.0 {
            return Ok(Real::NEG_INFINITY);
        }
        Ok(self.mu + self.s * ((1.0 - q) / q).ln())
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        provider::check_log_prob(lq)?;
        // ln(q/(1−q)) = lq − ln(−expm1(lq)), stable for lq far below zero
        Ok(self.mu + self.s * (lq - (-lq.exp_m1()).ln()))
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        provider::check_log_prob(lq)?;
        Ok(self.mu - self.s * (lq - (-lq.exp_m1()).ln()))
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            // open-interval uniform for the inverse transform
            let u = loop {
                let u: Real = rng.gen();
                if u > 0.0 {
                    break u;
                }
            };
            out.push(self.mu + self.s * (u / (1.0 - u)).ln());
        }
        Ok(out)
    }

    fn mean(&self) -> Real {
        self.mu
    }

    fn median(&self) -> Real {
        self.mu
    }

    fn mode(&self) -> Real {
        self.mu
    }

    fn var(&self) -> Real {
        self.s * self.s * PI * PI / 3.0
    }

    fn skewness(&self) -> Real {
        0.0
    }

    fn kurtosis(&self) -> Real {
        1.2
    }

    fn entropy(&self) -> Real {
        self.s.ln() + 2.0
    }

    fn mgf(&self, x: Real) -> Result<Real> {
        if x == 0.0 {
            return Ok(1.0);
        }
        let sx = self.s * x;
        if sx.abs() >= 1.0 {
            return Ok(Real::INFINITY);
        }
        Ok((self.mu * x).exp() * PI * sx / (PI * sx).sin())
    }

    fn cf(&self, x: Real) -> Result<Complex64> {
        if x == 0.0 {
            return Ok(Complex64::new(1.0, 0.0));
        }
        let sx = PI * self.s * x;
        Ok(Complex64::new(0.0, self.mu * x).exp() * (sx / sx.sinh()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwisterRng;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Logistic::new(0.0, 0.0).is_err());
        assert!(Logistic::new(0.0, -2.0).is_err());
    }

    #[test]
    fn kernels_at_center() {
        let d = Logistic::new(1.0, 2.0).unwrap();
        assert!((d.cdf(1.0) - 0.5).abs() < 1e-12);
        assert!((d.pdf(1.0) - 1.0 / 8.0).abs() < 1e-12);
        assert!((d.quantile(0.5).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tails_are_stable() {
        let d = Logistic::new(0.0, 1.0).unwrap();
        assert!((d.cdf(800.0) - 1.0).abs() < 1e-12);
        assert_eq!(d.cdf(-800.0), 0.0);
        assert!(d.logcdf(-800.0).is_finite());
        assert!((d.logcdf(-800.0) + 800.0).abs() < 1e-9);
        assert!(d.pdf(-800.0) >= 0.0 && d.pdf(-800.0) < 1e-300);
        assert!(d.logpdf(-800.0).is_finite());
        assert!((d.cdf(3.0) + d.ccdf(3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quantile_inverses() {
        let d = Logistic::new(-1.0, 0.5).unwrap();
        for q in [0.01, 0.25, 0.5, 0.75, 0.99] {
            let x = d.quantile(q).unwrap();
            assert!((d.cdf(x) - q).abs() < 1e-12);
            let xc = d.cquantile(q).unwrap();
            assert!((d.ccdf(xc) - q).abs() < 1e-12);
        }
        let x = d.invlogcdf((0.2_f64).ln()).unwrap();
        assert!((d.cdf(x) - 0.2).abs() < 1e-12);
        // extreme log-probabilities stay finite and monotone
        let deep = d.invlogcdf(-5000.0).unwrap();
        assert!(deep < d.quantile(1e-12).unwrap());
    }

    #[test]
    fn statistics() {
        let d = Logistic::new(3.0, 2.0).unwrap();
        assert_eq!(d.mean(), 3.0);
        assert_eq!(d.median(), 3.0);
        assert_eq!(d.mode(), 3.0);
        assert!((d.var() - 4.0 * PI * PI / 3.0).abs() < 1e-12);
        assert_eq!(d.skewness(), 0.0);
        assert!(d.isleptokurtic());
        assert!((d.entropy() - (2.0_f64.ln() + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn mgf_strip_of_convergence() {
        let d = Logistic::new(0.0, 1.0).unwrap();
        assert_eq!(d.mgf(0.0).unwrap(), 1.0);
        // M(1/2) = π/2 / sin(π/2) = π/2
        assert!((d.mgf(0.5).unwrap() - PI / 2.0).abs() < 1e-12);
        assert_eq!(d.mgf(1.0).unwrap(), Real::INFINITY);
        assert_eq!(d.mgf(-2.0).unwrap(), Real::INFINITY);
    }

    #[test]
    fn sample_mean() {
        let d = Logistic::new(2.0, 1.0).unwrap();
        let mut rng = MersenneTwisterRng::new(11);
        let xs = d.rand(&mut rng, 2000).unwrap();
        let mean = xs.iter().sum::<Real>() / 2000.0;
        assert!((mean - 2.0).abs() < 0.25, "sample mean {mean}");
    }
}
