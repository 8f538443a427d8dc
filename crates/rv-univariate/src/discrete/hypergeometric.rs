//! Hypergeometric distribution.

use rand::Rng;
use rv_core::{ensure, Error, Natural, Real, Result};

use crate::provider;
use crate::univariate::Univariate;

/// The hypergeometric distribution: successes in `draws` draws without
/// replacement from a population of size `population` containing
/// `successes` marked items.
#[derive(Debug, Clone)]
pub struct Hypergeometric {
    dist: statrs::distribution::Hypergeometric,
    population: Natural,
    successes: Natural,
    draws: Natural,
}

impl Hypergeometric {
    /// Create a hypergeometric distribution. Both `successes` and `draws`
    /// must not exceed `population`.
    pub fn new(population: Natural, successes: Natural, draws: Natural) -> Result<Self> {
        ensure!(
            successes <= population,
            "successes ({successes}) must not exceed the population ({population})"
        );
        ensure!(
            draws <= population,
            "draws ({draws}) must not exceed the population ({population})"
        );
        let dist = statrs::distribution::Hypergeometric::new(population, successes, draws)
            .map_err(|e| Error::Domain(e.to_string()))?;
        Ok(Self {
            dist,
            population,
            successes,
            draws,
        })
    }

    /// Population size `N`.
    pub fn population(&self) -> Natural {
        self.population
    }

    /// Number of marked items `K`.
    pub fn successes(&self) -> Natural {
        self.successes
    }

    /// Number of draws `n`.
    pub fn draws(&self) -> Natural {
        self.draws
    }

    fn lower(&self) -> Natural {
        (self.draws + self.successes).saturating_sub(self.population)
    }

    fn upper(&self) -> Natural {
        self.draws.min(self.successes)
    }
}

impl Univariate for Hypergeometric {
    fn name(&self) -> &'static str {
        "Hypergeometric"
    }

    fn params(&self) -> Vec<Real> {
        vec![
            self.population as Real,
            self.successes as Real,
            self.draws as Real,
        ]
    }

    fn support(&self) -> (Real, Real) {
        (self.lower() as Real, self.upper() as Real)
    }

    fn insupport(&self, x: Real) -> bool {
        x.is_finite()
            && x.fract() == 0.0
            && x >= self.lower() as Real
            && x <= self.upper() as Real
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
        provider::discrete_quantile(&self.dist, q, self.lower() as Real, self.upper() as Real)
    }

    fn cquantile(&self, q: Real) -> Result<Real> {
        provider::discrete_cquantile(&self.dist, q, self.lower() as Real, self.upper() as Real)
    }

    fn invlogcdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogcdf(&self.dist, lq, self.lower() as Real, self.upper() as Real)
    }

    fn invlogccdf(&self, lq: Real) -> Result<Real> {
        provider::discrete_invlogccdf(&self.dist, lq, self.lower() as Real, self.upper() as Real)
    }

    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        Ok(provider::fill(&self.dist, rng, n))
    }

    fn mean(&self) -> Real {
        let (big_n, k, n) = self.nkn();
        n * k / big_n
    }

    fn mode(&self) -> Real {
        let (big_n, k, n) = self.nkn();
        ((n + 1.0) * (k + 1.0) / (big_n + 2.0)).floor()
    }

    fn var(&self) -> Real {
        let (big_n, k, n) = self.nkn();
        n * (k / big_n) * ((big_n - k) / big_n) * ((big_n - n) / (big_n - 1.0))
    }

    fn skewness(&self) -> Real {
        let (big_n, k, n) = self.nkn();
        let num = (big_n - 2.0 * k) * (big_n - 1.0).sqrt() * (big_n - 2.0 * n);
        let den = (n * k * (big_n - k) * (big_n - n)).sqrt() * (big_n - 2.0);
        num / den
    }

    fn kurtosis(&self) -> Real {
        let (big_n, k, n) = self.nkn();
        let num = (big_n - 1.0)
            * big_n
            * big_n
            * (big_n * (big_n + 1.0) - 6.0 * k * (big_n - k) - 6.0 * n * (big_n - n))
            + 6.0 * n * k * (big_n - k) * (big_n - n) * (5.0 * big_n - 6.0);
        let den = n * k * (big_n - k) * (big_n - n) * (big_n - 2.0) * (big_n - 3.0);
        num / den
    }

    fn entropy(&self) -> Real {
        provider::discrete_entropy(&self.dist, self.lower(), Some(self.upper()))
    }
}

impl Hypergeometric {
    fn nkn(&self) -> (Real, Real, Real) {
        (
            self.population as Real,
            self.successes as Real,
            self.draws as Real,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MersenneTwisterRng;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Hypergeometric::new(10, 11, 5).is_err());
        assert!(Hypergeometric::new(10, 5, 11).is_err());
        assert!(Hypergeometric::new(10, 5, 5).is_ok());
    }

    #[test]
    fn urn_masses() {
        // 10 drawn from an urn of 50 with 5 marked
        let d = Hypergeometric::new(50, 5, 10).unwrap();
        // P(X = 1) = C(5,1)C(45,9)/C(50,10)
        assert!((d.pdf(1.0) - 0.43133).abs() < 1e-4);
        assert_eq!(d.pdf(0.5), 0.0);
        assert_eq!(d.pdf(6.0), 0.0);
        let total: Real = (0..=5).map(|k| d.pdf(k as Real)).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn support_is_truncated_both_ways() {
        // drawing 8 from 10 with 7 marked forces at least 5 marked draws
        let d = Hypergeometric::new(10, 7, 8).unwrap();
        assert_eq!(d.support(), (5.0, 7.0));
        assert!(!d.insupport(4.0));
        assert!(d.insupport(5.0));
        assert!(d.insupport(7.0));
        assert!(!d.insupport(8.0));
        assert_eq!(d.quantile(0.0).unwrap(), 5.0);
        assert_eq!(d.quantile(1.0).unwrap(), 7.0);
    }

    #[test]
    fn statistics() {
        let d = Hypergeometric::new(50, 5, 10).unwrap();
        assert!((d.mean() - 1.0).abs() < 1e-12);
        assert!((d.var() - 10.0 * 0.1 * 0.9 * (40.0 / 49.0)).abs() < 1e-12);
        assert_eq!(d.mode(), 1.0);
        // symmetric case: half the population marked, half drawn
        let s = Hypergeometric::new(10, 5, 5).unwrap();
        assert!(s.skewness().abs() < 1e-12);
        use statrs::statistics::Distribution;
        let provider = statrs::distribution::Hypergeometric::new(50, 5, 10).unwrap();
        if let Some(sk) = provider.skewness() {
            assert!((d.skewness() - sk).abs() < 1e-9);
        }
    }

    #[test]
    fn entropy_by_summation() {
        let d = Hypergeometric::new(20, 8, 6).unwrap();
        let mut expected = 0.0;
        for k in 0..=6 {
            let p = d.pdf(k as Real);
            if p > 0.0 {
                expected -= p * p.ln();
            }
        }
        assert!((d.entropy() - expected).abs() < 1e-12);
    }

    #[test]
    fn no_closed_form_transforms() {
        let d = Hypergeometric::new(50, 5, 10).unwrap();
        assert!(d.mgf(0.5).is_err());
        assert!(d.cf(0.5).is_err());
    }

    #[test]
    fn seeded_sampling() {
        let d = Hypergeometric::new(50, 5, 10).unwrap();
        let mut rng = MersenneTwisterRng::new(3);
        let xs = d.rand(&mut rng, 1000).unwrap();
        let mean = xs.iter().sum::<Real>() / 1000.0;
        assert!((mean - 1.0).abs() < 0.15, "sample mean {mean}");
        assert!(xs.iter().all(|&x| d.insupport(x)));
    }
}
