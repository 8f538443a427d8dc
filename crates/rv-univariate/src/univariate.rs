//! The uniform evaluation contract implemented by every distribution family.

use num_complex::Complex64;
use rand::Rng;
use rv_core::{Error, Real, Result};

/// A parametrized univariate statistical law.
///
/// Implementors are immutable after construction; every method is a pure
/// function of the distribution's parameters and its explicit input.
/// Numerical kernels (`pdf`, `cdf`, `quantile`, sampling) delegate to the
/// statistical provider; derived statistics are closed-form functions of
/// the parameters alone.
///
/// Conventions for derived statistics: a moment that does not exist for a
/// family (e.g. the Cauchy mean) is `NaN`; a quantity that genuinely
/// diverges (e.g. a moment-generating function outside its strip of
/// convergence) is `+∞`. `kurtosis` is excess kurtosis, zero for the
/// normal family.
pub trait Univariate {
    /// Family name, used in error messages.
    fn name(&self) -> &'static str;

    /// Ordered parameter tuple, in the family's natural order.
    fn params(&self) -> Vec<Real>;

    /// Lower and upper bound of the support (±∞ where unbounded).
    fn support(&self) -> (Real, Real);

    /// Whether `x` lies within the support.
    ///
    /// Discrete families additionally require `x` to be an integer.
    fn insupport(&self, x: Real) -> bool {
        let (lo, hi) = self.support();
        x.is_finite() && x >= lo && x <= hi
    }

    // ── Kernel evaluation ─────────────────────────────────────────────────────

    /// Density (or mass) at `x`.
    fn pdf(&self, x: Real) -> Real;

    /// Natural log of the density at `x`, evaluated in log space by the
    /// provider rather than as `log(pdf(x))`.
    fn logpdf(&self, x: Real) -> Real;

    /// P(X ≤ x).
    fn cdf(&self, x: Real) -> Real;

    /// P(X > x), evaluated through the provider's upper tail rather than
    /// as `1 − cdf(x)`.
    fn ccdf(&self, x: Real) -> Real;

    /// Natural log of `cdf(x)`.
    fn logcdf(&self, x: Real) -> Real;

    /// Natural log of `ccdf(x)`.
    fn logccdf(&self, x: Real) -> Real;

    /// Inverse of `cdf` at probability `q ∈ [0, 1]`.
    ///
    /// `quantile(0)` and `quantile(1)` return the exact support bounds.
    /// A probability outside `[0, 1]` is an [`Error::Domain`]; a
    /// non-finite interior inversion is an [`Error::Numerical`].
    fn quantile(&self, q: Real) -> Result<Real>;

    /// Inverse of `ccdf` at probability `q ∈ [0, 1]`.
    fn cquantile(&self, q: Real) -> Result<Real>;

    /// Quantile taking an already-log-transformed probability `lq ≤ 0`.
    fn invlogcdf(&self, lq: Real) -> Result<Real>;

    /// Complementary quantile taking a log-probability `lq ≤ 0`.
    fn invlogccdf(&self, lq: Real) -> Result<Real>;

    /// Sum of `logpdf` over a sequence of observations.
    fn loglikelihood(&self, xs: &[Real]) -> Real {
        xs.iter().map(|&x| self.logpdf(x)).sum()
    }

    /// Draw `n` independent variates, one provider call per element.
    ///
    /// The default implementation reports the deliberate capability gap of
    /// families without a native sampler (the noncentral Beta/F/t
    /// convention); every family shipped here overrides it.
    fn rand<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Real>> {
        let _ = (rng, n);
        Err(Error::Unsupported(format!(
            "{}: no native sampler",
            self.name()
        )))
    }

    // ── Derived statistics ────────────────────────────────────────────────────

    /// Mean.
    fn mean(&self) -> Real;

    /// Median; exact closed form where one exists, otherwise `quantile(0.5)`.
    fn median(&self) -> Real {
        self.quantile(0.5).unwrap_or(Real::NAN)
    }

    /// Approximate closed-form median where a classical approximation
    /// exists (chi-squared, Poisson); defaults to the exact median.
    fn median_approx(&self) -> Real {
        self.median()
    }

    /// Mode.
    fn mode(&self) -> Real;

    /// Variance.
    fn var(&self) -> Real;

    /// Standard deviation.
    fn std(&self) -> Real {
        self.var().sqrt()
    }

    /// Skewness.
    fn skewness(&self) -> Real;

    /// Excess kurtosis (zero for the normal family).
    fn kurtosis(&self) -> Real;

    /// Negative excess kurtosis: flatter than the normal.
    fn isplatykurtic(&self) -> bool {
        self.kurtosis() < 0.0
    }

    /// Positive excess kurtosis: heavier-tailed than the normal.
    fn isleptokurtic(&self) -> bool {
        self.kurtosis() > 0.0
    }

    /// Excess kurtosis equal to zero.
    fn ismesokurtic(&self) -> bool {
        self.kurtosis() == 0.0
    }

    /// Differential (or Shannon) entropy in nats.
    fn entropy(&self) -> Real;

    /// Moment-generating function at `x`.
    ///
    /// `Err(Unsupported)` where no elementary closed form exists; `+∞`
    /// where the expectation diverges.
    fn mgf(&self, x: Real) -> Result<Real> {
        let _ = x;
        Err(Error::Unsupported(format!(
            "{}: no closed-form moment-generating function",
            self.name()
        )))
    }

    /// Characteristic function at `x`.
    ///
    /// `Err(Unsupported)` where no elementary closed form exists.
    fn cf(&self, x: Real) -> Result<Complex64> {
        let _ = x;
        Err(Error::Unsupported(format!(
            "{}: no closed-form characteristic function",
            self.name()
        )))
    }

    // ── Element-wise evaluation ───────────────────────────────────────────────
    //
    // Output length equals input length; results are identical to
    // sequential per-element evaluation.

    /// Element-wise [`pdf`](Self::pdf).
    fn pdf_many(&self, xs: &[Real]) -> Vec<Real> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    /// Element-wise [`logpdf`](Self::logpdf).
    fn logpdf_many(&self, xs: &[Real]) -> Vec<Real> {
        xs.iter().map(|&x| self.logpdf(x)).collect()
    }

    /// Element-wise [`cdf`](Self::cdf).
    fn cdf_many(&self, xs: &[Real]) -> Vec<Real> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// Element-wise [`ccdf`](Self::ccdf).
    fn ccdf_many(&self, xs: &[Real]) -> Vec<Real> {
        xs.iter().map(|&x| self.ccdf(x)).collect()
    }

    /// Element-wise [`logcdf`](Self::logcdf).
    fn logcdf_many(&self, xs: &[Real]) -> Vec<Real> {
        xs.iter().map(|&x| self.logcdf(x)).collect()
    }

    /// Element-wise [`logccdf`](Self::logccdf).
    fn logccdf_many(&self, xs: &[Real]) -> Vec<Real> {
        xs.iter().map(|&x| self.logccdf(x)).collect()
    }

    /// Element-wise [`quantile`](Self::quantile).
    fn quantile_many(&self, qs: &[Real]) -> Result<Vec<Real>> {
        qs.iter().map(|&q| self.quantile(q)).collect()
    }

    /// Element-wise [`cquantile`](Self::cquantile).
    fn cquantile_many(&self, qs: &[Real]) -> Result<Vec<Real>> {
        qs.iter().map(|&q| self.cquantile(q)).collect()
    }

    /// Element-wise [`invlogcdf`](Self::invlogcdf).
    fn invlogcdf_many(&self, lqs: &[Real]) -> Result<Vec<Real>> {
        lqs.iter().map(|&lq| self.invlogcdf(lq)).collect()
    }

    /// Element-wise [`invlogccdf`](Self::invlogccdf).
    fn invlogccdf_many(&self, lqs: &[Real]) -> Result<Vec<Real>> {
        lqs.iter().map(|&lq| self.invlogccdf(lq)).collect()
    }

    /// Element-wise [`mgf`](Self::mgf).
    fn mgf_many(&self, xs: &[Real]) -> Result<Vec<Real>> {
        xs.iter().map(|&x| self.mgf(x)).collect()
    }

    /// Element-wise [`cf`](Self::cf).
    fn cf_many(&self, xs: &[Real]) -> Result<Vec<Complex64>> {
        xs.iter().map(|&x| self.cf(x)).collect()
    }

    /// Element-wise [`insupport`](Self::insupport).
    fn insupport_many(&self, xs: &[Real]) -> Vec<bool> {
        xs.iter().map(|&x| self.insupport(x)).collect()
    }
}
