//! Adapter shim over the `statrs` statistical provider.
//!
//! This is the Rust rendering of the classic `{d, p, q, r}` kernel
//! quadruple: density and distribution evaluation with log and tail
//! selection, checked quantile inversion with exact short-circuits at the
//! support bounds, and the per-element draw loop. Families call through
//! here so that probability validation, boundary handling, and error
//! promotion live in one place.
//!
//! The provider exposes no upper-tail or log-mode quantile entry point, so
//! `cquantile` inverts at `1 − q` and the `invlog*` functions exponentiate
//! first; the bounds are short-circuited exactly before either transform.
//! A finite log-probability whose exponential underflows to zero cannot be
//! inverted on the plain probability scale and is reported as a numerical
//! error, never folded into the `lq = −∞` bound.

use rand::distributions::Distribution as Sampler;
use rand::Rng;
use rv_core::{ensure, fail, Real, Result};
use statrs::distribution::{Discrete, DiscreteCDF};
use statrs::distribution::ContinuousCDF;

/// Validate a probability argument.
pub(crate) fn check_prob(q: Real) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&q),
        "probability must be in [0, 1], got {q}"
    );
    Ok(())
}

/// Validate a log-probability argument.
pub(crate) fn check_log_prob(lq: Real) -> Result<()> {
    ensure!(!lq.is_nan() && lq <= 0.0, "log-probability must be <= 0, got {lq}");
    Ok(())
}

// ── Continuous quantile inversion ─────────────────────────────────────────────

/// Lower-tail quantile with support bounds `(lo, hi)`.
pub(crate) fn quantile_of<D>(dist: &D, q: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: ContinuousCDF<Real, Real>,
{
    check_prob(q)?;
    if q == 0.0 {
        return Ok(lo);
    }
    if q == 1.0 {
        return Ok(hi);
    }
    let x = dist.inverse_cdf(q);
    if !x.is_finite() {
        fail!("quantile inversion did not converge at q = {q}");
    }
    Ok(x)
}

/// Upper-tail quantile: inverse of the complementary cdf.
pub(crate) fn cquantile_of<D>(dist: &D, q: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: ContinuousCDF<Real, Real>,
{
    check_prob(q)?;
    if q == 0.0 {
        return Ok(hi);
    }
    if q == 1.0 {
        return Ok(lo);
    }
    let x = dist.inverse_cdf(1.0 - q);
    if !x.is_finite() {
        fail!("complementary quantile inversion did not converge at q = {q}");
    }
    Ok(x)
}

/// Exponentiate a validated log-probability, rejecting finite values whose
/// probability underflows to zero (they are not the `lq = −∞` bound).
fn prob_from_log(lq: Real) -> Result<Real> {
    check_log_prob(lq)?;
    let q = lq.exp();
    if lq != Real::NEG_INFINITY && q == 0.0 {
        fail!("log-probability {lq} underflows the probability scale");
    }
    Ok(q)
}

/// Lower-tail quantile of a log-probability.
pub(crate) fn invlogcdf_of<D>(dist: &D, lq: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: ContinuousCDF<Real, Real>,
{
    quantile_of(dist, prob_from_log(lq)?, lo, hi)
}

/// Upper-tail quantile of a log-probability.
pub(crate) fn invlogccdf_of<D>(dist: &D, lq: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: ContinuousCDF<Real, Real>,
{
    cquantile_of(dist, prob_from_log(lq)?, lo, hi)
}

// ── Discrete kernels over real-valued arguments ───────────────────────────────
//
// Rmath conventions: the mass at a non-integer or negative point is zero,
// and the cdf evaluates at ⌊x⌋.

/// Mass at a real-valued point.
pub(crate) fn discrete_pdf<D>(dist: &D, x: Real) -> Real
where
    D: Discrete<u64, Real>,
{
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        0.0
    } else {
        dist.pmf(x as u64)
    }
}

/// Log-mass at a real-valued point.
pub(crate) fn discrete_logpdf<D>(dist: &D, x: Real) -> Real
where
    D: Discrete<u64, Real>,
{
    if x.is_nan() {
        Real::NAN
    } else if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        Real::NEG_INFINITY
    } else {
        dist.ln_pmf(x as u64)
    }
}

/// Lower-tail cdf at a real-valued point.
pub(crate) fn discrete_cdf<D>(dist: &D, x: Real) -> Real
where
    D: DiscreteCDF<u64, Real>,
{
    if x.is_nan() {
        Real::NAN
    } else if x < 0.0 {
        0.0
    } else if x == Real::INFINITY {
        1.0
    } else {
        dist.cdf(x.floor() as u64)
    }
}

/// Upper-tail cdf at a real-valued point.
pub(crate) fn discrete_ccdf<D>(dist: &D, x: Real) -> Real
where
    D: DiscreteCDF<u64, Real>,
{
    if x.is_nan() {
        Real::NAN
    } else if x < 0.0 {
        1.0
    } else if x == Real::INFINITY {
        0.0
    } else {
        dist.sf(x.floor() as u64)
    }
}

/// Lower-tail discrete quantile: the smallest support point `k` with `cdf(k) ≥ q`.
pub(crate) fn discrete_quantile<D>(dist: &D, q: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: DiscreteCDF<u64, Real>,
{
    check_prob(q)?;
    if q == 0.0 {
        return Ok(lo);
    }
    if q == 1.0 {
        return Ok(hi);
    }
    Ok(dist.inverse_cdf(q) as Real)
}

/// Upper-tail discrete quantile.
pub(crate) fn discrete_cquantile<D>(dist: &D, q: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: DiscreteCDF<u64, Real>,
{
    check_prob(q)?;
    if q == 0.0 {
        return Ok(hi);
    }
    if q == 1.0 {
        return Ok(lo);
    }
    Ok(dist.inverse_cdf(1.0 - q) as Real)
}

/// Discrete quantile of a log-probability.
pub(crate) fn discrete_invlogcdf<D>(dist: &D, lq: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: DiscreteCDF<u64, Real>,
{
    discrete_quantile(dist, prob_from_log(lq)?, lo, hi)
}

/// Discrete complementary quantile of a log-probability.
pub(crate) fn discrete_invlogccdf<D>(dist: &D, lq: Real, lo: Real, hi: Real) -> Result<Real>
where
    D: DiscreteCDF<u64, Real>,
{
    discrete_cquantile(dist, prob_from_log(lq)?, lo, hi)
}

// ── Sampling and summation helpers ────────────────────────────────────────────

/// `n` independent single draws through the provider's sampler.
pub(crate) fn fill<D, R>(dist: &D, rng: &mut R, n: usize) -> Vec<Real>
where
    D: Sampler<Real>,
    R: Rng + ?Sized,
{
    (0..n).map(|_| dist.sample(rng)).collect()
}

/// Shannon entropy by pmf summation, from `lo` to `hi` (or until the
/// accumulated mass is within rounding of one when the support is
/// unbounded above).
pub(crate) fn discrete_entropy<D>(dist: &D, lo: u64, hi: Option<u64>) -> Real
where
    D: Discrete<u64, Real>,
{
    let mut h = 0.0;
    let mut total = 0.0;
    let mut k = lo;
    loop {
        let p = dist.pmf(k);
        if p > 0.0 {
            h -= p * p.ln();
            total += p;
        }
        match hi {
            Some(cap) if k >= cap => break,
            None if total >= 1.0 - 1e-14 => break,
            // runaway guard for provider mass that never accumulates
            None if k >= lo + 100_000_000 => break,
            _ => k += 1,
        }
    }
    h
}
