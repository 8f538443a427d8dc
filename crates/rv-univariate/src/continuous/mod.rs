//! Continuous distribution families.
//!
//! Each family wraps its `statrs` counterpart for kernel evaluation and
//! owns its parameter validation and closed-form statistics. Logistic has
//! no provider counterpart; its kernels are elementary closed forms.

pub mod beta;
pub mod cauchy;
pub mod chi_squared;
pub mod exponential;
pub mod fisher_f;
pub mod gamma;
pub mod log_normal;
pub mod logistic;
pub mod normal;
pub mod student_t;
pub mod uniform;
pub mod weibull;

pub use beta::Beta;
pub use cauchy::Cauchy;
pub use chi_squared::ChiSquared;
pub use exponential::Exponential;
pub use fisher_f::FisherF;
pub use gamma::Gamma;
pub use log_normal::LogNormal;
pub use logistic::Logistic;
pub use normal::Normal;
pub use student_t::StudentT;
pub use uniform::Uniform;
pub use weibull::Weibull;
