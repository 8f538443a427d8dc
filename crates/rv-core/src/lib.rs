//! # rv-core
//!
//! Core types and error definitions for rvlib.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace – the primitive type aliases, the error enum, and the
//! `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Non-negative count type (number of trials, draws, population sizes).
pub type Natural = u64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
