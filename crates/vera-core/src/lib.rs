//! # vera-core
//!
//! Core types and error types for Vera.
//!
//! This crate provides the foundational types shared across all Vera crates:
//! - [`ClaimQuery`], the user-submitted claim text
//! - [`Verdict`] and [`VerdictResult`], the assessment returned by the model
//!   or the fallback responder
//! - [`ResultSource`], recording which path produced a result
//! - Cross-cutting error types

pub mod claim;
pub mod errors;
pub mod verdict;

pub use claim::ClaimQuery;
pub use errors::CoreError;
pub use verdict::{ResultSource, Verdict, VerdictResult};
