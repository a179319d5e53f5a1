//! # vera-pipeline
//!
//! One analysis cycle for Vera: cosmetic staged delays, the remote model call,
//! substitution of the offline fallback when the call fails, and the explicit
//! [`AnalysisState`] every step is recorded in.

pub mod analyzer;
pub mod cancel;
pub mod fallback;
pub mod state;

pub use analyzer::{AnalysisReport, Analyzer, CANCELLED_MESSAGE, StateObserver, run_isolated};
pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use state::{AnalysisEvent, AnalysisState, Stage};
