//! # StrokeFit Core
//!
//! Core types and utilities shared by every StrokeFit crate.
//! Provides the stroke and curve-segment data model, the tunable
//! curve parameters, and the error taxonomy used across the pipeline.

pub mod constants;
pub mod data;
pub mod error;
pub mod params;
pub mod types;

pub use data::{CurveSegment, Point, Stroke};

pub use error::{CurveError, Error, FitError, Result, StrokeError};

pub use params::{CurveParameters, FitSource, UnderdeterminedPolicy};

// Re-export type aliases for convenience
pub use types::{thread_safe_vec, ThreadSafeVec};
