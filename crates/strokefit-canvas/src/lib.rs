//! # StrokeFit Canvas
//!
//! The stateful side of StrokeFit: a shared [`SegmentStore`] of fitted
//! curve segments and the [`StrokePipeline`] that feeds and renders it.
//!
//! The pipeline exposes the three operations a transport layer needs:
//!
//! - [`StrokePipeline::reset_segments`] clears the store
//! - [`StrokePipeline::process_stroke`] segments, fits and stores a stroke
//! - [`StrokePipeline::render_all`] re-samples every stored segment
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strokefit_canvas::StrokePipeline;
//! use strokefit_core::{CurveParameters, Point};
//!
//! let pipeline = StrokePipeline::new(CurveParameters::default())?;
//! pipeline.process_points(vec![Point::new(0.0, 0.0), Point::new(4.0, 1.0), Point::new(8.0, 4.0)])?;
//! let polylines = pipeline.render_all();
//! ```

pub mod pipeline;
pub mod store;

pub use pipeline::{StrokePipeline, StrokeReport, SubRunFailure, SubRunSummary};
pub use store::SegmentStore;
