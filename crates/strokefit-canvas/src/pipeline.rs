//! Stroke pipeline
//!
//! Wires the curve algorithms to the segment store:
//!
//! ```text
//! Stroke ─► segment ─► per sub-run: simplify + fit ─► store (one batch)
//! store  ─► sample every segment ─► id → polyline
//! ```
//!
//! Failures are scoped to one sub-run. A rejected sub-run is reported and
//! skipped; its siblings still reach the store.

use std::collections::HashMap;

use strokefit_core::{
    CurveParameters, CurveSegment, Error, FitSource, Point, Result, Stroke,
};
use strokefit_curves::{CurveFitter, RdpSimplifier, SegmentSampler, StrokeSegmenter};

use crate::store::SegmentStore;

/// Point counts for one sub-run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRunSummary {
    /// Points produced by the segmenter
    pub raw_points: usize,
    /// Points left after RDP simplification
    pub simplified_points: usize,
}

/// A sub-run that did not produce a segment
#[derive(Debug)]
pub struct SubRunFailure {
    /// Position of the sub-run within the stroke
    pub index: usize,
    pub error: Error,
}

/// Outcome of processing one stroke
#[derive(Debug, Default)]
pub struct StrokeReport {
    pub sub_runs: Vec<SubRunSummary>,
    /// Ids of the segments appended to the store, in sub-run order
    pub appended: Vec<String>,
    pub failures: Vec<SubRunFailure>,
}

impl StrokeReport {
    /// Every sub-run produced a segment.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn sub_run_count(&self) -> usize {
        self.sub_runs.len()
    }
}

/// Stroke processing pipeline bound to a segment store
#[derive(Debug, Clone)]
pub struct StrokePipeline {
    params: CurveParameters,
    segmenter: StrokeSegmenter,
    simplifier: RdpSimplifier,
    fitter: CurveFitter,
    sampler: SegmentSampler,
    store: SegmentStore,
}

impl StrokePipeline {
    /// Create a pipeline with its own empty store.
    pub fn new(params: CurveParameters) -> Result<Self> {
        Self::with_store(params, SegmentStore::new())
    }

    /// Create a pipeline writing into an existing store.
    pub fn with_store(params: CurveParameters, store: SegmentStore) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            segmenter: StrokeSegmenter::from_params(&params),
            simplifier: RdpSimplifier::from_params(&params),
            fitter: CurveFitter::from_params(&params),
            sampler: SegmentSampler::from_params(&params)?,
            params,
            store,
        })
    }

    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    /// Clear every stored segment.
    pub fn reset_segments(&self) {
        self.store.reset();
        tracing::info!("Segments reset");
    }

    /// Validate raw points as a stroke, then process it.
    pub fn process_points(&self, points: Vec<Point>) -> Result<StrokeReport> {
        let stroke = Stroke::new(points)?;
        Ok(self.process_stroke(&stroke))
    }

    /// Segment, simplify and fit a stroke, appending the fitted segments.
    ///
    /// All segments of the stroke are appended in one store operation.
    pub fn process_stroke(&self, stroke: &Stroke) -> StrokeReport {
        let runs = self.segmenter.segment_stroke(stroke);
        let mut report = StrokeReport::default();
        let mut fitted = Vec::with_capacity(runs.len());
        let color = if self.params.use_stroke_color {
            stroke.color()
        } else {
            None
        };

        for (index, run) in runs.iter().enumerate() {
            let simplified = self.simplifier.simplify(run);
            tracing::debug!(
                "Sub-run {}: {} points, {} after simplification",
                index,
                run.len(),
                simplified.len()
            );
            report.sub_runs.push(SubRunSummary {
                raw_points: run.len(),
                simplified_points: simplified.len(),
            });

            let source: &[Point] = match self.params.fit_source {
                FitSource::Raw => run,
                FitSource::Simplified => &simplified,
            };

            match self.fitter.fit_segment(source, color) {
                Ok(segment) => fitted.push(segment),
                Err(error) => {
                    tracing::warn!(index, error = %error, "Sub-run rejected");
                    report.failures.push(SubRunFailure { index, error });
                }
            }
        }

        report.appended = fitted.iter().map(|s| s.id().to_string()).collect();
        self.store.append_all(fitted);

        tracing::info!(
            "Processed stroke: {} points, {} sub-runs, {} segments stored, {} rejected",
            stroke.len(),
            report.sub_runs.len(),
            report.appended.len(),
            report.failures.len()
        );
        report
    }

    /// Render one segment as a polyline.
    pub fn render_segment(&self, segment: &CurveSegment) -> Vec<Point> {
        self.sampler.sample(segment)
    }

    /// Render every stored segment, keyed by segment id.
    pub fn render_all(&self) -> HashMap<String, Vec<Point>> {
        self.store
            .list_all()
            .into_iter()
            .map(|segment| {
                let polyline = self.sampler.sample(&segment);
                (segment.id().to_string(), polyline)
            })
            .collect()
    }
}
