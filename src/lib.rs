//! # StrokeFit
//!
//! Turns freehand pointer strokes into piecewise polynomial curve segments
//! and renders those segments back as polylines.
//!
//! ## Architecture
//!
//! StrokeFit is organized as a workspace with multiple crates:
//!
//! 1. **strokefit-core** - Points, strokes, curve segments, parameters, errors
//! 2. **strokefit-curves** - Segmenter, RDP simplifier, least-squares fitter, sampler
//! 3. **strokefit-canvas** - Segment store and the stroke pipeline
//! 4. **strokefit-settings** - JSON/TOML configuration files
//! 5. **strokefit** - Command-line front end that integrates all crates

pub use strokefit_canvas::{
    SegmentStore, StrokePipeline, StrokeReport, SubRunFailure, SubRunSummary,
};
pub use strokefit_core::{
    CurveError, CurveParameters, CurveSegment, Error, FitError, FitSource, Point, Result, Stroke,
    StrokeError, UnderdeterminedPolicy,
};
pub use strokefit_curves::{
    perpendicular_distance, CurveFitter, Direction, RdpSimplifier, SegmentSampler,
    StrokeSegmenter,
};
pub use strokefit_settings::{Config, ConfigError, LoggingSettings, SettingsError};

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for results
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Pretty or JSON formatting
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = settings.tracing_level()?;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    if settings.json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Read a JSON array of strokes from `path`.
///
/// Every stroke is validated on the way in; the first invalid one fails
/// the whole file.
pub fn load_strokes(path: &Path) -> anyhow::Result<Vec<Stroke>> {
    use anyhow::Context;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read strokes from {}", path.display()))?;
    let strokes: Vec<Stroke> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid stroke file {}", path.display()))?;

    tracing::debug!("Loaded {} strokes from {}", strokes.len(), path.display());
    Ok(strokes)
}
