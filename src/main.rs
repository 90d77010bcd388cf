use std::path::PathBuf;

use clap::Parser;
use strokefit::{init_logging, load_strokes, Config, StrokePipeline};

/// Fit freehand strokes to polynomial curve segments and print the
/// rendered polylines as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Configuration file (.toml or .json); defaults to the user config
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the stored segments instead of the rendered polylines
    #[arg(short, long)]
    segments: bool,

    /// JSON array of strokes
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = Config::load_or_default(args.config.as_deref())?;

    init_logging(&config.logging)?;
    tracing::info!(
        "strokefit {} (built {})",
        strokefit::VERSION,
        strokefit::BUILD_DATE
    );

    let pipeline = StrokePipeline::new(config.curve)?;
    let strokes = load_strokes(&args.input)?;

    for (index, stroke) in strokes.iter().enumerate() {
        let report = pipeline.process_stroke(stroke);
        for failure in &report.failures {
            tracing::warn!(
                stroke = index,
                sub_run = failure.index,
                error = %failure.error,
                "Sub-run skipped"
            );
        }
    }

    let output = if args.segments {
        serde_json::to_string_pretty(&pipeline.store().list_all())?
    } else {
        serde_json::to_string_pretty(&pipeline.render_all())?
    };
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_input_only() {
        let parsed = CliArgs::try_parse_from(["strokefit", "strokes.json"]).unwrap();
        assert_eq!(parsed.config, None);
        assert!(!parsed.segments);
        assert_eq!(parsed.input, PathBuf::from("strokes.json"));
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = CliArgs::try_parse_from([
            "strokefit",
            "--segments",
            "--config",
            "cfg.toml",
            "in.json",
        ])
        .unwrap();
        assert!(parsed.segments);
        assert_eq!(parsed.config, Some(PathBuf::from("cfg.toml")));
        assert_eq!(parsed.input, PathBuf::from("in.json"));

        let short = CliArgs::try_parse_from(["strokefit", "-s", "-c", "cfg.json", "in.json"])
            .unwrap();
        assert!(short.segments);
        assert_eq!(short.config, Some(PathBuf::from("cfg.json")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::try_parse_from(["strokefit"]).is_err());
        assert!(CliArgs::try_parse_from(["strokefit", "--config"]).is_err());
        assert!(CliArgs::try_parse_from(["strokefit", "--verbose", "in.json"]).is_err());
        assert!(CliArgs::try_parse_from(["strokefit", "a.json", "b.json"]).is_err());
    }
}
