use std::path::PathBuf;

use strokefit::{load_strokes, Config, StrokePipeline, UnderdeterminedPolicy};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn parabola_json(color: &str) -> String {
    let points: Vec<String> = (0..=20)
        .map(|i| {
            let x = i as f64 * 2.0;
            format!(r#"{{"x": {}, "y": {}}}"#, x, 0.05 * x * x)
        })
        .collect();
    format!(r#"{{"color": "{}", "points": [{}]}}"#, color, points.join(", "))
}

#[test]
fn test_batch_from_files() {
    let dir = TempDir::new().unwrap();
    let strokes = write(
        &dir,
        "strokes.json",
        &format!("[{}, {}]", parabola_json("#f00"), parabola_json("#0f0")),
    );
    let config = write(
        &dir,
        "config.toml",
        "[curve]\nsample_step = 5.0\nuse_stroke_color = true\n",
    );

    let config = Config::load_or_default(Some(&config)).unwrap();
    let pipeline = StrokePipeline::new(config.curve).unwrap();

    for stroke in load_strokes(&strokes).unwrap() {
        let report = pipeline.process_stroke(&stroke);
        assert!(report.is_complete());
    }

    let segments = pipeline.store().list_all();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].color(), "#f00");
    assert_eq!(segments[1].color(), "#0f0");

    let rendered = pipeline.render_all();
    let polyline = &rendered[segments[0].id()];
    // start, x = 0, 5, ..., 35, end
    assert_eq!(polyline.len(), 10);
    assert_eq!(polyline[0], segments[0].start());
    assert_eq!(polyline[1].x, 0.0);
    assert!(polyline[1].y.abs() < 1e-9);
    assert!((polyline[9].y - 0.05 * 40.0 * 40.0).abs() < 1e-9);
}

#[test]
fn test_default_config_ignores_stroke_color() {
    let dir = TempDir::new().unwrap();
    let strokes = write(&dir, "strokes.json", &format!("[{}]", parabola_json("#f00")));

    let pipeline = StrokePipeline::new(Config::default().curve).unwrap();
    for stroke in load_strokes(&strokes).unwrap() {
        pipeline.process_stroke(&stroke);
    }
    assert_eq!(pipeline.store().list_all()[0].color(), "#000");
}

#[test]
fn test_invalid_stroke_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.json", r#"[{"points": [{"x": 1, "y": 1}]}]"#);
    assert!(load_strokes(&path).is_err());

    let missing = dir.path().join("missing.json");
    assert!(load_strokes(&missing).is_err());
}

#[test]
fn test_reduce_degree_from_config() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.json",
        r#"{"curve": {"underdetermined": "reduce_degree"}}"#,
    );
    let config = Config::load_or_default(Some(&config)).unwrap();
    assert_eq!(
        config.curve.underdetermined,
        UnderdeterminedPolicy::ReduceDegree
    );

    let pipeline = StrokePipeline::new(config.curve).unwrap();
    let report = pipeline
        .process_points(vec![(0.0, 0.0).into(), (10.0, 5.0).into()])
        .unwrap();
    assert!(report.is_complete());

    let segments = pipeline.store().list_all();
    assert_eq!(segments[0].coefficients().len(), 3);
    assert_eq!(segments[0].coefficients()[2], 0.0);
    assert!((segments[0].evaluate(10.0) - 5.0).abs() < 1e-9);
}
