//! Directory-to-JSONL pipeline tests

use feature_engine::{FeatureConfig, FeatureRecord, FEATURE_DIMENSION};
use featurize::{extract_all, load_sessions, run, FeaturizeConfig};
use std::fs;
use stroke_data::{Point, Session, Stroke};

const SESSION_A: &str = r#"{
    "id": "a",
    "testType": "clock_drawing",
    "createdAt": 1000,
    "data": {
        "strokes": [{
            "points": [
                {"x": 0, "y": 0, "timestamp": 0, "pressure": 0.5},
                {"x": 3, "y": 4, "timestamp": 100, "pressure": 0.5}
            ],
            "startTime": 0,
            "endTime": 100
        }],
        "canvasSize": {"width": 500, "height": 500}
    }
}"#;

#[test]
fn test_load_sessions_skips_bad_entries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.json"), SESSION_A).unwrap();
    fs::write(dir.path().join("b.json"), r#"[{"id": "b1"}, "oops", {"id": "b2"}]"#).unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let loaded = load_sessions(dir.path()).unwrap();
    let ids: Vec<_> = loaded.sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b1", "b2"]);
    assert_eq!(loaded.failed_files, 1);
    assert_eq!(loaded.skipped_sessions, 1);
}

#[tokio::test]
async fn test_extract_all_preserves_order() {
    let sessions: Vec<Session> = (0..7)
        .map(|i| {
            Session::new(format!("s{i}"), "spiral", i).with_strokes(vec![Stroke::new(
                vec![Point::new(0.0, 0.0, 0), Point::new(i as f64, 0.0, 10)],
                0,
                10,
            )])
        })
        .collect();

    let records = extract_all(sessions.clone(), FeatureConfig::default(), 3).await.unwrap();
    assert_eq!(records.len(), 7);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.session_id, format!("s{i}"));
        assert_eq!(record.get("path_length_total"), Some(i as f64));
    }
}

#[tokio::test]
async fn test_extract_all_empty() {
    let records = extract_all(Vec::new(), FeatureConfig::default(), 4).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_run_writes_json_lines() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("a.json"), SESSION_A).unwrap();
    fs::write(input.path().join("b.json"), r#"{"id": "empty", "testType": "copy"}"#).unwrap();

    let config = FeaturizeConfig {
        input_dir: input.path().to_path_buf(),
        output_file: output.path().join("nested/features.jsonl"),
        workers: 2,
        ..Default::default()
    };
    let summary = run(&config).await.unwrap();
    assert_eq!(summary.records, 2);

    let text = fs::read_to_string(&config.output_file).unwrap();
    let records: Vec<FeatureRecord> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].session_id, "a");
    assert_eq!(records[0].get("velocity_mean"), Some(0.05));
    assert_eq!(records[1].session_id, "empty");
    assert!(records.iter().all(|r| r.len() == FEATURE_DIMENSION));
}
