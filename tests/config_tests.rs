// Tests for pipeline configuration defaults and file loading

use std::io::Write;
use transcript_qa::QaConfig;

#[test]
fn test_defaults() {
    let config = QaConfig::default();

    assert_eq!(config.max_answer_length, 200);
    assert_eq!(config.confidence_threshold, 0.05);
    assert_eq!(config.chunk_size, 350);
    assert_eq!(config.chunk_overlap, 75);
}

#[test]
fn test_load_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qa.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "max_answer_length = 120\nconfidence_threshold = 0.2\nchunk_size = 250\nchunk_overlap = 50"
    )
    .unwrap();

    let config = QaConfig::load(&format!("{}/qa", dir.path().display())).unwrap();

    assert_eq!(config.max_answer_length, 120);
    assert_eq!(config.confidence_threshold, 0.2);
    assert_eq!(config.chunk_size, 250);
    assert_eq!(config.chunk_overlap, 50);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qa.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "chunk_size = 100").unwrap();

    let config = QaConfig::load(&format!("{}/qa", dir.path().display())).unwrap();

    assert_eq!(config.chunk_size, 100);
    assert_eq!(config.max_answer_length, 200);
    assert_eq!(config.confidence_threshold, 0.05);
    assert_eq!(config.chunk_overlap, 75);
}

#[test]
fn test_load_missing_file_is_an_error() {
    assert!(QaConfig::load("/nonexistent/qa-config").is_err());
}
