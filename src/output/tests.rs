//! Tests for output module

use super::*;
use crate::codec::encode_json_lines;
use crate::compress::{encode_compressed_json_lines, CompressionLevel};
use crate::error::Error;
use crate::types::RecordSource;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn read_array(path: &Path) -> Vec<Value> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn people() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Alice"}),
        json!({"id": 2, "name": "Bob"}),
    ]
}

// ============================================================================
// Writer Config Tests
// ============================================================================

#[test]
fn test_writer_config_default() {
    let config = ArrayWriterConfig::default();
    assert_eq!(config.buffer_size(), DEFAULT_BUFFER_SIZE);
    assert!(config.is_atomic());
}

#[test]
fn test_writer_config_builder() {
    let config = ArrayWriterConfig::new().with_buffer_size(128).atomic(false);
    assert_eq!(config.buffer_size(), 128);
    assert!(!config.is_atomic());

    let config = ArrayWriterConfig::new().with_buffer_size(0);
    assert_eq!(config.buffer_size(), DEFAULT_BUFFER_SIZE);
}

// ============================================================================
// ArrayFileWriter Tests
// ============================================================================

#[test]
fn test_writer_exact_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let mut writer = ArrayFileWriter::new(&path, &ArrayWriterConfig::default()).unwrap();
    assert_eq!(writer.path(), path.as_path());
    writer.write_records(people().iter()).unwrap();
    assert_eq!(writer.records_written(), 2);
    assert_eq!(writer.finish().unwrap(), 2);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        r#"[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]"#
    );
}

#[test]
fn test_writer_empty_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");

    let writer = ArrayFileWriter::new(&path, &ArrayWriterConfig::default()).unwrap();
    assert_eq!(writer.finish().unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_writer_dropped_leaves_destination_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keep.json");
    fs::write(&path, "[\"previous\"]").unwrap();

    {
        let mut writer = ArrayFileWriter::new(&path, &ArrayWriterConfig::default()).unwrap();
        writer.write_record(&json!({"id": 1})).unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "[\"previous\"]");
    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1, "staged temp file should be removed");
}

#[test]
fn test_writer_direct_mode_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("direct.json");
    fs::write(&path, "this is going away and is longer than the new content").unwrap();

    let config = ArrayWriterConfig::new().atomic(false).with_buffer_size(4);
    let mut writer = ArrayFileWriter::new(&path, &config).unwrap();
    writer.write_record(&json!([1, 2])).unwrap();
    writer.finish().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[[1,2]]");
}

#[cfg(unix)]
fn file_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[cfg(unix)]
#[test]
fn test_atomic_and_direct_modes_match() {
    let dir = tempdir().unwrap();
    let staged = dir.path().join("staged.json");
    let direct = dir.path().join("direct.json");

    materialize_array_file_direct(&people(), &staged).unwrap();
    let config = ArrayWriterConfig::new().atomic(false);
    materialize_sources_with_config(&[RecordSource::Records(&people())], &direct, &config)
        .unwrap();

    assert_eq!(file_mode(&staged), file_mode(&direct));
}

#[cfg(unix)]
#[test]
fn test_atomic_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.json");
    fs::write(&path, "[]").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    materialize_array_file_direct(&people(), &path).unwrap();

    assert_eq!(file_mode(&path), 0o640);
    assert_eq!(read_array(&path), people());
}

#[test]
fn test_writer_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.json");

    let result = ArrayFileWriter::new(&path, &ArrayWriterConfig::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

// ============================================================================
// Materializer Tests
// ============================================================================

#[test]
fn test_materialize_direct() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("direct.json");

    let count = materialize_array_file_direct(&people(), &path).unwrap();
    assert_eq!(count, 2);
    assert_eq!(read_array(&path), people());
}

#[test]
fn test_materialize_json_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jsonl.json");

    let text = "{\"id\":1,\"name\":\"Alice\"}\n\n{\"id\":2,\"name\":\"Bob\"}\n";
    let count = materialize_json_lines(text, &path).unwrap();
    assert_eq!(count, 2);
    assert_eq!(read_array(&path), people());
}

#[test]
fn test_materialize_json_lines_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");

    assert_eq!(materialize_json_lines("", &path).unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_materialize_compressed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("compressed.json");

    let compressed = encode_compressed_json_lines(&people(), None).unwrap();
    let count = materialize_compressed(&compressed, &path).unwrap();
    assert_eq!(count, 2);
    assert_eq!(read_array(&path), people());
}

#[test]
fn test_three_paths_equivalent() {
    let dir = tempdir().unwrap();
    let records = vec![
        json!({"id": 1, "text": "multi\nline", "nested": {"a": [1, 2.5, null]}}),
        json!("bare string"),
        json!(42),
        json!({"emoji": "😊", "big": u64::MAX}),
    ];

    let direct = dir.path().join("a.json");
    let lines = dir.path().join("b.json");
    let compressed = dir.path().join("c.json");

    materialize_array_file_direct(&records, &direct).unwrap();
    materialize_json_lines(&encode_json_lines(&records).unwrap(), &lines).unwrap();
    materialize_compressed(
        &encode_compressed_json_lines(&records, Some(CompressionLevel::BEST)).unwrap(),
        &compressed,
    )
    .unwrap();

    let expected = read_array(&direct);
    assert_eq!(expected, records);
    assert_eq!(read_array(&lines), expected);
    assert_eq!(read_array(&compressed), expected);
    assert_eq!(
        fs::read_to_string(&direct).unwrap(),
        fs::read_to_string(&compressed).unwrap()
    );
}

#[test]
fn test_materialize_mixed_sources_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.json");

    let first = vec![json!({"n": 1})];
    let compressed = encode_compressed_json_lines(&[json!({"n": 3}), json!({"n": 4})], None).unwrap();
    let sources = [
        RecordSource::Records(&first),
        RecordSource::JsonLines("{\"n\":2}"),
        RecordSource::Compressed(&compressed),
    ];

    let count = materialize_sources(&sources, &path).unwrap();
    assert_eq!(count, 4);
    assert_eq!(
        read_array(&path),
        vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3}), json!({"n": 4})]
    );
}

#[test]
fn test_materialize_array_file_single_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("single.json");

    let count = materialize_array_file(RecordSource::JsonLines("1\n2\n3"), &path).unwrap();
    assert_eq!(count, 3);
    assert_eq!(read_array(&path), vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn test_materialize_multiple_json_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.json");

    let batches = vec![
        "{\"id\":1,\"name\":\"Alice\"}\n{\"id\":2,\"name\":\"Bob\"}".to_string(),
        String::new(),
        "{\"id\":3,\"name\":\"Charlie\"}".to_string(),
    ];
    let count = materialize_multiple_json_lines(&batches, &path).unwrap();
    assert_eq!(count, 3);
    assert_eq!(read_array(&path)[2]["name"], "Charlie");
}

#[test]
fn test_materialize_multiple_batches_skips_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.json");

    let batch1 = encode_compressed_json_lines(&people(), None).unwrap();
    let batch2 = encode_compressed_json_lines(&[json!({"id": 3})], Some(CompressionLevel::NONE))
        .unwrap();
    let count = materialize_multiple_batches(&[batch1.as_str(), "", batch2.as_str()], &path).unwrap();

    assert_eq!(count, 3);
    let result = read_array(&path);
    assert_eq!(result[0]["name"], "Alice");
    assert_eq!(result[2]["id"], 3);
}

#[test]
fn test_materialize_multiple_batches_error_uses_caller_index() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.json");

    let valid = encode_compressed_json_lines(&people(), None).unwrap();
    let not_gzip = STANDARD.encode("This is not gzip data");
    let err = materialize_multiple_batches(&["", valid.as_str(), not_gzip.as_str()], &path)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidGzip { .. }));
    assert!(err.to_string().contains("batch 2"), "{err}");
    assert!(!path.exists());
}

#[test]
fn test_materialize_multiple_batches_empty_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("none.json");

    let batches: Vec<String> = vec![];
    assert_eq!(materialize_multiple_batches(&batches, &path).unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_materialize_compressed_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("self.json");

    let count = materialize_compressed_records(&people(), &path, Some(CompressionLevel::FASTEST))
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(read_array(&path), people());
}

#[test]
fn test_materialize_failure_keeps_previous_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.json");
    fs::write(&path, "[1]").unwrap();

    let good = encode_compressed_json_lines(&people(), None).unwrap();
    let err = materialize_multiple_batches(&[good.as_str(), "invalid-base64-data!!!"], &path)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidBase64 { .. }));
    assert!(err.to_string().contains("batch 1"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1]");
}

#[test]
fn test_materialize_malformed_line_aborts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");

    let err = materialize_json_lines("{\"id\":1}\n{\"id\":", &path).unwrap_err();
    assert!(matches!(err, Error::MalformedJson { line: 2, .. }));
    assert!(!path.exists());
}

#[test]
fn test_materialize_non_atomic_failure_stops_before_later_sources() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");

    let config = ArrayWriterConfig::new().atomic(false);
    let sources = [
        RecordSource::JsonLines("{\"id\":1}"),
        RecordSource::Compressed("bm90IGd6aXA="),
        RecordSource::JsonLines("{\"id\":99}"),
    ];
    let err = materialize_sources_with_config(&sources, &path, &config).unwrap_err();
    assert!(matches!(err, Error::InvalidGzip { .. }));

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("99"));
}

// ============================================================================
// Combine Tests
// ============================================================================

#[test]
fn test_combine_array_files() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    let c = dir.path().join("c.json");
    fs::write(&a, r#"[{"id":1},{"id":2}]"#).unwrap();
    fs::write(&b, "[]").unwrap();
    fs::write(&c, "[\n  {\"id\": 3}\n]").unwrap();

    let out = dir.path().join("combined.json");
    let count = combine_array_files(&[&a, &b, &c], &out).unwrap();
    assert_eq!(count, 3);
    assert_eq!(
        read_array(&out),
        vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]
    );
}

#[test]
fn test_combine_missing_input() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("combined.json");

    let err = combine_array_files(&[dir.path().join("missing.json")], &out).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(!out.exists());
}

#[test]
fn test_combine_not_an_array() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("object.json");
    fs::write(&input, r#"{"id":1}"#).unwrap();

    let err = combine_array_files(&[&input], dir.path().join("out.json")).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("object.json"));
}
