//! Tests for codec module

use super::*;
use crate::error::Error;
use serde_json::json;

// ============================================================================
// Single Record Tests
// ============================================================================

#[test]
fn test_encode_record_object() {
    let line = encode_record(&json!({"id": 1, "name": "Alice"})).unwrap();
    assert_eq!(line, r#"{"id":1,"name":"Alice"}"#);
}

#[test]
fn test_encode_record_escapes_framing_characters() {
    let record = json!({"text": "line1\nline2\r\nquote\" back\\slash \u{0001}"});
    let line = encode_record(&record).unwrap();

    assert!(!line.contains('\n'));
    assert!(!line.contains('\r'));
    assert!(line.contains(r"\n"));
    assert!(line.contains(r"\u0001"));
    assert_eq!(decode_record(&line).unwrap(), record);
}

#[test]
fn test_encode_record_keeps_html_and_unicode() {
    let record = json!({
        "html": "<div>a & b</div>",
        "name": "José Müller",
        "city": "北京市",
        "emoji": "😊👍🏽👨‍👩‍👧"
    });
    let line = encode_record(&record).unwrap();

    assert!(line.contains("<div>a & b</div>"));
    assert!(line.contains("😊👍🏽👨‍👩‍👧"));
    assert_eq!(decode_record(&line).unwrap(), record);
}

#[test]
fn test_encode_record_scalars() {
    assert_eq!(encode_record(&json!(null)).unwrap(), "null");
    assert_eq!(encode_record(&json!(true)).unwrap(), "true");
    assert_eq!(encode_record(&json!("x")).unwrap(), "\"x\"");
    assert_eq!(encode_record(&json!([1, [2, []]])).unwrap(), "[1,[2,[]]]");
}

#[test]
fn test_number_precision() {
    let record = json!({
        "max_u64": u64::MAX,
        "min_i64": i64::MIN,
        "pi": std::f64::consts::PI,
        "tiny": 5e-324,
        "big": 1.7976931348623157e308
    });
    let decoded = decode_record(&encode_record(&record).unwrap()).unwrap();

    assert_eq!(decoded["max_u64"].as_u64(), Some(u64::MAX));
    assert_eq!(decoded["min_i64"].as_i64(), Some(i64::MIN));
    assert_eq!(decoded["pi"].as_f64(), Some(std::f64::consts::PI));
    assert_eq!(decoded["tiny"].as_f64(), Some(5e-324));
    assert_eq!(decoded, record);
}

#[test]
fn test_decode_record_invalid() {
    let err = decode_record("{not json}").unwrap_err();
    assert!(matches!(err, Error::MalformedJson { line: 1, .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn test_write_record_matches_encode() {
    let record = json!({"nested": {"list": [1, 2.5, "three", null]}});
    let mut buf = Vec::new();
    write_record(&mut buf, &record).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), encode_record(&record).unwrap());
}

// ============================================================================
// JSON Lines Tests
// ============================================================================

#[test]
fn test_encode_json_lines() {
    let records = vec![
        json!({"id": 1, "name": "Alice"}),
        json!({"id": 2, "name": "Bob"}),
    ];
    let text = encode_json_lines(&records).unwrap();
    assert_eq!(text, "{\"id\":1,\"name\":\"Alice\"}\n{\"id\":2,\"name\":\"Bob\"}");

    let decoded = decode_json_lines(&text).unwrap();
    assert_eq!(decoded, records);
}

#[test]
fn test_encode_json_lines_empty() {
    assert_eq!(encode_json_lines(&[]).unwrap(), "");
}

#[test]
fn test_encode_json_lines_single_has_no_trailing_newline() {
    let text = encode_json_lines(&[json!({"id": 1})]).unwrap();
    assert_eq!(text, r#"{"id":1}"#);
}

#[test]
fn test_decode_json_lines_empty_and_whitespace() {
    assert!(decode_json_lines("").unwrap().is_empty());
    assert!(decode_json_lines("   \n   \t   ").unwrap().is_empty());
    assert!(decode_json_lines("\n\n\n").unwrap().is_empty());
}

#[test]
fn test_decode_json_lines_skips_blank_lines() {
    let text = "\n{\"id\":1}\n\n   \n{\"id\":2}\r\n\n{\"id\":3}\n\n";
    let records = decode_json_lines(text).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[1]["id"], 2);
    assert_eq!(records[2]["id"], 3);
}

#[test]
fn test_decode_json_lines_reports_offending_line() {
    let err = decode_json_lines("{\"id\":1}\ninvalid\n{\"id\":2}").unwrap_err();
    match err {
        Error::MalformedJson { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected MalformedJson, got {other:?}"),
    }
}

#[test]
fn test_decode_json_lines_mixed_value_kinds() {
    let text = "1\n\"two\"\n[3]\nnull\ntrue\n{\"six\":6}";
    let records = decode_json_lines(text).unwrap();
    assert_eq!(
        records,
        vec![json!(1), json!("two"), json!([3]), json!(null), json!(true), json!({"six": 6})]
    );
}

#[test]
fn test_visit_json_lines_stops_on_visitor_error() {
    let mut seen = 0;
    let result = visit_json_lines("{\"a\":1}\n{\"a\":2}\n{\"a\":3}", |_| {
        seen += 1;
        if seen == 2 {
            Err(Error::config("stop"))
        } else {
            Ok(())
        }
    });
    assert!(matches!(result, Err(Error::Config { .. })));
    assert_eq!(seen, 2);
}

#[test]
fn test_visit_json_lines_count() {
    let count = visit_json_lines("{}\n\n{}\n", |_| Ok(())).unwrap();
    assert_eq!(count, 2);
}
