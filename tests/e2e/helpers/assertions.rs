use serde_json::Value;

/// Ids of a JSON array of content records, in order
pub fn record_ids(records: &Value) -> Vec<String> {
    records
        .as_array()
        .expect("Expected an array of records")
        .iter()
        .map(|r| r.get("id").and_then(|v| v.as_str()).expect("Missing id").to_string())
        .collect()
}

pub fn assert_record_response(record: &Value, expected_source: &str) {
    assert!(record.get("id").and_then(|v| v.as_str()).is_some(), "Missing id");
    assert!(record.get("title").and_then(|v| v.as_str()).is_some(), "Missing title");
    assert!(record.get("tags").and_then(|v| v.as_array()).is_some(), "Missing tags");
    assert!(
        record.get("is_trending").and_then(|v| v.as_bool()).is_some(),
        "Missing is_trending"
    );
    assert_eq!(
        record.get("source").and_then(|v| v.as_str()),
        Some(expected_source),
        "Source mismatch"
    );
}

pub fn assert_session_response(body: &Value, expected_state: &str) {
    assert_eq!(
        body.get("state").and_then(|v| v.as_str()),
        Some(expected_state),
        "State mismatch in {}",
        body
    );
    for collection in ["trending", "discoveries", "curated"] {
        assert!(
            body.get(collection).and_then(|v| v.as_array()).is_some(),
            "Missing collection '{}'",
            collection
        );
    }
    if expected_state == "failed" {
        assert!(
            body.get("message").and_then(|v| v.as_str()).is_some(),
            "Failed state without message"
        );
    } else {
        assert!(body.get("message").is_none(), "Unexpected message outside failed state");
    }
}
