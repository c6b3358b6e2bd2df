#![allow(dead_code)]

use serde_json::{Value, json};

// ============================================================================
// Option / Either encodings
// ============================================================================

pub fn some(value: impl Into<Value>) -> Value {
    json!({ "_tag": "Some", "value": value.into() })
}

pub fn none() -> Value {
    json!({ "_tag": "None" })
}

pub fn left(left: impl Into<Value>) -> Value {
    json!({ "_tag": "Left", "left": left.into() })
}

pub fn right(right: impl Into<Value>) -> Value {
    json!({ "_tag": "Right", "right": right.into() })
}

// ============================================================================
// Server responses, discriminated by `code`
// ============================================================================

pub fn success(body: impl Into<Value>) -> Value {
    json!({ "code": 200, "response": { "body": body.into() } })
}

pub fn failure(code: i64, detail: Option<&str>) -> Value {
    match detail {
        Some(detail) => json!({ "code": code, "detail": detail }),
        None => json!({ "code": code }),
    }
}

/// Render an RGB payload the way the colour fixtures expect.
pub fn rgb(v: &Value) -> String {
    format!("Red: {} | Green: {} | Blue: {}", v["r"], v["g"], v["b"])
}

/// A string field as an owned `String`, empty when absent.
pub fn text(v: &Value, key: &str) -> String {
    v[key].as_str().unwrap_or_default().to_string()
}
