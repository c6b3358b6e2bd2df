//! `Discriminated` for `serde_json` values.
//!
//! A JSON object is discriminated by one of its properties. Strings and
//! integral numbers are tags; `null`, booleans, arrays and objects are not.
//! Inputs that are not objects (`null`, `""`, numbers) have no discriminant
//! at all.
//!
//! A numeric tag must be integral and fit in an `i64` (`200.0` reads as
//! `200`). Fractional numbers such as `1.5`, and integers above `i64::MAX`,
//! have no discriminant, so a matcher sends them to its default case.

use crate::discriminant::{Discriminant, Discriminated};
use serde_json::{Map, Number, Value};

fn number_tag(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // `200.0` names the same case as `200`.
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

fn value_tag(value: &Value) -> Option<Discriminant<'_>> {
    match value {
        Value::String(s) => Some(Discriminant::Str(s)),
        Value::Number(n) => number_tag(n).map(Discriminant::Int),
        _ => None,
    }
}

impl Discriminated for Value {
    fn discriminant(&self, field: &str) -> Option<Discriminant<'_>> {
        value_tag(self.get(field)?)
    }
}

impl Discriminated for Map<String, Value> {
    fn discriminant(&self, field: &str) -> Option<Discriminant<'_>> {
        value_tag(self.get(field)?)
    }
}
