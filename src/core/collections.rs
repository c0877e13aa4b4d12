use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use crate::utils::format;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Every element of `expected` must appear somewhere in `actual`
/// (deep equality, order and multiplicity ignored).
pub fn assert_array_includes<T>(actual: &[T], expected: &[T], msg: Option<&str>) -> Result<()>
where
    T: PartialEq + Debug,
{
    let missing: Vec<&T> = expected
        .iter()
        .filter(|item| !actual.contains(*item))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(AssertionFailure::new(
        "assert_array_includes",
        format!(
            "Expected actual: {} to include: {}{}\nmissing: {}",
            format::inline(actual),
            format::inline(expected),
            msg_suffix(msg),
            format::inline(&missing)
        ),
    ))
}

/// Subset match: every key of `expected` must be present in `actual` with a
/// matching value; extra keys in `actual` are ignored. Nested objects are
/// matched the same way, arrays element-wise with equal length.
pub fn assert_object_match<A, E>(actual: &A, expected: &E, msg: Option<&str>) -> Result<()>
where
    A: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let actual = to_value(actual, "actual")?;
    let expected = to_value(expected, "expected")?;

    let projected = project(&actual, &expected);
    if json_eq(&projected, &expected) {
        return Ok(());
    }

    let diff = format::diff_block(&render_json(&projected), &render_json(&expected));
    Err(AssertionFailure::new(
        "assert_object_match",
        format!("Values are not equal{}{}", msg_suffix(msg), diff),
    ))
}

fn to_value<T: Serialize + ?Sized>(value: &T, side: &str) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| {
        AssertionFailure::new(
            "assert_object_match",
            format!("Could not serialize {} value for matching: {}", side, e),
        )
    })
}

fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// 深度相等；任一側為浮點數時以 f64 比較數字，`1.0` 與 `1` 視為相同
fn json_eq(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) if a.is_f64() || b.is_f64() => {
            a.as_f64() == b.as_f64()
        }
        (Value::Array(a), Value::Array(e)) => {
            a.len() == e.len() && a.iter().zip(e).all(|(av, ev)| json_eq(av, ev))
        }
        (Value::Object(a), Value::Object(e)) => {
            a.len() == e.len()
                && e.iter()
                    .all(|(key, ev)| a.get(key).is_some_and(|av| json_eq(av, ev)))
        }
        _ => actual == expected,
    }
}

/// 只保留 expected 出現的鍵，讓後續比較忽略 actual 多出的欄位
fn project(actual: &Value, expected: &Value) -> Value {
    match (actual, expected) {
        (Value::Object(a), Value::Object(e)) => {
            let mut filtered = Map::new();
            for (key, expected_value) in e {
                if let Some(actual_value) = a.get(key) {
                    filtered.insert(key.clone(), project(actual_value, expected_value));
                }
            }
            Value::Object(filtered)
        }
        (Value::Array(a), Value::Array(e)) if a.len() == e.len() => Value::Array(
            a.iter()
                .zip(e)
                .map(|(av, ev)| project(av, ev))
                .collect(),
        ),
        _ => actual.clone(),
    }
}
