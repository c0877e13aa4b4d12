use crate::domain::ports::Identity;
use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use crate::utils::format;
use std::fmt::Debug;

/// Deep equality through `PartialEq`. The failure carries a line diff of
/// the pretty `Debug` renderings.
pub fn assert_equals<A, E>(actual: &A, expected: &E, msg: Option<&str>) -> Result<()>
where
    A: PartialEq<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    if actual == expected {
        return Ok(());
    }

    let diff = format::diff_block(&format::pretty(actual), &format::pretty(expected));
    Err(AssertionFailure::new(
        "assert_equals",
        format!("Values are not equal{}{}", msg_suffix(msg), diff),
    ))
}

pub fn assert_not_equals<A, E>(actual: &A, expected: &E, msg: Option<&str>) -> Result<()>
where
    A: PartialEq<E> + Debug + ?Sized,
    E: Debug + ?Sized,
{
    if actual != expected {
        return Ok(());
    }

    Err(AssertionFailure::new(
        "assert_not_equals",
        format!(
            "Expected actual: {} not to be: {}{}",
            format::inline(actual),
            format::inline(expected),
            msg_suffix(msg)
        ),
    ))
}

/// Strict equality: primitives by value, reference-like values by address.
pub fn assert_strict_equals<T>(actual: &T, expected: &T, msg: Option<&str>) -> Result<()>
where
    T: Identity + Debug + ?Sized,
{
    if actual.is_identical(expected) {
        return Ok(());
    }

    let actual_str = format::pretty(actual);
    let expected_str = format::pretty(expected);
    let message = if actual_str == expected_str {
        // 結構相同但不是同一個實例
        format!(
            "Values have the same structure but are not reference-equal{}\n\n    {}\n",
            msg_suffix(msg),
            actual_str.replace('\n', "\n    ")
        )
    } else {
        format!(
            "Values are not strictly equal{}{}",
            msg_suffix(msg),
            format::diff_block(&actual_str, &expected_str)
        )
    };
    Err(AssertionFailure::new("assert_strict_equals", message))
}

pub fn assert_not_strict_equals<T>(actual: &T, expected: &T, msg: Option<&str>) -> Result<()>
where
    T: Identity + Debug + ?Sized,
{
    if !actual.is_identical(expected) {
        return Ok(());
    }

    Err(AssertionFailure::new(
        "assert_not_strict_equals",
        format!(
            "Expected \"{}\" to not be strictly equal to \"{}\"{}",
            format::inline(actual),
            format::inline(expected),
            msg_suffix(msg)
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equals_passes_for_equal_values() {
        assert!(assert_equals(&vec![1, 2, 3], &vec![1, 2, 3], None).is_ok());
        assert!(assert_equals("abc", "abc", None).is_ok());
        assert!(assert_equals(&String::from("abc"), "abc", None).is_ok());
    }

    #[test]
    fn test_equals_reports_diff() {
        let err = assert_equals(&json!({"a": 1}), &json!({"a": 2}), Some("config drift"))
            .unwrap_err();
        let message = err.message();
        assert!(message.starts_with("Values are not equal: config drift"));
        assert!(message.contains("[Diff] Actual / Expected"));
        assert!(message.contains("-   "));
        assert!(message.contains("+   "));
        assert_eq!(err.operation(), "assert_equals");
    }

    #[test]
    fn test_not_equals() {
        assert!(assert_not_equals(&1, &2, None).is_ok());
        let err = assert_not_equals(&1, &1, None).unwrap_err();
        assert_eq!(err.message(), "Expected actual: 1 not to be: 1.");
    }

    #[test]
    fn test_strict_equals_on_primitives() {
        assert!(assert_strict_equals(&5, &5, None).is_ok());
        assert!(assert_strict_equals("a", "a", None).is_ok());
        assert!(assert_strict_equals(&f64::NAN, &f64::NAN, None).is_ok());
        assert!(assert_strict_equals(&0.0, &-0.0, None).is_err());
    }

    #[test]
    fn test_strict_equals_distinguishes_instances() {
        let a = vec![1, 2];
        let b = vec![1, 2];
        assert!(assert_strict_equals(&a, &a, None).is_ok());

        let err = assert_strict_equals(&a, &b, None).unwrap_err();
        assert!(err
            .message()
            .starts_with("Values have the same structure but are not reference-equal."));
    }

    #[test]
    fn test_strict_equals_reports_diff_for_different_values() {
        let err = assert_strict_equals(&1, &2, None).unwrap_err();
        assert!(err.message().starts_with("Values are not strictly equal."));
    }

    #[test]
    fn test_not_strict_equals() {
        let a = vec![1];
        assert!(assert_not_strict_equals(&a, &a.clone(), None).is_ok());
        let err = assert_not_strict_equals(&a, &a, Some("same vec")).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected \"[1]\" to not be strictly equal to \"[1]\": same vec"
        );
    }
}
