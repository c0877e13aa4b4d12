//! Error expectations: `assert_is_error`, `assert_throws`, `assert_rejects`
//! and `assert_panics`.

use crate::domain::model::ErrorExpectation;
use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use std::any::Any;
use std::error::Error;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// Checks the type and message of an error against `expectation`.
pub fn assert_is_error(error: &(dyn Error + 'static), expectation: &ErrorExpectation) -> Result<()> {
    check_error("assert_is_error", error, expectation)
}

/// Runs `f` once; it must return `Err`. The error is handed back on success
/// so callers can inspect it further.
///
/// ```
/// use assert_facade::{throws, ErrorExpectation};
///
/// let err = throws(
///     || "forty-two".parse::<u8>(),
///     &ErrorExpectation::new()
///         .of_type::<std::num::ParseIntError>()
///         .includes("invalid digit"),
/// )
/// .unwrap();
/// assert_eq!(err.to_string(), "invalid digit found in string");
/// ```
pub fn assert_throws<T, E, F>(f: F, expectation: &ErrorExpectation) -> Result<E>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: Error + 'static,
{
    match f() {
        Ok(_) => Err(AssertionFailure::new(
            "assert_throws",
            format!(
                "Expected function to throw{}",
                msg_suffix(expectation.message.as_deref())
            ),
        )),
        Err(e) => {
            check_error("assert_throws", &e, expectation)?;
            Ok(e)
        }
    }
}

/// Async counterpart of [`assert_throws`]: awaits the future produced by
/// `f` and requires it to resolve to `Err`.
pub async fn assert_rejects<T, E, F, Fut>(f: F, expectation: &ErrorExpectation) -> Result<E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Error + 'static,
{
    match f().await {
        Ok(_) => Err(AssertionFailure::new(
            "assert_rejects",
            format!(
                "Expected function to reject{}",
                msg_suffix(expectation.message.as_deref())
            ),
        )),
        Err(e) => {
            check_error("assert_rejects", &e, expectation)?;
            Ok(e)
        }
    }
}

/// 執行 `f` 並要求它 panic，回傳 panic 訊息。
/// `expected_type` 不適用於 panic，僅比對 `message_includes`。
pub fn assert_panics<T, F>(f: F, expectation: &ErrorExpectation) -> Result<String>
where
    F: FnOnce() -> T,
{
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => {
            return Err(AssertionFailure::new(
                "assert_panics",
                format!(
                    "Expected function to panic{}",
                    msg_suffix(expectation.message.as_deref())
                ),
            ))
        }
        Err(payload) => payload,
    };

    let message = panic_message(payload.as_ref());
    if let Some(includes) = &expectation.message_includes {
        if !message.contains(includes.as_str()) {
            return Err(AssertionFailure::new(
                "assert_panics",
                format!(
                    "Expected panic message to include \"{}\", but got \"{}\"{}",
                    includes,
                    message,
                    msg_suffix(expectation.message.as_deref())
                ),
            ));
        }
    }
    Ok(message)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

fn check_error(
    operation: &'static str,
    error: &(dyn Error + 'static),
    expectation: &ErrorExpectation,
) -> Result<()> {
    let suffix = msg_suffix(expectation.message.as_deref());

    if let Some(class) = &expectation.expected_type {
        if !class.matches(error) {
            return Err(AssertionFailure::new(
                operation,
                format!(
                    "Expected error to be instance of \"{}\", but was \"{:?}\"{}",
                    class.name(),
                    error,
                    suffix
                ),
            ));
        }
    }

    if let Some(includes) = &expectation.message_includes {
        let text = error.to_string();
        if !text.contains(includes.as_str()) {
            return Err(AssertionFailure::new(
                operation,
                format!(
                    "Expected error message to include \"{}\", but got \"{}\"{}",
                    includes, text, suffix
                ),
            ));
        }
    }

    Ok(())
}
