use crate::domain::ports::{Existence, Truthiness};
use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use crate::utils::format;
use std::fmt::Debug;

/// 斷言值為 truthy，成功時原樣回傳該值
pub fn assert_truthy<T: Truthiness + Debug>(value: T, msg: Option<&str>) -> Result<T> {
    if value.is_truthy() {
        return Ok(value);
    }
    Err(AssertionFailure::new(
        "assert_truthy",
        format!(
            "Expected actual: {} to be truthy{}",
            format::inline(&value),
            msg_suffix(msg)
        ),
    ))
}

pub fn assert_false<T: Truthiness + Debug>(value: T, msg: Option<&str>) -> Result<()> {
    if !value.is_truthy() {
        return Ok(());
    }
    Err(AssertionFailure::new(
        "assert_false",
        format!(
            "Expected actual: {} to be falsy{}",
            format::inline(&value),
            msg_suffix(msg)
        ),
    ))
}

/// 斷言值存在 (非 `None`/`null`)，成功時回傳內部值
pub fn assert_exists<V: Existence>(value: V, msg: Option<&str>) -> Result<V::Target> {
    value.into_existing().ok_or_else(|| {
        AssertionFailure::new(
            "assert_exists",
            format!(
                "Expected actual: \"{}\" to not be null or undefined{}",
                V::ABSENT,
                msg_suffix(msg)
            ),
        )
    })
}
