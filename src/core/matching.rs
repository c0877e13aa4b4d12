use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use crate::utils::format;
use regex::Regex;

pub fn assert_match(actual: &str, expected: &Regex, msg: Option<&str>) -> Result<()> {
    if expected.is_match(actual) {
        return Ok(());
    }
    Err(AssertionFailure::new(
        "assert_match",
        format!(
            "Expected actual: \"{}\" to match: \"{}\"{}",
            shorten(actual),
            expected.as_str(),
            msg_suffix(msg)
        ),
    ))
}

pub fn assert_not_match(actual: &str, expected: &Regex, msg: Option<&str>) -> Result<()> {
    if !expected.is_match(actual) {
        return Ok(());
    }
    Err(AssertionFailure::new(
        "assert_not_match",
        format!(
            "Expected actual: \"{}\" to not match: \"{}\"{}",
            shorten(actual),
            expected.as_str(),
            msg_suffix(msg)
        ),
    ))
}

pub fn assert_string_includes(actual: &str, expected: &str, msg: Option<&str>) -> Result<()> {
    if actual.contains(expected) {
        return Ok(());
    }
    Err(AssertionFailure::new(
        "assert_string_includes",
        format!(
            "Expected actual: \"{}\" to contain: \"{}\"{}",
            shorten(actual),
            shorten(expected),
            msg_suffix(msg)
        ),
    ))
}

fn shorten(text: &str) -> String {
    format::truncate(text, crate::config::settings().max_value_len)
}
