use crate::config;
use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use crate::utils::format;
use std::fmt::Debug;

/// Passes when `actual` and `expected` are identical (NaN matches NaN,
/// infinities match themselves) or differ by at most `tolerance`.
/// `None` uses the configured default (`1e-7` unless overridden).
pub fn assert_almost_equals(
    actual: f64,
    expected: f64,
    tolerance: Option<f64>,
    msg: Option<&str>,
) -> Result<()> {
    if actual.to_bits() == expected.to_bits() || (actual.is_nan() && expected.is_nan()) {
        return Ok(());
    }

    let tolerance = tolerance.unwrap_or_else(|| config::settings().tolerance);
    let delta = (expected - actual).abs();
    if delta <= tolerance {
        return Ok(());
    }

    Err(AssertionFailure::new(
        "assert_almost_equals",
        format!(
            "Expected actual: \"{}\" to be close to \"{}\": delta \"{}\" is greater than \"{}\"{}",
            number(actual),
            number(expected),
            number(delta),
            number(tolerance),
            msg_suffix(msg)
        ),
    ))
}

// 整數原樣輸出，其餘用科學記號
fn number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n)
    } else if n.is_finite() {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

macro_rules! ordering_assertion {
    ($(#[$doc:meta])* $name:ident, $op:tt) => {
        $(#[$doc])*
        pub fn $name<A, E>(actual: &A, expected: &E, msg: Option<&str>) -> Result<()>
        where
            A: PartialOrd<E> + Debug + ?Sized,
            E: Debug + ?Sized,
        {
            if actual $op expected {
                return Ok(());
            }
            Err(AssertionFailure::new(
                stringify!($name),
                format!(
                    "Expect {} {} {}{}",
                    format::inline(actual),
                    stringify!($op),
                    format::inline(expected),
                    msg_suffix(msg)
                ),
            ))
        }
    };
}

ordering_assertion!(
    /// `actual > expected`
    assert_greater, >
);
ordering_assertion!(assert_greater_or_equal, >=);
ordering_assertion!(
    /// `actual < expected`
    assert_less, <
);
ordering_assertion!(assert_less_or_equal, <=);
