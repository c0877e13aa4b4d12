use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use std::convert::Infallible;

// 以下三個斷言永遠回傳 Err；`Infallible` 讓呼叫端可在 `?` 之後視為不可達

pub fn fail(msg: Option<&str>) -> Result<Infallible> {
    Err(AssertionFailure::new(
        "fail",
        format!("Failed assertion{}", msg_suffix(msg)),
    ))
}

/// Marks a code path that has not been written yet.
pub fn unimplemented(msg: Option<&str>) -> Result<Infallible> {
    Err(AssertionFailure::new(
        "unimplemented",
        format!("Unimplemented{}", msg_suffix(msg)),
    ))
}

/// Marks a code path that must never run.
pub fn unreachable(msg: Option<&str>) -> Result<Infallible> {
    Err(AssertionFailure::new(
        "unreachable",
        format!("Unreachable{}", msg_suffix(msg)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_fail() {
        assert_eq!(fail(None).unwrap_err().message(), "Failed assertion.");
        assert_eq!(
            fail(Some("should not get here")).unwrap_err().message(),
            "Failed assertion: should not get here"
        );
        assert_eq!(unimplemented(None).unwrap_err().message(), "Unimplemented.");
        assert_eq!(
            unreachable(Some("state machine")).unwrap_err().message(),
            "Unreachable: state machine"
        );
    }

    #[test]
    fn test_question_mark_diverges() {
        fn pick(flag: bool) -> Result<u32> {
            if flag {
                return Ok(1);
            }
            match fail(Some("flag must be set"))? {}
        }

        assert_eq!(pick(true).unwrap(), 1);
        assert_eq!(pick(false).unwrap_err().operation(), "fail");
    }
}
