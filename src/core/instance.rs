use crate::utils::error::{msg_suffix, AssertionFailure, Result};
use std::any::{type_name, Any};

/// Checked downcast: succeeds when `value` holds a `T` and returns it typed.
pub fn assert_instance_of<'a, T: Any>(value: &'a dyn Any, msg: Option<&str>) -> Result<&'a T> {
    value.downcast_ref::<T>().ok_or_else(|| {
        AssertionFailure::new(
            "assert_instance_of",
            format!(
                "Expected value to be an instance of \"{}\"{}",
                type_name::<T>(),
                msg_suffix(msg)
            ),
        )
    })
}

pub fn assert_not_instance_of<T: Any>(value: &dyn Any, msg: Option<&str>) -> Result<()> {
    if !value.is::<T>() {
        return Ok(());
    }
    Err(AssertionFailure::new(
        "assert_not_instance_of",
        format!(
            "Expected value to not be an instance of \"{}\"{}",
            type_name::<T>(),
            msg_suffix(msg)
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_instance_of_narrows() {
        let boxed: Box<dyn Any> = Box::new(io::Error::other("boom"));
        let err = assert_instance_of::<io::Error>(boxed.as_ref(), None).unwrap();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_instance_of_mismatch() {
        let boxed: Box<dyn Any> = Box::new(io::Error::other("boom"));
        let failure = assert_instance_of::<String>(boxed.as_ref(), None).unwrap_err();
        assert!(failure
            .message()
            .starts_with("Expected value to be an instance of \""));
        assert!(failure.message().contains("String"));
    }

    #[test]
    fn test_not_instance_of() {
        let value: &dyn Any = &42u32;
        assert!(assert_not_instance_of::<String>(value, None).is_ok());
        assert!(assert_not_instance_of::<u32>(value, None).is_err());
    }
}
