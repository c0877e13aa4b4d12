use std::error::Error;
use std::fmt;

/// 執行期可檢查的錯誤型別
#[derive(Clone, Copy)]
pub struct ErrorClass {
    name: &'static str,
    check: fn(&(dyn Error + 'static)) -> bool,
}

impl ErrorClass {
    pub fn of<E: Error + 'static>() -> Self {
        fn is<E: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
            err.is::<E>()
        }
        Self {
            name: std::any::type_name::<E>(),
            check: is::<E>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        (self.check)(err)
    }
}

impl fmt::Debug for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorClass").field(&self.name).finish()
    }
}

/// What an error produced by `is_error`, `throws` or `rejects` must look like.
///
/// Every field is optional; `ErrorExpectation::default()` accepts any error.
///
/// ```
/// use assert_facade::ErrorExpectation;
///
/// let expectation = ErrorExpectation::new()
///     .of_type::<std::io::Error>()
///     .includes("denied")
///     .message("opening the lock file");
/// assert_eq!(expectation.message_includes.as_deref(), Some("denied"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorExpectation {
    pub expected_type: Option<ErrorClass>,
    pub message_includes: Option<String>,
    pub message: Option<String>,
}

impl ErrorExpectation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_type<E: Error + 'static>(mut self) -> Self {
        self.expected_type = Some(ErrorClass::of::<E>());
        self
    }

    pub fn includes(mut self, text: impl Into<String>) -> Self {
        self.message_includes = Some(text.into());
        self
    }

    /// 失敗時附加於訊息後的說明
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }
}
