use thiserror::Error;

/// 所有斷言失敗共用的錯誤型別
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionFailure {
    operation: &'static str,
    message: String,
}

impl AssertionFailure {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(operation, "assertion failed: {}", message);
        Self { operation, message }
    }

    /// 產生此失敗的底層斷言名稱 (例如 `assert_equals`)
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Settings have already been installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, AssertionFailure>;

/// 附加呼叫端訊息：有訊息時為 `": msg"`，否則為 `"."`
pub(crate) fn msg_suffix(msg: Option<&str>) -> String {
    match msg {
        Some(m) if !m.is_empty() => format!(": {}", m),
        _ => ".".to_string(),
    }
}
