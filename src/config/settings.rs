use crate::utils::error::ConfigError;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TOLERANCE: f64 = 1e-7;
pub const DEFAULT_MAX_VALUE_LEN: usize = 256;
pub const DEFAULT_MAX_DIFF_LINES: usize = 200;

pub const CONFIG_PATH_ENV: &str = "ASSERT_FACADE_CONFIG";
pub const TOLERANCE_ENV: &str = "ASSERT_FACADE_TOLERANCE";
pub const MAX_VALUE_LEN_ENV: &str = "ASSERT_FACADE_MAX_VALUE_LEN";
pub const MAX_DIFF_LINES_ENV: &str = "ASSERT_FACADE_MAX_DIFF_LINES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `almost_equals` 未指定容差時使用的預設值
    pub tolerance: f64,
    /// 單行值顯示的最大字元數
    pub max_value_len: usize,
    /// 差異區塊的最大行數
    pub max_diff_lines: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_value_len: DEFAULT_MAX_VALUE_LEN,
            max_diff_lines: DEFAULT_MAX_DIFF_LINES,
        }
    }
}

impl Settings {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let processed_content = substitute_env_vars(content);
        let settings: Settings = toml::from_str(&processed_content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// 以環境變數覆寫目前的值
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(raw) = read_env(TOLERANCE_ENV) {
            self.tolerance = parse_env(TOLERANCE_ENV, &raw)?;
        }
        if let Some(raw) = read_env(MAX_VALUE_LEN_ENV) {
            self.max_value_len = parse_env(MAX_VALUE_LEN_ENV, &raw)?;
        }
        if let Some(raw) = read_env(MAX_DIFF_LINES_ENV) {
            self.max_diff_lines = parse_env(MAX_DIFF_LINES_ENV, &raw)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// 依序套用：`ASSERT_FACADE_CONFIG` 指定的檔案，然後環境變數
    pub fn load() -> Result<Self, ConfigError> {
        let base = match read_env(CONFIG_PATH_ENV) {
            Some(path) => {
                tracing::debug!("Loading assertion settings from {}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        base.with_env_overrides()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_tolerance("tolerance", self.tolerance)?;
        validation::validate_positive_number("max_value_len", self.max_value_len, 1)?;
        validation::validate_range("max_diff_lines", self.max_diff_lines, 1, 100_000)?;
        Ok(())
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidConfigValueError {
            field: name.to_string(),
            value: raw.to_string(),
            reason: "Value cannot be parsed".to_string(),
        })
}

/// 替換環境變數 (例如 ${TOLERANCE})，未設定的保留原樣
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR
        .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}
