pub mod settings;

pub use settings::Settings;

use crate::utils::error::ConfigError;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// 取得全域設定；第一次呼叫時由 `Settings::load()` 載入，失敗則退回預設值
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load assertion settings, using defaults: {}", e);
            Settings::default()
        }
    })
}

/// 明確安裝設定，必須在任何斷言執行前呼叫
pub fn install(settings: Settings) -> Result<(), ConfigError> {
    use crate::utils::validation::Validate;

    settings.validate()?;
    SETTINGS
        .set(settings)
        .map_err(|_| ConfigError::AlreadyInstalled)
}
