use anyhow::Result;
use assert_facade::{assert, config, ConfigError, Settings};
use std::io::Write;
use tempfile::NamedTempFile;

// 全域設定只能安裝一次，因此整個流程放在同一個測試中
#[test]
fn test_installed_settings_drive_defaults() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"tolerance = 0.05\nmax_value_len = 8\n")?;
    let settings = Settings::from_file(temp_file.path())?;

    config::install(settings)?;
    assert_eq!(config::settings().tolerance, 0.05);

    // 容差來自設定檔
    assert::almost_equals(0.01, 0.02, None, None)?;
    assert!(assert::almost_equals(0.0, 1.0, None, None).is_err());

    // 過長的值會被截斷
    let failure = assert::not_equals(&"abcdefghijklmnop", &"abcdefghijklmnop", None).unwrap_err();
    assert_eq!(
        failure.message(),
        "Expected actual: \"abcdefg... not to be: \"abcdefg...."
    );

    assert!(matches!(
        config::install(Settings::default()),
        Err(ConfigError::AlreadyInstalled)
    ));
    Ok(())
}
