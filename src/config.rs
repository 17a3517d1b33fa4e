use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 启动查询串，例如 `docType=report&firstPage=report-header&lastPage=report-footer`
    pub startup_query: String,
    /// 内容存储文件
    pub storage_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 会话日志文件
    pub output_log_file: String,
    /// 结束时是否把展示投影以 JSON 输出到标准输出
    pub print_view: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            startup_query: String::new(),
            storage_file: "editor_storage.json".to_string(),
            verbose_logging: false,
            output_log_file: "layout_session.log".to_string(),
            print_view: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，缺失的字段取默认值
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 环境变量优先于文件里的配置
    pub fn with_env_overrides(self) -> Self {
        Self {
            startup_query: std::env::var("LAYOUT_QUERY").unwrap_or(self.startup_query),
            storage_file: std::env::var("LAYOUT_STORAGE_FILE").unwrap_or(self.storage_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
            print_view: std::env::var("LAYOUT_PRINT_VIEW").ok().and_then(|v| v.parse().ok()).unwrap_or(self.print_view),
        }
    }

    /// `LAYOUT_CONFIG` 指向配置文件时先读文件，再叠加环境变量
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("LAYOUT_CONFIG") {
            Ok(path) => Ok(Self::from_toml_file(path)?.with_env_overrides()),
            Err(_) => Ok(Self::from_env()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(
            &path,
            "startup_query = \"docType=page&header=true\"\nprint_view = false\n",
        )
        .unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert_eq!(config.startup_query, "docType=page&header=true");
        assert!(!config.print_view);
        assert_eq!(config.storage_file, "editor_storage.json");
    }

    #[test]
    fn test_bad_toml_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "print_view = maybe").unwrap();

        let err = Config::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseFailed { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileReadFailed { .. }));
    }
}
