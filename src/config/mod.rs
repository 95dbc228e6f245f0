//! 运行器配置模块
//!
//! 配置以TOML形式存放，缺省值覆盖日常使用。随机演示的种子
//! 固定在各题目文件内部，保持题目自包含。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::{LabError, LabResult};

/// 运行器配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RunnerConfig {
    /// 是否启用彩色输出
    pub color: bool,
    /// 日志配置
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub to_file: bool,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            color: true,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "algolab".to_string(),
            to_file: false,
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl RunnerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> LabResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: RunnerConfig =
            toml::from_str(&content).map_err(|e| LabError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> LabResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| LabError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = RunnerConfig::default();
        assert!(config.color);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.to_file);
    }

    #[test]
    fn test_config_load_save() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let config = RunnerConfig::default();
        let toml_content =
            toml::to_string_pretty(&config).expect("Failed to serialize config to TOML");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write TOML content to temporary file");

        let loaded =
            RunnerConfig::load(temp_file.path()).expect("Failed to load config from file");
        assert_eq!(config.color, loaded.color);
        assert_eq!(config.log.level, loaded.log.level);
        assert_eq!(config.log.max_files, loaded.log.max_files);
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = RunnerConfig::load("definitely/not/a/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"color = \"not a bool\"")
            .expect("Failed to write to temporary file");

        let result = RunnerConfig::load(temp_file.path());
        assert!(matches!(result, Err(LabError::Config(_))));
    }
}
