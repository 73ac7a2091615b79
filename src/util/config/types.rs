//! 配置结构定义模块

use serde::{Deserialize, Serialize};

use crate::model::version::REVISION_PLACEHOLDER;

/// 主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 覆盖版本标识；缺省使用占位符，由发布流程替换
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// 生效的版本标识：显式配置优先，空白视为未配置
    pub fn revision(&self) -> String {
        self.revision
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(REVISION_PLACEHOLDER)
            .to_string()
    }
}

/// 页面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_title")]
    pub title: String,
    /// 宿主模板路径；为空时生成默认状态页
    #[serde(default)]
    pub template: Option<String>,
    /// 输出路径；"-" 表示标准输出
    #[serde(default = "default_page_output")]
    pub output: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            template: None,
            output: default_page_output(),
        }
    }
}

fn default_page_title() -> String {
    "服务状态".to_string()
}

fn default_page_output() -> String {
    "-".to_string()
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 是否输出JSON结构化日志
    #[serde(default)]
    pub structured: Option<bool>,
    #[serde(default)]
    pub file: LogFileConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            structured: None,
            file: LogFileConfig::default(),
        }
    }
}

/// 日志文件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFileConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_directory")]
    pub directory: String,
}

impl Default for LogFileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: default_log_directory(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "runtime/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_stdout_and_info_level() {
        let config = Config::default();
        assert_eq!(config.page.output, "-");
        assert!(config.page.template.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file.enabled);
    }

    #[test]
    fn unset_revision_falls_back_to_placeholder() {
        let config = Config::default();
        assert_eq!(config.revision(), REVISION_PLACEHOLDER);
    }

    #[test]
    fn blank_revision_falls_back_to_placeholder() {
        let config = Config {
            revision: Some("   ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.revision(), REVISION_PLACEHOLDER);
    }

    #[test]
    fn explicit_revision_wins() {
        let config = Config {
            revision: Some("a1b2c3d".to_string()),
            ..Config::default()
        };
        assert_eq!(config.revision(), "a1b2c3d");
    }
}
