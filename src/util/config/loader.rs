//! 配置加载和管理模块
//! 处理配置文件的读取、环境变量覆盖与校验

use super::types::Config;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从YAML文件读取配置
    pub fn read_yaml(path: impl AsRef<Path>) -> Result<Config> {
        let config_str = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&config_str)?;
        Ok(config)
    }

    /// 从环境变量读取配置覆盖
    pub fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(revision) = std::env::var("STAMP_REVISION") {
            let trimmed = revision.trim();
            if trimmed.is_empty() {
                config.revision = None;
                tracing::warn!("[warn] STAMP_REVISION 为空，回退到占位符");
            } else {
                config.revision = Some(trimmed.to_string());
                tracing::info!("[ok] 环境变量覆盖版本标识: {}", trimmed);
            }
        }

        if let Ok(template) = std::env::var("STAMP_TEMPLATE") {
            config.page.template = Some(template.clone());
            tracing::info!("[ok] 环境变量覆盖页面模板: {}", template);
        }

        if let Ok(output) = std::env::var("STAMP_OUTPUT") {
            config.page.output = output.clone();
            tracing::info!("[ok] 环境变量覆盖输出路径: {}", output);
        }

        if let Ok(level) = std::env::var("STAMP_LOG_LEVEL") {
            config.logging.level = level.clone();
            tracing::info!("[ok] 环境变量覆盖日志级别: {}", level);
        }

        config
    }

    /// 验证配置的有效性
    pub fn validate_config(config: &Config) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&config.logging.level.as_str()) {
            return Err(anyhow::anyhow!("无效的日志级别: {}", config.logging.level));
        }

        if config.page.output.trim().is_empty() {
            return Err(anyhow::anyhow!("输出路径不能为空"));
        }

        if let Some(template) = config.page.template.as_deref() {
            if template.trim().is_empty() {
                return Err(anyhow::anyhow!("页面模板路径不能为空"));
            }
        }

        Ok(())
    }

    /// 智能配置加载（配置文件 + 环境变量）；文件缺失时使用默认配置
    pub fn load_with_env_overrides(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let base_config = if path.exists() {
            let config = Self::read_yaml(path)?;
            tracing::info!(event = "config.load.success", path = %path.display());
            config
        } else {
            tracing::warn!(
                event = "config.missing",
                path = %path.display(),
                "配置文件不存在，使用默认配置"
            );
            Config::default()
        };

        let config = Self::apply_env_overrides(base_config);
        Self::validate_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_yaml_parses_config() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "revision: \"a1b2c3d\"\npage:\n  title: \"状态\"\n  output: \"out/status.html\"\nlogging:\n  level: \"debug\""
        )
        .expect("write yaml");

        let config = ConfigLoader::read_yaml(file.path()).expect("parse yaml");
        assert_eq!(config.revision.as_deref(), Some("a1b2c3d"));
        assert_eq!(config.page.title, "状态");
        assert_eq!(config.page.output, "out/status.html");
        assert_eq!(config.logging.level, "debug");
        // 未出现的字段走默认值
        assert!(!config.logging.file.enabled);
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn validate_rejects_blank_output() {
        let mut config = Config::default();
        config.page.output = "  ".to_string();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(ConfigLoader::validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn env_overrides_take_precedence() {
        // 本用例独占 STAMP_* 环境变量，其他用例不读取它们
        std::env::set_var("STAMP_REVISION", "feedbee");
        std::env::set_var("STAMP_OUTPUT", "target/page.html");
        std::env::set_var("STAMP_LOG_LEVEL", "warn");

        let config = ConfigLoader::apply_env_overrides(Config::default());

        std::env::remove_var("STAMP_REVISION");
        std::env::remove_var("STAMP_OUTPUT");
        std::env::remove_var("STAMP_LOG_LEVEL");

        assert_eq!(config.revision.as_deref(), Some("feedbee"));
        assert_eq!(config.page.output, "target/page.html");
        assert_eq!(config.logging.level, "warn");
    }
}
