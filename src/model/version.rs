//! 页面版本记录模块
//! 定义版本标识占位符与写入页面的两字段记录

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// 发布流程替换前的版本占位符；这里按不透明字符串处理，不做任何替换
pub const REVISION_PLACEHOLDER: &str = "__GIT_SHA__";

/// 页面版本记录
///
/// 字段声明顺序即序列化顺序：git 在前，time 在后。
/// 记录只在一次写入流程中存活，不落盘、不缓存、不外发。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub git: String,
    pub time: String,
}

impl VersionInfo {
    /// 以当前UTC时间构造版本记录；时间只在这里捕获一次
    pub fn capture(revision: &str) -> Self {
        Self::at(revision, now_iso8601())
    }

    /// 以给定时间构造版本记录
    pub fn at(revision: &str, time: String) -> Self {
        Self {
            git: revision.to_string(),
            time,
        }
    }

    /// 两空格缩进的人类可读JSON
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 当前UTC时间，ISO-8601扩展格式（毫秒精度，Z后缀）
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn now_iso8601_matches_extended_format() {
        let re =
            Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$").expect("valid pattern");
        let now = now_iso8601();
        assert!(re.is_match(&now), "unexpected timestamp format: {now}");
    }

    #[test]
    fn successive_captures_are_monotonically_non_decreasing() {
        let first = VersionInfo::capture(REVISION_PLACEHOLDER);
        let second = VersionInfo::capture(REVISION_PLACEHOLDER);
        // 固定宽度的ISO-8601字符串可以按字典序比较
        assert!(first.time <= second.time);
    }

    #[test]
    fn pretty_json_keeps_field_order_and_indentation() {
        let info = VersionInfo::at(REVISION_PLACEHOLDER, "2024-01-01T00:00:00.000Z".to_string());
        let expected = "{\n  \"git\": \"__GIT_SHA__\",\n  \"time\": \"2024-01-01T00:00:00.000Z\"\n}";
        assert_eq!(info.to_pretty_json().expect("serialize"), expected);
    }

    #[test]
    fn serialized_record_has_exactly_two_fields() {
        let info = VersionInfo::capture("a1b2c3d");
        let value: serde_json::Value =
            serde_json::from_str(&info.to_pretty_json().expect("serialize")).expect("parse back");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 2);
        assert_eq!(object["git"], "a1b2c3d");
        assert_eq!(object["time"], info.time);
    }
}
