//! HTML文档的展示区域实现
//! 通过id定位元素并替换其文本内容；按文本处理，不构建完整DOM

use std::sync::OnceLock;

use regex::Regex;

use super::traits::{DisplayError, Document};

/// 以字符串形式持有的HTML宿主文档
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// 取出（可能已写入的）HTML文本
    pub fn into_html(self) -> String {
        self.html
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }

    /// 读取指定区域当前的原样内容；区域不存在时返回None
    pub fn region_text(&self, region: &str) -> Option<&str> {
        let (start, end) = self.region_span(region)?;
        Some(&self.html[start..end])
    }

    /// 定位id对应元素的内容区间；同id多个元素时取第一个
    fn region_span(&self, region: &str) -> Option<(usize, usize)> {
        static OPEN_TAG_RE: OnceLock<Regex> = OnceLock::new();
        let open_tag = OPEN_TAG_RE.get_or_init(|| {
            // id属性必须紧跟在空白之后，data-id 之类的属性不算
            Regex::new(r#"<([A-Za-z][A-Za-z0-9-]*)[^>]*?\sid\s*=\s*"([^"]*)"[^>]*>"#)
                .expect("valid open tag pattern")
        });

        for caps in open_tag.captures_iter(&self.html) {
            if &caps[2] != region {
                continue;
            }
            let tag = caps.get(1).expect("tag group").as_str();
            let content_start = caps.get(0).expect("whole match").end();
            let content_end = self.matching_close(tag, content_start)?;
            return Some((content_start, content_end));
        }
        None
    }

    /// 从content_start起寻找当前元素的结束标签；同名嵌套子元素按深度跳过
    fn matching_close(&self, tag: &str, content_start: usize) -> Option<usize> {
        let rest = &self.html[content_start..];
        let bytes = rest.as_bytes();
        let open = format!("<{}", tag);
        let close = format!("</{}", tag);
        let mut depth = 1usize;
        let mut cursor = 0usize;

        loop {
            let close_at = cursor + rest[cursor..].find(&close)?;

            // 统计这个结束标签之前新打开的同名子元素（自闭合不算）
            let mut scan = cursor;
            while let Some(found) = rest[scan..close_at].find(&open) {
                let at = scan + found;
                if opens_nested(bytes.get(at + open.len()).copied()) {
                    depth += 1;
                }
                scan = at + open.len();
            }

            cursor = close_at + close.len();
            // 排除 </divx 这类更长标签名的误报
            if is_name_boundary(bytes.get(close_at + close.len()).copied()) {
                depth -= 1;
                if depth == 0 {
                    return Some(content_start + close_at);
                }
            }
        }
    }
}

impl Document for HtmlDocument {
    fn set_text(&mut self, region: &str, text: &str) -> Result<(), DisplayError> {
        let (start, end) = self
            .region_span(region)
            .ok_or_else(|| DisplayError::RegionMissing(region.to_string()))?;
        self.html.replace_range(start..end, &escape_text(text));
        Ok(())
    }
}

/// 开始标签在标签名之后直接闭合或进入属性，才算打开了一个子元素
fn opens_nested(byte: Option<u8>) -> bool {
    matches!(byte, Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n'))
}

fn is_name_boundary(byte: Option<u8>) -> bool {
    matches!(
        byte,
        None | Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n')
    )
}

/// 文本内容的最小转义；引号保持原样，保证写入的JSON可以逐字节读回
fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
