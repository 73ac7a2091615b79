use thiserror::Error;

/// 展示区域写入错误
#[derive(Debug, Error)]
pub enum DisplayError {
    /// 文档里找不到指定id的展示区域
    #[error("展示区域不存在: {0}")]
    RegionMissing(String),
}

/// 展示文档trait
///
/// 文档由外部提供，区域通过稳定id寻址；实现只负责替换文本内容，
/// 不创建区域、不读回内容。
pub trait Document {
    /// 设置指定区域的文本内容
    fn set_text(&mut self, region: &str, text: &str) -> Result<(), DisplayError>;
}
