//! 内存展示文档
//! 测试与嵌入场景用的轻量实现；区域需要显式注册

use std::collections::BTreeMap;

use super::traits::{DisplayError, Document};

/// 内存中的命名文本槽位集合
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    regions: BTreeMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一组空区域
    pub fn with_regions<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self::default();
        for id in ids {
            doc.regions.insert(id.into(), String::new());
        }
        doc
    }

    /// 注册单个空区域
    pub fn insert_region(&mut self, id: impl Into<String>) {
        self.regions.insert(id.into(), String::new());
    }

    /// 读取区域文本；区域未注册时返回None
    pub fn text(&self, region: &str) -> Option<&str> {
        self.regions.get(region).map(String::as_str)
    }

    /// 已注册的区域数量
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl Document for MemoryDocument {
    fn set_text(&mut self, region: &str, text: &str) -> Result<(), DisplayError> {
        match self.regions.get_mut(region) {
            Some(slot) => {
                slot.clear();
                slot.push_str(text);
                Ok(())
            }
            None => Err(DisplayError::RegionMissing(region.to_string())),
        }
    }
}
