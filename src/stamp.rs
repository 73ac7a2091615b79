//! 页面版本标记写入
//! 捕获一次时间，把时间戳与版本记录分别写入两个展示区域

use anyhow::Result;

use crate::display::Document;
use crate::model::version::VersionInfo;

/// 构建时间展示区域id
pub const BUILT_REGION: &str = "built";
/// 版本记录展示区域id
pub const VERSION_REGION: &str = "version";

/// 执行一次版本标记。
///
/// 时间只捕获一次，两次写入使用同一字符串。写入顺序固定为
/// built → version；任一区域缺失立即返回错误，之后的区域不再写入。
/// 除两个区域的文本外没有其他可观察效果。
pub fn stamp(doc: &mut dyn Document, revision: &str) -> Result<VersionInfo> {
    let info = VersionInfo::capture(revision);
    stamp_with(doc, &info)?;
    Ok(info)
}

/// 以给定版本记录执行写入；供需要固定时间的调用方使用
pub fn stamp_with(doc: &mut dyn Document, info: &VersionInfo) -> Result<()> {
    doc.set_text(BUILT_REGION, &info.time)?;
    doc.set_text(VERSION_REGION, &info.to_pretty_json()?)?;
    Ok(())
}
