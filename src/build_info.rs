/// Build-time metadata exposed at runtime.
///
/// 描述二进制自身的构建信息，与页面写入的版本记录无关：
/// 未经替换的构建仍然输出字面占位符（见 model::version）。
pub const BUILD_COMMIT: &str = env!("APP_BUILD_COMMIT");
pub const BUILD_TIMESTAMP: &str = env!("APP_BUILD_TIMESTAMP");

/// Human-readable summary combining Cargo version and build metadata.
pub fn summary() -> String {
    format!(
        "{} (commit {}, built at {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_TIMESTAMP
    )
}
