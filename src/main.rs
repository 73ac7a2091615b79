use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use version_stamp::build_info;
use version_stamp::display::HtmlDocument;
use version_stamp::page::StatusPage;
use version_stamp::stamp;
use version_stamp::util::config::{Config, ConfigLoader};
use version_stamp::util::log::log_init_with_config;

fn main() -> Result<()> {
    let mut args = std::env::args();
    let _ = args.next();

    match args.next().as_deref() {
        Some("version") | Some("--version") => {
            println!("version-stamp {}", build_info::summary());
            Ok(())
        }
        _ => run(),
    }
}

/// 单次执行：加载配置 → 初始化日志 → 读取宿主页面 → 写入版本标记 → 输出
fn run() -> Result<()> {
    let config_path = config_file_path();
    let config = ConfigLoader::load_with_env_overrides(&config_path)?;

    let _log_guard = log_init_with_config("version-stamp", &config.logging)?;

    info!(event = "stamp.start", "版本信息: {}", build_info::summary());

    let mut doc = load_document(&config)?;
    let revision = config.revision();
    let info = stamp::stamp(&mut doc, &revision).context("版本标记写入失败")?;

    write_output(&config.page.output, doc.into_html())?;

    info!(
        event = "stamp.complete",
        revision = %info.git,
        built_at = %info.time,
        output = %config.page.output
    );

    Ok(())
}

/// 配置文件路径：环境变量优先，默认当前目录的config.yaml
fn config_file_path() -> PathBuf {
    std::env::var("STAMP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.yaml"))
}

/// 读取宿主页面：优先使用配置的模板文件，否则生成默认状态页
fn load_document(config: &Config) -> Result<HtmlDocument> {
    match config.page.template.as_deref() {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("读取页面模板失败: {}", path))?;
            Ok(HtmlDocument::new(html))
        }
        None => Ok(HtmlDocument::new(StatusPage::generate(&config.page.title))),
    }
}

/// 写入输出："-"表示标准输出，否则写入文件（自动创建父目录）
fn write_output(output: &str, html: String) -> Result<()> {
    if output == "-" {
        let mut stdout = std::io::stdout();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let path = Path::new(output);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html).with_context(|| format!("写入输出文件失败: {}", output))?;
    Ok(())
}
