use std::io;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::Format;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

use crate::util::config::LoggingConfig;

/// 根据配置初始化日志系统；启用文件输出时返回appender守卫，
/// 调用方需要持有守卫直到进程结束
pub fn log_init_with_config(
    file_prefix: &str,
    config: &LoggingConfig,
) -> anyhow::Result<Option<WorkerGuard>> {
    let level_filter = match config.level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    };
    let use_json = config.structured.unwrap_or(false);

    let stdout_filter = EnvFilter::try_new(level_filter_to_str(level_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.file.enabled {
        std::fs::create_dir_all(&config.file.directory)?;

        let file_appender = daily(&config.file.directory, format!("{}-info", file_prefix));
        let (no_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let file_filter = EnvFilter::try_new(level_filter_to_str(level_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        if use_json {
            let stdout_layer = layer()
                .json()
                .with_target(false)
                .with_writer(io::stdout)
                .with_filter(stdout_filter);

            let file_layer = layer()
                .json()
                .with_target(false)
                .with_ansi(false)
                .with_writer(no_blocking)
                .with_filter(file_filter);

            Registry::default().with(stdout_layer).with(file_layer).init();
        } else {
            let console_format = Format::default()
                .without_time()
                .with_level(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false);

            let file_format = Format::default()
                .without_time()
                .with_level(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false);

            let stdout_layer = layer()
                .event_format(console_format)
                .with_writer(io::stdout)
                .with_filter(stdout_filter);

            let file_layer = layer()
                .event_format(file_format)
                .with_ansi(false)
                .with_writer(no_blocking)
                .with_filter(file_filter);

            Registry::default().with(stdout_layer).with(file_layer).init();
        }

        tracing::info!(
            event = "log.init",
            level = %config.level,
            console = true,
            file = true,
            directory = %config.file.directory,
            rotation = "daily",
            structured = use_json
        );

        Ok(Some(guard))
    } else {
        if use_json {
            let stdout_layer = layer()
                .json()
                .with_target(false)
                .with_writer(io::stdout)
                .with_filter(stdout_filter);

            Registry::default().with(stdout_layer).init();
        } else {
            let console_format = Format::default()
                .without_time()
                .with_level(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false);

            let stdout_layer = layer()
                .event_format(console_format)
                .with_writer(io::stdout)
                .with_filter(stdout_filter);

            Registry::default().with(stdout_layer).init();
        }

        tracing::info!(
            event = "log.init",
            level = %config.level,
            console = true,
            file = false,
            structured = use_json
        );

        Ok(None)
    }
}

fn level_filter_to_str(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::OFF => "off",
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
    }
}
