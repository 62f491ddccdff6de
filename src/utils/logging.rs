// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::LogConfig;
use crate::core::error::SteinerResult;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// `to_file` 为 false 时同步输出到 stderr，否则异步写入按大小轮转的日志文件。
/// 已经初始化时直接返回。
///
/// # Arguments
/// * `config` - 日志配置
///
/// # Examples
/// ```no_run
/// use steiner_graph::config::LogConfig;
/// use steiner_graph::utils::logging;
///
/// logging::init(&LogConfig::default()).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> SteinerResult<()> {
    if is_initialized() {
        return Ok(());
    }

    let logger = Logger::try_with_str(&config.level)?;
    let handle = if config.to_file {
        logger
            .log_to_file(
                FileSpec::default()
                    .basename(&config.file)
                    .directory(&config.dir),
            )
            .rotate(
                Criterion::Size(config.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?
    } else {
        logger.log_to_stderr().write_mode(WriteMode::Direct).start()?
    };

    // 保存句柄供后续 flush 使用
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    if config.to_file {
        log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    } else {
        log::debug!("日志系统初始化完成: stderr");
    }
    Ok(())
}

/// 刷新异步写入的日志并释放句柄
///
/// 程序退出前调用。`log` 门面只允许设置一次全局 logger，
/// 因此关闭后在同一进程内再次调用 [`init`] 会返回 `SteinerError::Logging`
pub fn shutdown() {
    let handle = match LOGGER_HANDLE.lock() {
        Ok(mut guard) => guard.take(),
        Err(_) => None,
    };
    if let Some(handle) = handle {
        handle.flush();
    }
}

/// 当前进程是否持有日志句柄
pub fn is_initialized() -> bool {
    matches!(LOGGER_HANDLE.lock(), Ok(guard) if guard.is_some())
}
