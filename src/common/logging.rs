// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::common::{LabError, LabResult};
use crate::config::RunnerConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 默认只输出到stderr，保持stdout只承载演示输出；
/// 开启 `log.to_file` 后写入滚动日志文件。
pub fn init(config: &RunnerConfig) -> LabResult<()> {
    let builder = Logger::try_with_str(&config.log.level)
        .map_err(|e| LabError::Logger(e.to_string()))?;

    let handle = if config.log.to_file {
        builder
            .log_to_file(
                FileSpec::default()
                    .basename(&config.log.file)
                    .directory(&config.log.dir),
            )
            .rotate(
                Criterion::Size(config.log.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.log.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()
            .map_err(|e| LabError::Logger(e.to_string()))?
    } else {
        builder
            .start()
            .map_err(|e| LabError::Logger(e.to_string()))?
    };

    // 保存句柄供后续 flush 使用
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::debug!("日志系统初始化完成, level={}", config.log.level);
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
            // handle 在这里被 drop，会等待异步线程完成
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
