//! 运行器统一错误类型
//!
//! 各题目模块刻意保留自己的局部错误风格（Option守卫、字符串错误、
//! 局部thiserror枚举、文档化panic），这里只为运行器外壳提供统一出口。

use thiserror::Error;

/// 统一的运行器错误类型
#[derive(Error, Debug)]
pub enum LabError {
    #[error("未知的演示名称: {0}")]
    UnknownDemo(String),

    #[error("未知的分类: {0}")]
    UnknownCategory(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("过滤表达式无效: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("日志初始化失败: {0}")]
    Logger(String),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 统一的结果类型
pub type LabResult<T> = Result<T, LabError>;
