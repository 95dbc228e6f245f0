//! 通用基础设施模块
//!
//! 包含运行器共享的错误类型与日志初始化，题目模块本身不依赖这里。

pub mod error;
pub mod logging;

pub use error::{LabError, LabResult};
