//! 演示运行器模块
//!
//! 把各题目文件底部的驱动函数汇总成注册表，供命令行逐个运行

pub mod demo;
pub mod registry;
pub mod report;

// 重新导出常用类型
pub use demo::{Category, Demo};
pub use registry::{by_category, filter, find, registry};
pub use report::{listing_json, print_listing, print_summary, run_demo, RunReport};
