//! 集成测试共享工具模块
//!
//! 提供注册表相关的辅助函数，供各集成测试使用

use algolab::runner::{self, Demo};

/// 取全部已登记的演示
pub fn all_demos() -> Vec<Demo> {
    runner::registry()
}

/// 全部演示名称，按登记顺序
pub fn all_names() -> Vec<&'static str> {
    all_demos().iter().map(|demo| demo.name).collect()
}

/// 断言某个名称已登记
pub fn assert_registered(name: &str) {
    assert!(
        all_names().contains(&name),
        "expected demo {name} to be registered"
    );
}
