//! # 工具函数模块
//!
//! 提供美化输出、进度条与带时间戳的详细日志。
//!
//! ## 依赖关系
//! - 被 `batch/` 与 `commands/` 模块使用
//! - 子模块: logger, output, progress

pub mod logger;
pub mod output;
pub mod progress;

pub use logger::Logger;
