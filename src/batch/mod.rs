//! # 批量处理模块
//!
//! 扫描 -> 逐个识别 -> 写出 -> 汇报。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod report;
pub mod runner;
pub mod writer;

pub use collector::{Discovery, ImageCollector};
pub use runner::BatchRunner;
pub use writer::write_transcript;
