//! # 数据模型模块
//!
//! 定义运行配置、待处理图像与识别结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: config, transcript

pub mod config;
pub mod transcript;

pub use config::RunConfig;
pub use transcript::{ImageFile, OcrResult, RunSummary, Transcript};
