//! # OCR 边界模块
//!
//! 定义识别接口 [`Recognizer`]，以及基于 tesseract 命令行的实现。
//!
//! 识别器只负责 "图像路径 -> 文本"，任何解码或引擎错误都以
//! [`RecognitionError`] 返回，不会 panic，也不会退出进程。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 被 `commands/extract.rs` 构造
//! - 子模块: tesseract, fake（仅测试）

pub mod tesseract;

#[cfg(test)]
pub mod fake;

pub use tesseract::TesseractRecognizer;

use crate::error::RecognitionError;
use std::path::Path;

/// 图像文字识别接口
pub trait Recognizer: Send + Sync {
    /// 识别单个图像，返回原始文本
    fn recognize(&self, path: &Path) -> Result<String, RecognitionError>;
}
