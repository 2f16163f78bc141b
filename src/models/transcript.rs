//! # 识别结果数据模型
//!
//! 单个图像的识别结果 [`OcrResult`]，以及整次运行聚合出的
//! [`Transcript`] 与 [`RunSummary`]。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `batch/writer.rs`, `batch/report.rs` 使用
//! - 使用 `error.rs` 中的 `RecognitionError`

use crate::error::RecognitionError;
use std::path::{Path, PathBuf};

/// 待识别的图像文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// 文件路径
    pub path: PathBuf,
    /// 文件名（用于输出标题）
    pub file_name: String,
}

impl ImageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        ImageFile { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 单个文件的识别结果
#[derive(Debug)]
pub enum OcrResult {
    /// 识别成功
    Success { file_name: String, text: String },
    /// 识别失败
    Failure {
        file_name: String,
        error: RecognitionError,
    },
}

impl OcrResult {
    pub fn file_name(&self) -> &str {
        match self {
            OcrResult::Success { file_name, .. } | OcrResult::Failure { file_name, .. } => {
                file_name
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OcrResult::Success { .. })
    }
}

/// 按文件顺序排列的识别文本
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    blocks: Vec<String>,
}

impl Transcript {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个文件的文本块
    pub fn push(&mut self, file_name: &str, text: &str) {
        self.blocks.push(format_block(file_name, text));
    }

    /// 文本块数量
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// 拼接后的完整文本
    pub fn render(&self) -> String {
        self.blocks.concat()
    }
}

/// 单个文件的输出块：标题行、去除首尾空白的文本、空行
pub fn format_block(file_name: &str, text: &str) -> String {
    format!("--- {} ---\n{}\n\n", file_name, text.trim())
}

/// 运行统计
///
/// 只通过 [`RunSummary::record`] 递增，保证 `success + failed == total`。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 已处理数量
    pub total: usize,
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
}

impl RunSummary {
    /// 计入一个结果
    pub fn record(&mut self, result: &OcrResult) {
        self.total += 1;
        if result.is_success() {
            self.success += 1;
        } else {
            self.failed += 1;
        }
    }
}
