//! # 统一错误处理模块
//!
//! 定义 ocrscribe 的错误类型，使用 `thiserror` 派生。
//!
//! 错误分两层：
//! - [`ScribeError`]：整次运行失败（扫描目录、写出结果），向上传播到 `main`
//! - [`RecognitionError`]：单个图像识别失败，只在批处理内部被吸收为失败计数
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 运行级错误（致命）
#[derive(Error, Debug)]
pub enum ScribeError {
    // ─────────────────────────────────────────────────────────────
    // 扫描错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 写出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create directory: {path}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build worker pool: {0}")]
    WorkerPool(String),
}

/// 单个图像的识别错误
///
/// 只由 [`crate::ocr::Recognizer`] 产生，批处理将其转为失败结果后继续。
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("image not found: {path}")]
    ImageNotFound { path: String },

    #[error("cannot decode image: {reason}")]
    Decode { reason: String },

    #[error("cannot prepare image for OCR engine: {reason}")]
    Encode { reason: String },

    #[error("OCR engine '{command}' not found in PATH")]
    EngineNotFound { command: String },

    #[error("OCR engine '{command}' I/O failure: {reason}")]
    EngineIo { command: String, reason: String },

    #[error("OCR engine '{command}' failed ({status}): {stderr}")]
    EngineFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ScribeError>;

/// 拼接错误及其 source 链，用于终端输出
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    message
}
