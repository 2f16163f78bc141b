//! # 结果写出
//!
//! 一次性写出完整文本（UTF-8），覆盖已有文件。父目录不存在时递归创建。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `models/transcript.rs`

use crate::error::{Result, ScribeError};
use crate::models::Transcript;
use crate::utils::Logger;

use std::fs;
use std::path::Path;

/// 写出文本文件
pub fn write_transcript(path: &Path, transcript: &Transcript, logger: &Logger) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| ScribeError::DirectoryCreateError {
                path: dir.display().to_string(),
                source: e,
            })?;
            logger.log(&created_dir_message(dir));
        }
    }

    fs::write(path, transcript.render()).map_err(|e| ScribeError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn created_dir_message(dir: &Path) -> String {
    format!("Created output directory: {}", dir.display())
}
