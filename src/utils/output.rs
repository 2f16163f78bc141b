//! # 美化输出工具
//!
//! 提供统一的终端输出样式。这些消息不受 `--verbose` 控制。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/report.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印最终输出路径
pub fn print_saved_to(path: &Path) {
    println!("\nAll text saved to: {}", path.display().to_string().bold());
}
