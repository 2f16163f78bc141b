//! # ocrscribe - 批量 OCR 工具
//!
//! 扫描目录中的 `.jpg` 图像，调用 tesseract 识别文字，
//! 按文件名顺序合并写入单个文本文件。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (运行流程)
//!   │     ├── batch/   (扫描、批处理、写出、汇报)
//!   │     ├── ocr/     (识别器接口与 tesseract 实现)
//!   │     └── models/  (配置与结果模型)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod ocr;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&error::describe(&e));
        std::process::exit(1);
    }
}
