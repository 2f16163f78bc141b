//! # 命令执行模块
//!
//! 将命令行参数转换为运行配置并执行。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `batch/`, `ocr/`
//! - 子模块: extract

pub mod extract;

use crate::cli::Cli;
use crate::error::Result;
use crate::models::RunConfig;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    extract::execute(RunConfig::from_cli(cli))
}
