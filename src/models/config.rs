//! # 运行配置
//!
//! 由命令行参数一次性构建，运行期间不可变。
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的 `Cli`
//! - 被 `commands/extract.rs` 使用

use crate::cli::Cli;
use std::path::{Path, PathBuf};

/// 默认输出文件名
pub const DEFAULT_OUTPUT_NAME: &str = "extracted_text.txt";

/// 单次运行的配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 图像所在目录
    pub folder: PathBuf,
    /// 输出文本文件
    pub output: PathBuf,
    /// 是否输出带时间戳的详细日志
    pub verbose: bool,
    /// 并行作业数（已解析，至少为 1）
    pub jobs: usize,
    /// tesseract 可执行文件
    pub tesseract_cmd: PathBuf,
    /// 传给 tesseract 的 `-l` 参数
    pub lang: Option<String>,
}

impl RunConfig {
    /// 从命令行参数构建，补全默认值
    pub fn from_cli(cli: Cli) -> Self {
        let folder = cli.folder.unwrap_or_else(executable_dir);
        let output = cli
            .output
            .unwrap_or_else(|| default_output_path(&folder));

        RunConfig {
            folder,
            output,
            verbose: cli.verbose,
            jobs: resolve_jobs(cli.jobs),
            tesseract_cmd: cli.tesseract_cmd,
            lang: cli.lang,
        }
    }
}

/// `<folder>/extracted_text.txt`
pub fn default_output_path(folder: &Path) -> PathBuf {
    folder.join(DEFAULT_OUTPUT_NAME)
}

/// 0 表示按 CPU 数自动选择
pub fn resolve_jobs(jobs: usize) -> usize {
    if jobs == 0 {
        num_cpus::get()
    } else {
        jobs
    }
}

/// 可执行文件所在目录，无法确定时退回当前目录
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
