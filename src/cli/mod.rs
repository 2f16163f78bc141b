//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 由 `models/config.rs` 转换为 `RunConfig`

use clap::Parser;
use std::path::PathBuf;

/// ocrscribe - 批量 OCR 工具
#[derive(Parser, Debug)]
#[command(name = "ocrscribe")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch OCR tool for JPG images", long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Folder containing images (default: directory of the executable)
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Output file path (default: extracted_text.txt inside the folder)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel OCR jobs (0 = auto)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Tesseract executable to invoke
    #[arg(long, env = "TESSERACT_CMD", default_value = "tesseract")]
    pub tesseract_cmd: PathBuf,

    /// Language(s) passed to tesseract, e.g. 'eng' or 'eng+deu'
    #[arg(short, long)]
    pub lang: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ocrscribe"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.folder.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.jobs, 1);
        assert!(cli.lang.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli =
            Cli::try_parse_from(["ocrscribe", "-v", "-f", "scans", "-o", "out/all.txt", "-j", "4"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.folder, Some(PathBuf::from("scans")));
        assert_eq!(cli.output, Some(PathBuf::from("out/all.txt")));
        assert_eq!(cli.jobs, 4);
    }

    #[test]
    fn test_clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
