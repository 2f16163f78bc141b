//! # 运行汇报
//!
//! 写出成功后输出统计（verbose）与最终输出路径（总是输出）。

use crate::models::RunSummary;
use crate::utils::{output, Logger};

use std::path::Path;

/// 统计行
pub fn summary_lines(summary: &RunSummary) -> [String; 3] {
    [
        "\nFinished processing all images.".to_string(),
        format!("Successfully processed: {}", summary.success),
        format!("Failed to process: {}", summary.failed),
    ]
}

/// 输出汇报
pub fn report(summary: &RunSummary, output_path: &Path, logger: &Logger) {
    for line in summary_lines(summary) {
        logger.log(&line);
    }
    output::print_saved_to(output_path);
}
