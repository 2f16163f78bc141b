//! # 详细日志
//!
//! `--verbose` 时输出 `[HH:MM:SS] message` 格式的诊断信息，否则静默。
//!
//! 与进度条相互独立：进度条总是显示，日志只受 verbose 控制。
//! 进度条存活期间通过 [`Logger::log_above`] 输出，避免打断进度条绘制。
//!
//! ## 依赖关系
//! - 被 `batch/` 与 `commands/` 使用
//! - 使用 `chrono` 获取本地时间

use chrono::{Local, NaiveTime};
use colored::Colorize;
use indicatif::ProgressBar;

/// 带时间戳、可静默的日志器
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// 输出一行日志
    pub fn log(&self, message: &str) {
        if self.verbose {
            let stamp = timestamp(Local::now().time());
            println!("{} {}", stamp.dimmed(), message);
        }
    }

    /// 在进度条上方输出一行日志
    pub fn log_above(&self, pb: &ProgressBar, message: &str) {
        if self.verbose {
            pb.suspend(|| self.log(message));
        }
    }
}

/// `[HH:MM:SS]`
pub fn timestamp(time: NaiveTime) -> String {
    format!("[{}]", time.format("%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let time = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(timestamp(time), "[09:05:07]");
    }
}
