//! # 文本提取命令实现
//!
//! 扫描目录中的 `.jpg`，逐个 OCR，写出单个文本文件并汇报统计。
//!
//! ## 运行状态
//! ```text
//! Init -> Discovering -> { NoInput | Processing } -> Writing -> { Done | WriteFailed }
//! ```
//! 单个文件识别失败不会让运行进入失败状态，只有扫描与写出错误是致命的。
//!
//! ## 依赖关系
//! - 使用 `models/config.rs` 中的 `RunConfig`
//! - 使用 `batch/` 完成扫描、处理、写出与汇报
//! - 使用 `ocr/tesseract.rs` 作为默认识别器

use crate::batch::{report, write_transcript, BatchRunner, Discovery, ImageCollector};
use crate::error::Result;
use crate::models::{RunConfig, RunSummary};
use crate::ocr::{Recognizer, TesseractRecognizer};
use crate::utils::{output, Logger};

/// 运行结束状态
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// 没有可处理的图像，未写出文件
    NoInput,
    /// 已写出文件
    Done(RunSummary),
}

/// 执行提取
pub fn execute(config: RunConfig) -> Result<()> {
    let recognizer = TesseractRecognizer::new(config.tesseract_cmd.clone(), config.lang.clone());
    let runner = BatchRunner::new(config.jobs);
    run_with(&config, &recognizer, &runner)?;
    Ok(())
}

/// 使用给定识别器完成一次运行
pub fn run_with<R>(
    config: &RunConfig,
    recognizer: &R,
    runner: &BatchRunner,
) -> Result<RunOutcome>
where
    R: Recognizer + ?Sized,
{
    let logger = Logger::new(config.verbose);

    let images = match ImageCollector::new(config.folder.clone()).collect()? {
        Discovery::Images(images) => images,
        Discovery::NoInputFiles => {
            output::print_warning("No .jpg images found in the folder.");
            return Ok(RunOutcome::NoInput);
        }
    };

    logger.log(&format!("Found {} .jpg images to process.", images.len()));

    let outcome = runner.run(&images, recognizer, &logger)?;

    write_transcript(&config.output, &outcome.transcript, &logger)?;

    report::report(&outcome.summary, &config.output, &logger);

    Ok(RunOutcome::Done(outcome.summary))
}
