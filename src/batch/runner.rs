//! # 批量执行器
//!
//! 对排好序的图像列表逐个调用识别器，汇总为文本与统计。
//!
//! ## 功能
//! - 单个文件失败不影响其他文件
//! - 进度条与详细日志各自独立观察同一次迭代
//! - `jobs > 1` 时基于 rayon 并行，结果仍按输入顺序汇总
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `ocr/` 中的 `Recognizer`
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{Result, ScribeError};
use crate::models::{ImageFile, OcrResult, RunSummary, Transcript};
use crate::ocr::Recognizer;
use crate::utils::{progress, Logger};

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 批量处理结果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 成功文件的文本，按输入顺序
    pub transcript: Transcript,
    /// 统计
    pub summary: RunSummary,
}

impl BatchOutcome {
    /// 合并处理结果
    pub fn merge(&mut self, result: OcrResult) {
        self.summary.record(&result);
        if let OcrResult::Success { file_name, text } = result {
            self.transcript.push(&file_name, &text);
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器（`jobs` 已由 `RunConfig` 解析）
    pub fn new(jobs: usize) -> Self {
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 不绘制进度条
    #[cfg(test)]
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// 处理图像列表
    pub fn run<R>(
        &self,
        images: &[ImageFile],
        recognizer: &R,
        logger: &Logger,
    ) -> Result<BatchOutcome>
    where
        R: Recognizer + ?Sized,
    {
        let total = images.len();
        let pb = if self.show_progress {
            progress::create_progress_bar(total as u64, "Processing images")
        } else {
            ProgressBar::hidden()
        };

        let step = Step {
            recognizer,
            logger,
            pb: &pb,
            total,
            completed: AtomicUsize::new(0),
        };

        let results: Vec<OcrResult> = if self.jobs <= 1 {
            images.iter().map(|image| step.process(image)).collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()
                .map_err(|e| ScribeError::WorkerPool(e.to_string()))?;

            pool.install(|| images.par_iter().map(|image| step.process(image)).collect())
        };

        pb.finish_and_clear();

        // 汇总结果（单线程，按输入顺序）
        let mut outcome = BatchOutcome::default();
        for result in results {
            outcome.merge(result);
        }

        Ok(outcome)
    }
}

/// 单个文件的处理步骤
struct Step<'a, R: ?Sized> {
    recognizer: &'a R,
    logger: &'a Logger,
    pb: &'a ProgressBar,
    total: usize,
    completed: AtomicUsize,
}

impl<R> Step<'_, R>
where
    R: Recognizer + ?Sized,
{
    fn process(&self, image: &ImageFile) -> OcrResult {
        let result = match self.recognizer.recognize(image.path()) {
            Ok(text) => OcrResult::Success {
                file_name: image.file_name.clone(),
                text,
            },
            Err(error) => OcrResult::Failure {
                file_name: image.file_name.clone(),
                error,
            },
        };

        let index = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        self.logger
            .log_above(self.pb, &progress_message(index, self.total, &result));

        self.pb.inc(1);
        result
    }
}

/// 单个文件的日志行
fn progress_message(index: usize, total: usize, result: &OcrResult) -> String {
    match result {
        OcrResult::Success { file_name, .. } => format!(
            "[{}/{}] Successfully processed: {}",
            index, total, file_name
        ),
        OcrResult::Failure { file_name, error } => format!(
            "[{}/{}] Error processing {}: {}",
            index, total, file_name, error
        ),
    }
}
