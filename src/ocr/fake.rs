//! 测试用识别器：按文件名返回预设结果，可注入延迟。

use super::Recognizer;
use crate::error::RecognitionError;

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[derive(Default)]
pub struct FakeRecognizer {
    outcomes: HashMap<String, Result<String, String>>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl FakeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, file_name: &str, text: &str) -> Self {
        self.outcomes
            .insert(file_name.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, file_name: &str, reason: &str) -> Self {
        self.outcomes
            .insert(file_name.to_string(), Err(reason.to_string()));
        self
    }

    pub fn delay(mut self, file_name: &str, millis: u64) -> Self {
        self.delays
            .insert(file_name.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Recognizer for FakeRecognizer {
    fn recognize(&self, path: &Path) -> Result<String, RecognitionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if let Some(delay) = self.delays.get(&name) {
            thread::sleep(*delay);
        }

        match self.outcomes.get(&name) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(reason)) => Err(RecognitionError::Decode {
                reason: reason.clone(),
            }),
            None => Err(RecognitionError::ImageNotFound {
                path: path.display().to_string(),
            }),
        }
    }
}
