//! # tesseract 识别器
//!
//! 先用 `image` 解码图像，再编码为 PNG 通过标准输入传给
//! `tesseract stdin stdout`，读取标准输出作为识别文本。
//!
//! ## 依赖关系
//! - 实现 `ocr/mod.rs` 中的 `Recognizer`
//! - 使用 `image` 解码

use super::Recognizer;
use crate::error::RecognitionError;

use image::{ImageFormat, ImageReader};
use std::io::{Cursor, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 调用外部 tesseract 的识别器
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    /// 可执行文件
    command: PathBuf,
    /// `-l` 语言参数
    lang: Option<String>,
}

impl TesseractRecognizer {
    pub fn new(command: PathBuf, lang: Option<String>) -> Self {
        Self { command, lang }
    }

    fn command_name(&self) -> String {
        self.command.display().to_string()
    }

    /// 解码图像并重新编码为 PNG 字节
    fn load_as_png(&self, path: &Path) -> Result<Vec<u8>, RecognitionError> {
        if !path.is_file() {
            return Err(RecognitionError::ImageNotFound {
                path: path.display().to_string(),
            });
        }

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| RecognitionError::Decode {
                reason: e.to_string(),
            })?
            .decode()
            .map_err(|e| RecognitionError::Decode {
                reason: e.to_string(),
            })?;

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| RecognitionError::Encode {
                reason: e.to_string(),
            })?;

        Ok(buffer.into_inner())
    }

    /// 运行 tesseract，PNG 从 stdin 输入
    fn run_engine(&self, png: &[u8]) -> Result<String, RecognitionError> {
        let mut command = Command::new(&self.command);
        command.args(["stdin", "stdout"]);
        if let Some(lang) = &self.lang {
            command.args(["-l", lang]);
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RecognitionError::EngineNotFound {
                    command: self.command_name(),
                },
                _ => RecognitionError::EngineIo {
                    command: self.command_name(),
                    reason: e.to_string(),
                },
            })?;

        // 引擎提前退出时写入会失败，先看退出状态再决定报哪个错误
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(png),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| RecognitionError::EngineIo {
                command: self.command_name(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RecognitionError::EngineFailed {
                command: self.command_name(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        write_result.map_err(|e| RecognitionError::EngineIo {
            command: self.command_name(),
            reason: e.to_string(),
        })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Recognizer for TesseractRecognizer {
    fn recognize(&self, path: &Path) -> Result<String, RecognitionError> {
        let png = self.load_as_png(path)?;
        self.run_engine(&png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_sample_jpg(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::from_pixel(16, 16, image::Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let recognizer = TesseractRecognizer::new(PathBuf::from("tesseract"), None);

        let result = recognizer.recognize(&dir.path().join("missing.jpg"));
        assert!(matches!(result, Err(RecognitionError::ImageNotFound { .. })));
    }

    #[test]
    fn test_corrupt_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"definitely not a jpeg").unwrap();
        let recognizer = TesseractRecognizer::new(PathBuf::from("tesseract"), None);

        let result = recognizer.recognize(&path);
        assert!(matches!(result, Err(RecognitionError::Decode { .. })));
    }

    #[test]
    fn test_decoded_image_becomes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_jpg(dir.path(), "page.jpg");
        let recognizer = TesseractRecognizer::new(PathBuf::from("tesseract"), None);

        let png = recognizer.load_as_png(&path).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_engine_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_jpg(dir.path(), "page.jpg");
        let engine = dir.path().join("no-such-tesseract");
        let recognizer = TesseractRecognizer::new(engine, None);

        let result = recognizer.recognize(&path);
        assert!(matches!(result, Err(RecognitionError::EngineNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_non_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_jpg(dir.path(), "page.jpg");
        let recognizer = TesseractRecognizer::new(PathBuf::from("false"), None);

        let result = recognizer.recognize(&path);
        assert!(matches!(result, Err(RecognitionError::EngineFailed { .. })));
    }
}
