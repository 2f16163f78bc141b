//! # 图像收集器
//!
//! 列出目录下（不递归）所有 `.jpg` 文件，并按文件名排序。
//!
//! ## 排序约定
//! 返回列表按文件名字节序升序排列（区分大小写），扩展名匹配不区分大小写。
//! 输出文本的块顺序完全依赖这一顺序。
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Result, ScribeError};
use crate::models::ImageFile;

use std::path::PathBuf;
use walkdir::WalkDir;

/// 目标扩展名（小写，不含点）
pub const TARGET_EXTENSION: &str = "jpg";

/// 扫描结果
#[derive(Debug, PartialEq, Eq)]
pub enum Discovery {
    /// 找到的图像，已排序
    Images(Vec<ImageFile>),
    /// 目录中没有匹配的文件
    NoInputFiles,
}

/// 图像收集器
pub struct ImageCollector {
    /// 输入目录
    folder: PathBuf,
}

impl ImageCollector {
    /// 创建新的图像收集器
    pub fn new(folder: PathBuf) -> Self {
        Self { folder }
    }

    /// 收集所有匹配的图像
    pub fn collect(&self) -> Result<Discovery> {
        if !self.folder.is_dir() {
            return Err(ScribeError::DirectoryNotFound {
                path: self.folder.display().to_string(),
            });
        }

        let walker = WalkDir::new(&self.folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut images = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // 根目录本身不可读为致命错误；单个条目（如失效的符号链接）跳过
                Err(e) if e.depth() == 0 => {
                    return Err(ScribeError::DirectoryReadError {
                        path: self.folder.display().to_string(),
                        source: e.into(),
                    })
                }
                Err(_) => continue,
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let matched = has_target_extension(&entry.file_name().to_string_lossy());
            if matched {
                images.push(ImageFile::new(entry.into_path()));
            }
        }

        if images.is_empty() {
            Ok(Discovery::NoInputFiles)
        } else {
            Ok(Discovery::Images(images))
        }
    }
}

/// 不区分大小写的后缀匹配
fn has_target_extension(name: &str) -> bool {
    name.to_lowercase()
        .ends_with(&format!(".{}", TARGET_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(discovery: Discovery) -> Vec<String> {
        match discovery {
            Discovery::Images(images) => images.into_iter().map(|i| i.file_name).collect(),
            Discovery::NoInputFiles => vec![],
        }
    }

    #[test]
    fn test_has_target_extension() {
        assert!(has_target_extension("scan.jpg"));
        assert!(has_target_extension("SCAN.JPG"));
        assert!(has_target_extension("scan.Jpg"));
        assert!(!has_target_extension("scan.jpeg"));
        assert!(!has_target_extension("scan.png"));
        assert!(!has_target_extension("jpg"));
        assert!(!has_target_extension("scan.jpg.txt"));
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.jpg", "C.JPG", "notes.txt", "c.png"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let discovery = ImageCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();

        // 大写字母排在小写之前（字节序）
        assert_eq!(names(discovery), vec!["C.JPG", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_collect_skips_directories_and_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("album.jpg")).unwrap();
        fs::write(dir.path().join("album.jpg").join("inner.jpg"), b"x").unwrap();
        fs::write(dir.path().join("top.jpg"), b"x").unwrap();

        let discovery = ImageCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();
        assert_eq!(names(discovery), vec!["top.jpg"]);
    }

    #[test]
    fn test_collect_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();

        let discovery = ImageCollector::new(dir.path().to_path_buf())
            .collect()
            .unwrap();
        assert_eq!(discovery, Discovery::NoInputFiles);
    }

    #[test]
    fn test_collect_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = ImageCollector::new(missing).collect();
        assert!(matches!(result, Err(ScribeError::DirectoryNotFound { .. })));
    }
}
