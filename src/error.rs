use std::path::{Path, PathBuf};
use thiserror::Error;

/// 整理程序错误类型
#[derive(Debug, Error)]
pub enum SorterError {
    /// 读取目录失败
    #[error("failed to read directory {}: {source}", .path.display())]
    DirectoryReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 创建输出目录失败
    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 加载 PDF 失败
    #[error("failed to load PDF {}: {source}", .path.display())]
    PdfLoadFailed {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// PDF 结构不完整（缺少页面树等）
    #[error("malformed PDF {}: {reason}", .path.display())]
    PdfMalformed { path: PathBuf, reason: String },

    /// 写入合并结果失败
    #[error("failed to write PDF {}: {source}", .path.display())]
    PdfWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 没有需要合并的文件
    #[error("no files to merge")]
    EmptyInput,

    /// 配置文件解析失败
    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 配置文件读取失败
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl SorterError {
    /// 创建目录读取错误
    pub fn dir_read_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SorterError::DirectoryReadFailed {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 创建 PDF 加载错误
    pub fn pdf_load_failed(path: impl AsRef<Path>, source: lopdf::Error) -> Self {
        SorterError::PdfLoadFailed {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 创建 PDF 结构错误
    pub fn pdf_malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        SorterError::PdfMalformed {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// 整理程序结果类型
pub type SorterResult<T> = Result<T, SorterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = SorterError::pdf_malformed("Quiz1/Quiz1.1.pdf", "no pages");
        let msg = err.to_string();
        assert!(msg.contains("Quiz1.1.pdf"));
        assert!(msg.starts_with("malformed PDF"));
        assert!(msg.contains("no pages"));
    }

    #[test]
    fn test_io_source_is_exposed() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SorterError::dir_read_failed("Quizzes-Fall-2021", io);
        assert!(err.source().is_some());
    }
}
