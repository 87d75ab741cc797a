//! 文件系统辅助函数

use crate::error::{SorterError, SorterResult};
use std::fs;
use std::path::{Path, PathBuf};

/// 列出目录下的直接条目，按文件名排序
pub fn list_entries(dir: &Path) -> SorterResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| SorterError::dir_read_failed(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SorterError::dir_read_failed(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();

    Ok(paths)
}

/// 列出目录下的直接子目录，按文件名排序
pub fn list_subdirs(dir: &Path) -> SorterResult<Vec<PathBuf>> {
    Ok(list_entries(dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

/// 文件名（非 UTF-8 部分做有损转换）
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
