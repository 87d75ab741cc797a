//! 分卷定位 - 业务能力层
//!
//! 在测验文件夹中按顺序找出 1、2、3 三个分卷

use crate::models::{QuizPart, PARTS_PER_QUIZ};
use crate::utils::fs::{file_name_lossy, list_entries};
use regex::RegexBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 分卷编号与测验编号之间允许的分隔符
const PART_SEPARATORS: [char; 2] = ['.', ','];

/// 查找测验的所有分卷
///
/// 找不到的分卷会记录警告并跳过，返回已找到的部分（保持顺序）。
/// 调用方需要自行检查数量是否为 3。
pub fn find_quiz_parts(quiz_folder: &Path, quiz_number: u32) -> Vec<QuizPart> {
    let mut parts = Vec::new();

    for position in 1..=PARTS_PER_QUIZ {
        match locate_part(quiz_folder, quiz_number, position) {
            Some(path) => {
                debug!("找到分卷 {}: {}", position, path.display());
                parts.push(QuizPart::new(position, path));
            }
            None => warn!(
                "  Warning: Could not find part {} in {}",
                position,
                quiz_folder.display()
            ),
        }
    }

    parts
}

/// 定位单个分卷：先精确匹配文件名，再做大小写不敏感的宽松扫描
fn locate_part(quiz_folder: &Path, quiz_number: u32, position: u8) -> Option<PathBuf> {
    let exact = PART_SEPARATORS.iter().find_map(|sep| {
        let path = quiz_folder.join(format!("Quiz{}{}{}.pdf", quiz_number, sep, position));
        path.is_file().then_some(path)
    });

    exact.or_else(|| scan_loosely(quiz_folder, quiz_number, position))
}

fn scan_loosely(quiz_folder: &Path, quiz_number: u32, position: u8) -> Option<PathBuf> {
    let re = RegexBuilder::new(&format!(r"^Quiz{}[.,]{}\.pdf", quiz_number, position))
        .case_insensitive(true)
        .build()
        .ok()?;

    let entries = match list_entries(quiz_folder) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("  {}", e);
            return None;
        }
    };

    entries.into_iter().find(|path| {
        is_pdf(path) && re.is_match(&file_name_lossy(path))
    })
}

fn is_pdf(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"%PDF-1.5").unwrap();
    }

    fn positions(parts: &[QuizPart]) -> Vec<u8> {
        parts.iter().map(|p| p.position).collect()
    }

    #[test]
    fn test_dot_separator() {
        let dir = tempfile::tempdir().unwrap();
        for p in 1..=3 {
            touch(dir.path(), &format!("Quiz1.{}.pdf", p));
        }

        let parts = find_quiz_parts(dir.path(), 1);
        assert_eq!(positions(&parts), vec![1, 2, 3]);
        assert!(parts[0].path.ends_with("Quiz1.1.pdf"));
    }

    #[test]
    fn test_comma_separator() {
        let dir = tempfile::tempdir().unwrap();
        // 故意倒序创建
        for p in (1..=3).rev() {
            touch(dir.path(), &format!("Quiz6,{}.pdf", p));
        }

        let parts = find_quiz_parts(dir.path(), 6);
        assert_eq!(positions(&parts), vec![1, 2, 3]);
        assert!(parts[2].path.ends_with("Quiz6,3.pdf"));
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "quiz4.1.PDF");
        touch(dir.path(), "QUIZ4,2.pdf");
        touch(dir.path(), "Quiz4.3.pdf");

        let parts = find_quiz_parts(dir.path(), 4);
        assert_eq!(positions(&parts), vec![1, 2, 3]);
        assert!(parts[0].path.ends_with("quiz4.1.PDF"));
    }

    #[test]
    fn test_missing_part_is_omitted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Quiz2.1.pdf");
        touch(dir.path(), "Quiz2.3.pdf");
        // 其他测验的文件不能被误认
        touch(dir.path(), "Quiz12.2.pdf");

        let parts = find_quiz_parts(dir.path(), 2);
        assert_eq!(positions(&parts), vec![1, 3]);
    }

    #[test]
    fn test_missing_folder_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let parts = find_quiz_parts(&dir.path().join("missing"), 1);
        assert!(parts.is_empty());
    }
}
