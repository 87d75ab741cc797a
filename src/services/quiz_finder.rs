//! 测验文件夹查找 - 业务能力层

use crate::error::SorterResult;
use crate::models::QuizFolder;
use crate::utils::fs::{file_name_lossy, list_subdirs};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// `Quiz1`、`quiz12-retake` 等（前缀匹配）
static QUIZ_DIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Quiz(\d+)").expect("测验文件夹正则无效"));

/// `Q1`、`q2`（完整匹配）
static SHORT_QUIZ_DIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Q(\d+)$").expect("测验文件夹正则无效"));

/// 从文件夹名中解析测验编号
pub fn parse_quiz_folder(folder_name: &str) -> Option<u32> {
    [&*QUIZ_DIR_RE, &*SHORT_QUIZ_DIR_RE]
        .iter()
        .find_map(|re| re.captures(folder_name))
        .and_then(|caps| caps[1].parse().ok())
}

/// 查找学期目录下的所有测验文件夹，按测验编号升序
///
/// 不是每个子目录都是测验，不符合命名规则的目录直接跳过
pub fn find_quiz_folders(semester_path: &Path) -> SorterResult<Vec<QuizFolder>> {
    let mut quiz_folders = Vec::new();

    for path in list_subdirs(semester_path)? {
        let name = file_name_lossy(&path);
        match parse_quiz_folder(&name) {
            Some(number) => quiz_folders.push(QuizFolder::new(number, path)),
            None => debug!("跳过非测验目录: {}", name),
        }
    }

    quiz_folders.sort_by_key(|q| q.quiz_number);
    Ok(quiz_folders)
}
