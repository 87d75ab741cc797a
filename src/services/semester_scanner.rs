//! 学期文件夹扫描 - 业务能力层
//!
//! 只负责"识别学期文件夹"能力，不关心后续的测验处理

use crate::error::SorterResult;
use crate::models::SemesterFolder;
use crate::utils::fs::{file_name_lossy, list_subdirs};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// 学期文件夹命名规则，按顺序匹配
static SEMESTER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Quizzes-Fall-2021, Quizzes-Winter-2022
        r"^Quizzes-(\w+)-(\d{4})",
        // Quizzes-Fall2024
        r"^Quizzes-(\w+)(\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("学期文件夹正则无效"))
    .collect()
});

/// 从文件夹名中解析 (季节, 年份)
///
/// 季节统一转为小写；不是学期文件夹时返回 `None`
pub fn parse_semester_folder(folder_name: &str) -> Option<(String, String)> {
    SEMESTER_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(folder_name)?;
        Some((caps[1].to_lowercase(), caps[2].to_string()))
    })
}

/// 扫描根目录下的所有学期文件夹
///
/// 未匹配的目录直接忽略；结果保持目录名顺序，排序由调用方负责
pub fn scan_semesters(root: &Path) -> SorterResult<Vec<SemesterFolder>> {
    let mut semesters = Vec::new();

    for path in list_subdirs(root)? {
        let name = file_name_lossy(&path);
        match parse_semester_folder(&name) {
            Some((season, year)) => semesters.push(SemesterFolder::new(season, year, path)),
            None => debug!("跳过非学期目录: {}", name),
        }
    }

    Ok(semesters)
}
