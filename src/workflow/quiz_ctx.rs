//! 测验处理上下文
//!
//! 封装"我正在处理哪个学期的第几个测验"这一信息

use crate::models::{QuizFolder, SemesterFolder};
use std::fmt::Display;
use std::path::PathBuf;

/// 测验处理上下文
#[derive(Debug, Clone)]
pub struct QuizCtx {
    /// 季节（小写）
    pub season: String,

    /// 年份
    pub year: String,

    /// 测验编号
    pub quiz_number: u32,

    /// 测验文件夹路径
    pub quiz_path: PathBuf,
}

impl QuizCtx {
    pub fn new(semester: &SemesterFolder, quiz: &QuizFolder) -> Self {
        Self {
            season: semester.season.clone(),
            year: semester.year.clone(),
            quiz_number: quiz.quiz_number,
            quiz_path: quiz.path.clone(),
        }
    }
}

impl Display for QuizCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} {} Quiz#{}]",
            self.season, self.year, self.quiz_number
        )
    }
}
