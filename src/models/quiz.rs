use std::path::PathBuf;

/// 每个测验应有的分卷数量
pub const PARTS_PER_QUIZ: u8 = 3;

/// 测验文件夹，例如 `Quiz3` 或 `Q3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFolder {
    /// 测验编号
    pub quiz_number: u32,
    /// 文件夹路径
    pub path: PathBuf,
}

impl QuizFolder {
    pub fn new(quiz_number: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            quiz_number,
            path: path.into(),
        }
    }
}

/// 测验分卷（1、2、3 之一）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPart {
    /// 分卷序号，从 1 开始
    pub position: u8,
    /// PDF 文件路径
    pub path: PathBuf,
}

impl QuizPart {
    pub fn new(position: u8, path: impl Into<PathBuf>) -> Self {
        Self {
            position,
            path: path.into(),
        }
    }
}

/// 输出子目录名：`Quiz <N>`
pub fn output_folder_name(quiz_number: u32) -> String {
    format!("Quiz {}", quiz_number)
}

/// 输出文件名：`quiz_<N>_<year>_<season>.pdf`
pub fn output_file_name(quiz_number: u32, year: &str, season: &str) -> String {
    format!("quiz_{}_{}_{}.pdf", quiz_number, year, season)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_names() {
        assert_eq!(output_folder_name(3), "Quiz 3");
        assert_eq!(output_file_name(3, "2022", "fall"), "quiz_3_2022_fall.pdf");
    }
}
