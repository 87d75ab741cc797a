//! 测验处理流程 - 流程层
//!
//! 核心职责：定义"一个测验"的完整处理流程
//!
//! 流程顺序：
//! 1. 定位三个分卷
//! 2. 检查数量，不足 3 个直接跳过
//! 3. 计算输出路径，检查本次运行是否已写过
//! 4. 合并写出

use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::infrastructure::merge_pdfs;
use crate::models::{output_file_name, output_folder_name, PARTS_PER_QUIZ};
use crate::services::find_quiz_parts;
use crate::utils::fs::file_name_lossy;
use crate::workflow::quiz_ctx::QuizCtx;

/// 测验处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 合并成功
    Merged { output_path: PathBuf },
    /// 分卷不全，已跳过
    Incomplete { found: usize },
    /// 合并失败
    MergeFailed,
    /// 本次运行中已有其他学期文件夹写过同一输出文件
    Duplicate { output_path: PathBuf },
}

impl ProcessResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessResult::Merged { .. })
    }
}

/// 测验处理流程
///
/// - 编排单个测验的 定位 → 合并
/// - 记录本次运行写出的文件，避免两个学期文件夹解析出同一 (季节, 年份) 时静默覆盖
pub struct QuizFlow {
    output_dir: PathBuf,
    /// 输出路径 → 来源测验文件夹
    written: HashMap<PathBuf, PathBuf>,
}

impl QuizFlow {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: HashMap::new(),
        }
    }

    /// 输出路径：`<output_dir>/Quiz <N>/quiz_<N>_<year>_<season>.pdf`
    pub fn output_path(&self, ctx: &QuizCtx) -> PathBuf {
        self.output_dir
            .join(output_folder_name(ctx.quiz_number))
            .join(output_file_name(ctx.quiz_number, &ctx.year, &ctx.season))
    }

    pub fn run(&mut self, ctx: &QuizCtx) -> ProcessResult {
        debug!("{} 开始处理: {}", ctx, ctx.quiz_path.display());

        let parts = find_quiz_parts(&ctx.quiz_path, ctx.quiz_number);
        if parts.len() != PARTS_PER_QUIZ as usize {
            warn!(
                "  Quiz {}: Found {}/{} parts - skipping",
                ctx.quiz_number,
                parts.len(),
                PARTS_PER_QUIZ
            );
            return ProcessResult::Incomplete { found: parts.len() };
        }

        let output_path = self.output_path(ctx);
        if let Some(previous) = self.written.get(&output_path) {
            warn!(
                "  Quiz {}: {} was already written from {} - skipping {}",
                ctx.quiz_number,
                file_name_lossy(&output_path),
                previous.display(),
                ctx.quiz_path.display()
            );
            return ProcessResult::Duplicate { output_path };
        }

        let part_paths: Vec<PathBuf> = parts.into_iter().map(|p| p.path).collect();
        if merge_pdfs(&part_paths, &output_path) {
            info!(
                "  Quiz {}: Merged -> {}",
                ctx.quiz_number,
                file_name_lossy(&output_path)
            );
            self.written
                .insert(output_path.clone(), ctx.quiz_path.clone());
            ProcessResult::Merged { output_path }
        } else {
            error!("  Quiz {}: Failed to merge", ctx.quiz_number);
            ProcessResult::MergeFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuizFolder, SemesterFolder};
    use std::fs;

    #[test]
    fn test_output_path_layout() {
        let flow = QuizFlow::new("/out/Quizzes");
        let semester = SemesterFolder::new("fall", "2022", "/in/Quizzes-Fall-2022");
        let quiz = QuizFolder::new(3, "/in/Quizzes-Fall-2022/Quiz3");
        let ctx = QuizCtx::new(&semester, &quiz);

        assert_eq!(
            flow.output_path(&ctx),
            PathBuf::from("/out/Quizzes/Quiz 3/quiz_3_2022_fall.pdf")
        );
    }

    #[test]
    fn test_incomplete_quiz_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let quiz_dir = root.path().join("Quiz5");
        fs::create_dir(&quiz_dir).unwrap();
        fs::write(quiz_dir.join("Quiz5.1.pdf"), b"%PDF-1.5").unwrap();
        fs::write(quiz_dir.join("Quiz5.2.pdf"), b"%PDF-1.5").unwrap();

        let out = root.path().join("Quizzes");
        let mut flow = QuizFlow::new(&out);
        let semester = SemesterFolder::new("spring", "2021", root.path());
        let ctx = QuizCtx::new(&semester, &QuizFolder::new(5, &quiz_dir));

        assert_eq!(flow.run(&ctx), ProcessResult::Incomplete { found: 2 });
        assert!(!out.exists());
    }
}
