//! 单个学期处理器 - 编排层
//!
//! 遍历一个学期文件夹下的所有测验，委托 `QuizFlow` 处理并累计统计

use crate::models::SemesterFolder;
use crate::services::find_quiz_folders;
use crate::utils::fs::file_name_lossy;
use crate::workflow::{ProcessResult, QuizCtx, QuizFlow};
use tracing::{error, info};

/// 运行统计（整个运行期间只由编排层持有）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub merged: usize,
    pub errors: usize,
}

impl RunStats {
    pub fn record(&mut self, result: &ProcessResult) {
        if result.is_success() {
            self.merged += 1;
        } else {
            self.errors += 1;
        }
    }
}

/// 处理单个学期
pub fn process_semester(flow: &mut QuizFlow, semester: &SemesterFolder, stats: &mut RunStats) {
    info!("\nProcessing {}...", file_name_lossy(&semester.path));

    let quiz_folders = match find_quiz_folders(&semester.path) {
        Ok(folders) => folders,
        Err(e) => {
            error!("  {}", e);
            stats.errors += 1;
            return;
        }
    };

    for quiz in &quiz_folders {
        let ctx = QuizCtx::new(semester, quiz);
        let result = flow.run(&ctx);
        stats.record(&result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_record_counts() {
        let mut stats = RunStats::default();
        stats.record(&ProcessResult::Merged {
            output_path: PathBuf::from("a.pdf"),
        });
        stats.record(&ProcessResult::Incomplete { found: 1 });
        stats.record(&ProcessResult::MergeFailed);
        stats.record(&ProcessResult::Duplicate {
            output_path: PathBuf::from("a.pdf"),
        });

        assert_eq!(stats, RunStats { merged: 1, errors: 3 });
    }
}
