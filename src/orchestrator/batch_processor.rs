//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责全部学期的扫描与汇总。
//!
//! ## 核心功能
//!
//! 1. **扫描学期**：识别工作目录下的学期文件夹并排序
//! 2. **逐个处理**：委托 semester_processor 处理单个学期
//! 3. **全局统计**：汇总合并成功 / 失败数量并输出每个输出目录的文件数

use crate::config::Config;
use crate::models::{sort_semesters, SemesterFolder};
use crate::orchestrator::semester_processor::{process_semester, RunStats};
use crate::services::scan_semesters;
use crate::utils::fs::{file_name_lossy, list_entries, list_subdirs};
use crate::utils::logging;
use crate::workflow::QuizFlow;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行应用主逻辑
    ///
    /// 单个测验的失败不会中断运行；只有工作目录不可读时返回错误
    pub fn run(&self) -> Result<RunStats> {
        logging::log_startup(&self.config.workspace_dir, &self.config.output_dir);

        let semesters = self.load_semesters()?;
        if semesters.is_empty() {
            warn!("No semester folders found!");
            return Ok(RunStats::default());
        }

        log_semesters(&semesters);

        let mut flow = QuizFlow::new(&self.config.output_dir);
        let mut stats = RunStats::default();
        for semester in &semesters {
            process_semester(&mut flow, semester, &mut stats);
        }

        logging::print_final_stats(stats.merged, stats.errors, &self.config.output_dir);
        if stats.merged > 0 {
            log_output_folders(&self.config.output_dir);
        }

        Ok(stats)
    }

    /// 扫描并排序学期文件夹
    fn load_semesters(&self) -> Result<Vec<SemesterFolder>> {
        let mut semesters = scan_semesters(&self.config.workspace_dir).with_context(|| {
            format!(
                "failed to scan workspace: {}",
                self.config.workspace_dir.display()
            )
        })?;
        sort_semesters(&mut semesters);
        Ok(semesters)
    }
}

/// 每个输出子目录中的 PDF 数量，按目录名排序
pub fn count_output_files(output_dir: &Path) -> Result<Vec<(String, usize)>> {
    let mut counts = Vec::new();

    for folder in list_subdirs(output_dir)? {
        let pdf_count = list_entries(&folder)?
            .iter()
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "pdf"))
            .count();
        counts.push((file_name_lossy(&folder), pdf_count));
    }

    Ok(counts)
}

// ========== 日志辅助函数 ==========

fn log_semesters(semesters: &[SemesterFolder]) {
    info!("Found {} semester folders:", semesters.len());
    for semester in semesters {
        info!("  - {} ({})", file_name_lossy(&semester.path), semester);
    }
}

fn log_output_folders(output_dir: &Path) {
    match count_output_files(output_dir) {
        Ok(counts) => {
            info!("\nCreated folders:");
            for (name, count) in counts {
                info!("  {}: {} files", name, count);
            }
        }
        Err(e) => warn!("Could not list output folders: {}", e),
    }
}
