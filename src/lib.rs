//! # Quiz Sorter
//!
//! 将散落在各学期文件夹中的测验分卷 PDF 合并、重命名到统一的目录结构
//!
//! ```text
//! 输入: Quizzes-{Season}-{Year}/Quiz{N}/Quiz{N}.{1,2,3}.pdf
//! 输出: Quizzes/Quiz {N}/quiz_{N}_{year}_{season}.pdf
//! ```
//!
//! 原始文件不会被修改。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 唯一接触 PDF 结构的地方，只暴露合并能力
//!
//! ### ② 业务能力层（Services）
//! - `semester_scanner` - 识别学期文件夹
//! - `quiz_finder` - 识别测验文件夹
//! - `part_locator` - 定位三个分卷
//!
//! ### ③ 流程层（Workflow）
//! - `QuizFlow` - 单个测验的 定位 → 合并
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 扫描学期、汇总统计
//! - `orchestrator/semester_processor` - 遍历单个学期的测验

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{SorterError, SorterResult};
pub use infrastructure::merge_pdfs;
pub use models::{QuizFolder, QuizPart, SemesterFolder};
pub use orchestrator::{App, RunStats};
pub use workflow::{ProcessResult, QuizCtx, QuizFlow};
