//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 扫描并排序学期文件夹
//! - 持有运行统计
//! - 输出汇总和每个输出目录的文件数
//!
//! ### `semester_processor` - 单个学期处理器
//! - 遍历单个学期的所有测验文件夹
//! - 委托 `QuizFlow` 处理每个测验
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<SemesterFolder>)
//!     ↓
//! semester_processor (处理 Vec<QuizFolder>)
//!     ↓
//! workflow::QuizFlow (处理单个测验)
//!     ↓
//! services (能力层：扫描 / 查找 / 定位)
//!     ↓
//! infrastructure (基础设施：PDF 合并)
//! ```

pub mod batch_processor;
pub mod semester_processor;

pub use batch_processor::{count_output_files, App};
pub use semester_processor::{process_semester, RunStats};
