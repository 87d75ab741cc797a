//! 日志工具模块
//!
//! 提供日志初始化和横幅 / 统计输出的辅助函数

use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const BANNER_WIDTH: usize = 60;

/// 初始化全局日志订阅者
///
/// 优先使用 `RUST_LOG`；否则详细模式为 debug，普通模式为 info。
/// 不输出时间和 target，使控制台内容保持为进度行的样子。重复调用是安全的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quiz_sorter={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(false)
        .without_time()
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(workspace_dir: &Path, output_dir: &Path) {
    info!("{}", "=".repeat(BANNER_WIDTH));
    info!("ECE109 Quiz Sorter and Merger");
    info!("{}", "=".repeat(BANNER_WIDTH));
    info!("\nWorkspace: {}", workspace_dir.display());
    info!("Output directory: {}\n", output_dir.display());
}

/// 打印最终统计信息
pub fn print_final_stats(merged: usize, errors: usize, output_dir: &Path) {
    info!("\n{}", "=".repeat(BANNER_WIDTH));
    info!("Summary");
    info!(
        "Finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(BANNER_WIDTH));
    info!("Successfully merged: {} quizzes", merged);
    info!("Errors: {}", errors);
    info!("\nOutput location: {}", output_dir.display());
}
