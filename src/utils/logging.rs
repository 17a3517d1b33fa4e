//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::LayoutState;

/// 初始化 tracing，`RUST_LOG` 优先；重复调用不会报错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n版式编辑会话日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 追加一行到日志文件
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    use std::io::Write;

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(
        file,
        "[{}] {}",
        chrono::Local::now().format("%H:%M:%S"),
        line
    )?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 版式编辑器启动");
    if config.startup_query.is_empty() {
        info!("🔗 启动参数: (无)");
    } else {
        info!("🔗 启动参数: {}", config.startup_query);
    }
    info!("💾 存储文件: {}", config.storage_file);
    info!("{}", "=".repeat(60));
}

/// 打印最终版式状态
pub fn print_final_state(state: &LayoutState, failed_commands: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 会话结束");
    info!(
        "文档类型: {} | 首页: {} | 末页: {}",
        state.document_type(),
        state.first_page_layout(),
        state.last_page_layout()
    );
    info!(
        "当前页面: {} | 焦点区域: {}",
        state.shown_page(),
        state.active_region()
    );
    if failed_commands > 0 {
        info!("❌ 被拒绝的命令: {}", failed_commands);
    }
    info!("{}", "=".repeat(60));
}
