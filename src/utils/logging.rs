//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数
use crate::error::{AppError, AppResult};
use crate::models::question::Question;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug 或 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // 测试中可能被多次调用，重复初始化直接忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\n题目识别日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header).map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(image_path: &str, form_id: Option<&str>) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 图片题目导入");
    info!("🖼️ 图片: {}", image_path);
    info!("📝 表单: {}", form_id.unwrap_or("(未指定)"));
    info!("{}", "=".repeat(60));
}

/// 记录识别出的题目
///
/// # 参数
/// - `questions`: 题目列表
/// - `verbose`: 是否逐条输出选项
pub fn log_questions(questions: &[Question], verbose: bool) {
    info!("✓ 共识别出 {} 道题目", questions.len());
    for (i, question) in questions.iter().enumerate() {
        info!("  {}. {}", i + 1, question);
        if verbose {
            for option in &question.options {
                info!("     - {}", truncate_text(option, 60));
            }
        }
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("一二三四五", 3), "一二三...");
    }

    #[test]
    fn test_init_log_file_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        init_log_file(path.to_str().unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("题目识别日志"));
    }
}
