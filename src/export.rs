//! 题目导出
//!
//! 将识别结果保存为 TOML，便于人工核对或重新提交

use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// 保存题目集合到指定目录，返回写入的文件路径
///
/// 文件名由图片名和当前时间组成，如 `quiz_20240101_120000.toml`
pub async fn save_question_set(folder: &Path, set: &QuestionSet) -> AppResult<PathBuf> {
    fs::create_dir_all(folder)
        .await
        .map_err(|e| AppError::file_write_failed(folder.display().to_string(), e))?;

    let stem = Path::new(&set.source_image)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "questions".to_string());
    let file_name = format!("{}_{}.toml", stem, chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let path = folder.join(file_name);

    let content = toml::to_string_pretty(set).map_err(FileError::from)?;
    fs::write(&path, content)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    info!(
        "💾 已导出 {} 道题目: {}",
        set.questions.len(),
        path.display()
    );
    Ok(path)
}

/// 从 TOML 文件加载题目集合
pub async fn load_question_set(path: &Path) -> AppResult<QuestionSet> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let set: QuestionSet = toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    Ok(set)
}
