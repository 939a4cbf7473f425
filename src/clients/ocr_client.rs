//! OCR 客户端
//!
//! 识别引擎视为黑盒：输入一张图片，输出逐行文本
use crate::config::Config;
use crate::error::{AppResult, OcrError};
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, warn};

/// 支持的图片扩展名
const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// 文字识别能力
#[allow(async_fn_in_trait)]
pub trait TextRecognizer {
    /// 识别图片中的文字，返回以换行分隔的原始文本
    async fn recognize(&self, image: &Path) -> AppResult<String>;
}

/// 检查图片是否存在且格式受支持
pub fn validate_image(image: &Path) -> Result<(), OcrError> {
    let path = image.display().to_string();

    let supported = image
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if !supported {
        return Err(OcrError::UnsupportedImage { path });
    }

    if !image.is_file() {
        return Err(OcrError::ImageNotFound { path });
    }

    Ok(())
}

/// 基于 tesseract 命令行的识别客户端
pub struct TesseractClient {
    program: String,
    language: String,
}

impl TesseractClient {
    /// 创建新的识别客户端
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.tesseract_bin.clone(),
            language: config.ocr_language.clone(),
        }
    }
}

impl TextRecognizer for TesseractClient {
    async fn recognize(&self, image: &Path) -> AppResult<String> {
        validate_image(image)?;

        debug!("正在调用 {} 识别: {}", self.program, image.display());

        let output = Command::new(&self.program)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await
            .map_err(|source| OcrError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("识别程序执行失败: {}", stderr);
            return Err(OcrError::RecognitionFailed {
                status: output.status.code(),
                stderr,
            }
            .into());
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("识别完成，共 {} 行", text.lines().count());

        Ok(text)
    }
}
