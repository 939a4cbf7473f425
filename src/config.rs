/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待识别的题目图片
    pub image_path: Option<String>,
    /// 目标表单ID
    pub form_id: Option<String>,
    /// 表单更新脚本地址
    pub form_script_url: String,
    /// 表单请求超时（秒）
    pub request_timeout_secs: u64,
    /// tesseract 可执行文件
    pub tesseract_bin: String,
    /// OCR 识别语言
    pub ocr_language: String,
    /// TOML 导出目录
    pub output_folder: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 只识别和导出，不更新表单
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: None,
            form_id: None,
            form_script_url: "https://script.google.com/macros/s/AKfycbwbd9nP94cg7DzHOq8Ld0O8Wia20icRiTRK1eVDmzpm0pca-MVTc8H9gADLTRMpJSYB/exec".to_string(),
            request_timeout_secs: 30,
            tesseract_bin: "tesseract".to_string(),
            ocr_language: "eng".to_string(),
            output_folder: "output_toml".to_string(),
            output_log_file: "output.txt".to_string(),
            verbose_logging: false,
            dry_run: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            image_path: non_empty_var("IMAGE_PATH").or(default.image_path),
            form_id: non_empty_var("FORM_ID").or(default.form_id),
            form_script_url: std::env::var("FORM_SCRIPT_URL").unwrap_or(default.form_script_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            tesseract_bin: std::env::var("TESSERACT_BIN").unwrap_or(default.tesseract_bin),
            ocr_language: std::env::var("OCR_LANGUAGE").unwrap_or(default.ocr_language),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            dry_run: std::env::var("DRY_RUN").ok().and_then(|v| v.parse().ok()).unwrap_or(default.dry_run),
        }
    }

    /// 用命令行参数覆盖图片路径和表单ID：`<image> [form_id]`
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().filter(|a| !a.trim().is_empty());
        if let Some(image) = args.next() {
            self.image_path = Some(image);
        }
        if let Some(form_id) = args.next() {
            self.form_id = Some(form_id);
        }
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
